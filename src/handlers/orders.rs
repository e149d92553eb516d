use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::OrderView;
use crate::domain::ports::OrderHistory;
use crate::errors::AppError;
use crate::infrastructure::order_log::FileOrderLog;
use crate::AppCartService;

use super::cart::{LineItemResponse, TotalsResponse};

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub status: String,
    pub created_at: String,
    pub lines: Vec<LineItemResponse>,
    pub totals: TotalsResponse,
}

impl From<&OrderView> for OrderResponse {
    fn from(order: &OrderView) -> Self {
        Self {
            id: order.id,
            status: order.status.clone(),
            created_at: order.created_at.to_rfc3339(),
            lines: order.lines.iter().map(LineItemResponse::from).collect(),
            totals: TotalsResponse::from(&order.totals),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /checkout
///
/// Submits the current cart as an order and clears the cart on success.
#[utoipa::path(
    post,
    path = "/checkout",
    responses(
        (status = 201, description = "Order submitted", body = CheckoutResponse),
        (status = 400, description = "Cart is empty"),
        (status = 500, description = "Order could not be submitted"),
    ),
    tag = "orders"
)]
pub async fn checkout(service: web::Data<AppCartService>) -> Result<HttpResponse, AppError> {
    let order_id = web::block(move || service.checkout())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Created().json(json!({ "id": order_id })))
}

/// GET /orders
///
/// Lists submitted orders, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Order history", body = [OrderResponse]),
        (status = 500, description = "Order log unreadable"),
    ),
    tag = "orders"
)]
pub async fn list_orders(history: web::Data<FileOrderLog>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || history.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    let items: Vec<OrderResponse> = orders.iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}
