use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::cart::{Cart, LineItem};
use crate::domain::totals::{compute_totals, OrderTotals};
use crate::errors::AppError;
use crate::AppCartService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: String,
    /// Number of units to add. Defaults to 1.
    #[serde(default)]
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// New quantity for the line. Zero or less removes the line.
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    pub product_id: String,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
    pub subtotal: String,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            subtotal: item.subtotal.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalsResponse {
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub total: String,
}

impl From<&OrderTotals> for TotalsResponse {
    fn from(totals: &OrderTotals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            tax: totals.tax.to_string(),
            shipping: totals.shipping.to_string(),
            total: totals.total.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<LineItemResponse>,
    pub totals: TotalsResponse,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        let totals = compute_totals(cart.items());
        Self {
            items: cart.items().iter().map(LineItemResponse::from).collect(),
            totals: TotalsResponse::from(&totals),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /cart
///
/// Returns the current cart with totals derived on the fly.
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Current cart", body = CartResponse),
    ),
    tag = "cart"
)]
pub async fn get_cart(service: web::Data<AppCartService>) -> Result<HttpResponse, AppError> {
    let cart = web::block(move || service.cart())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

/// GET /cart/totals
#[utoipa::path(
    get,
    path = "/cart/totals",
    responses(
        (status = 200, description = "Derived totals for the current cart", body = TotalsResponse),
    ),
    tag = "cart"
)]
pub async fn get_totals(service: web::Data<AppCartService>) -> Result<HttpResponse, AppError> {
    let totals = web::block(move || service.totals())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().json(TotalsResponse::from(&totals)))
}

/// POST /cart/items
///
/// Adds a product to the cart. Re-adding a product increments its quantity
/// and keeps the unit price from the first add.
#[utoipa::path(
    post,
    path = "/cart/items",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Unknown product"),
        (status = 500, description = "Cart could not be persisted"),
    ),
    tag = "cart"
)]
pub async fn add_item(
    service: web::Data<AppCartService>,
    body: web::Json<AddItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let cart = web::block(move || service.add_to_cart(&body.product_id, body.quantity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

/// PUT /cart/items/{productId}
///
/// Sets the quantity of a cart line. A quantity of zero or less removes the
/// line, matching storefront cart behaviour.
#[utoipa::path(
    put,
    path = "/cart/items/{productId}",
    params(
        ("productId" = String, Path, description = "Product id"),
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 500, description = "Cart could not be persisted"),
    ),
    tag = "cart"
)]
pub async fn update_quantity(
    service: web::Data<AppCartService>,
    path: web::Path<String>,
    body: web::Json<UpdateQuantityRequest>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let quantity = body.into_inner().quantity;
    let cart = web::block(move || service.update_quantity(&product_id, quantity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

/// DELETE /cart/items/{productId}
///
/// Removes a line. Removing a product that is not in the cart is a no-op.
#[utoipa::path(
    delete,
    path = "/cart/items/{productId}",
    params(
        ("productId" = String, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 500, description = "Cart could not be persisted"),
    ),
    tag = "cart"
)]
pub async fn remove_item(
    service: web::Data<AppCartService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let cart = web::block(move || service.remove_item(&product_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

/// DELETE /cart
#[utoipa::path(
    delete,
    path = "/cart",
    responses(
        (status = 200, description = "Emptied cart", body = CartResponse),
        (status = 500, description = "Cart could not be cleared"),
    ),
    tag = "cart"
)]
pub async fn clear_cart(service: web::Data<AppCartService>) -> Result<HttpResponse, AppError> {
    let cart = web::block(move || service.clear_cart())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}
