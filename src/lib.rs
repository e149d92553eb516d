pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::cart_service::CartService;
use infrastructure::catalog::JsonCatalog;
use infrastructure::file_slot::FileSlot;
use infrastructure::order_log::FileOrderLog;

/// The concrete cart service the HTTP layer runs against: file-backed slot,
/// JSON seed catalog, append-only order log.
pub type AppCartService = CartService<FileSlot, JsonCatalog, FileOrderLog>;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::cart::get_cart,
        handlers::cart::get_totals,
        handlers::cart::add_item,
        handlers::cart::update_quantity,
        handlers::cart::remove_item,
        handlers::cart::clear_cart,
        handlers::orders::checkout,
        handlers::orders::list_orders,
    ),
    tags(
        (name = "products", description = "Product catalog"),
        (name = "cart", description = "Cart and totals"),
        (name = "orders", description = "Checkout and order history"),
    )
)]
pub struct ApiDoc;

/// Registers every route of the storefront API. Shared between
/// `build_server` and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(handlers::products::list_products))
            .route("/{id}", web::get().to(handlers::products::get_product)),
    )
    .service(
        web::scope("/cart")
            .route("", web::get().to(handlers::cart::get_cart))
            .route("", web::delete().to(handlers::cart::clear_cart))
            .route("/totals", web::get().to(handlers::cart::get_totals))
            .route("/items", web::post().to(handlers::cart::add_item))
            .route(
                "/items/{product_id}",
                web::put().to(handlers::cart::update_quantity),
            )
            .route(
                "/items/{product_id}",
                web::delete().to(handlers::cart::remove_item),
            ),
    )
    .route("/checkout", web::post().to(handlers::orders::checkout))
    .route("/orders", web::get().to(handlers::orders::list_orders));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: web::Data<AppCartService>,
    catalog: web::Data<JsonCatalog>,
    history: web::Data<FileOrderLog>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(catalog.clone())
            .app_data(history.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
