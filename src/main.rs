use actix_web::web;
use cart_service::infrastructure::catalog::JsonCatalog;
use cart_service::infrastructure::file_slot::FileSlot;
use cart_service::infrastructure::order_log::FileOrderLog;
use cart_service::{build_server, AppCartService};
use dotenvy::dotenv;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let slot_path = env::var("CART_SLOT_PATH").unwrap_or_else(|_| "cart.json".to_string());
    let catalog_path = env::var("CATALOG_PATH").unwrap_or_else(|_| "products.json".to_string());
    let order_log_path = env::var("ORDER_LOG_PATH").unwrap_or_else(|_| "orders.jsonl".to_string());

    let catalog = JsonCatalog::from_file(&catalog_path)
        .unwrap_or_else(|e| panic!("Failed to load catalog from {catalog_path}: {e}"));
    let history = FileOrderLog::new(&order_log_path);
    let service = AppCartService::new(FileSlot::new(&slot_path), catalog.clone(), history.clone());

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(
        web::Data::new(service),
        web::Data::new(catalog),
        web::Data::new(history),
        &host,
        port,
    )?
    .await
}
