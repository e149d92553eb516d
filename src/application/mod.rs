pub mod cart_service;
pub mod cart_store;
