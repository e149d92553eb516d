use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Cart storage failed: {0}")]
    Storage(String),
    #[error("Checkout failed: {0}")]
    Checkout(String),
}
