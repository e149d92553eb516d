use std::fs;
use std::path::Path;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductCatalog;
use crate::models::product::Product;

/// Product catalog loaded once at startup from a JSON seed file:
/// `[{"productId": "...", "name": "...", "unitPrice": "..."}, ...]`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    products: Vec<Product>,
}

impl JsonCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::Storage(format!("reading catalog {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let products: Vec<Product> = serde_json::from_str(raw)
            .map_err(|e| DomainError::Storage(format!("parsing catalog: {e}")))?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}

impl ProductCatalog for JsonCatalog {
    fn unit_price(&self, product_id: &str) -> Result<BigDecimal, DomainError> {
        self.find(product_id)
            .map(|p| p.unit_price.clone())
            .ok_or(DomainError::NotFound)
    }
}
