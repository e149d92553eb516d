use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use log::info;
use uuid::Uuid;

use crate::domain::cart::LineItem;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::domain::ports::{CheckoutGateway, OrderHistory};
use crate::domain::totals::OrderTotals;
use crate::models::order_record::OrderRecord;

/// Append-only order log, one JSON record per line.
///
/// Acts as both sides of the checkout boundary: the gateway that accepts a
/// submitted cart and the history that the orders page lists from.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
}

impl FileOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, record: &OrderRecord) -> Result<(), DomainError> {
        let line = serde_json::to_string(record)
            .map_err(|e| DomainError::Checkout(e.to_string()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DomainError::Checkout(format!("opening {}: {e}", self.path.display()))
            })?;
        writeln!(file, "{line}").map_err(|e| {
            DomainError::Checkout(format!("appending to {}: {e}", self.path.display()))
        })
    }
}

impl CheckoutGateway for FileOrderLog {
    fn submit(&self, items: &[LineItem], totals: &OrderTotals) -> Result<Uuid, DomainError> {
        let order_id = Uuid::new_v4();
        let record = OrderRecord::confirmed(order_id, items, totals);
        self.append(&record)?;
        info!("Order {order_id} appended to {}", self.path.display());
        Ok(order_id)
    }
}

impl OrderHistory for FileOrderLog {
    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "reading {}: {e}",
                    self.path.display()
                )))
            }
        };

        let mut orders = Vec::new();
        for line in raw.lines().filter(|l| !l.trim().is_empty()) {
            let record: OrderRecord = serde_json::from_str(line)
                .map_err(|e| DomainError::Storage(format!("parsing order log: {e}")))?;
            orders.push(record.into_view());
        }
        orders.reverse();
        Ok(orders)
    }
}
