use std::sync::Mutex;

use crate::domain::errors::DomainError;
use crate::domain::ports::CartSlot;

/// In-memory cart slot. The cart only lives as long as the process; used in
/// tests and as a stand-in where no durable path is configured.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, DomainError> {
        Ok(self
            .payload
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?
            .clone())
    }

    fn write(&self, payload: &str) -> Result<(), DomainError> {
        *self
            .payload
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))? = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        *self
            .payload
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))? = None;
        Ok(())
    }
}
