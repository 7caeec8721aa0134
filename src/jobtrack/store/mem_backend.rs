use super::backend::StorageBackend;
use crate::error::{Result, TrackError};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since jobtrack is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    blob: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted payload, e.g. a corrupt blob.
    pub fn with_blob(payload: &str) -> Self {
        Self {
            blob: RefCell::new(Some(payload.to_string())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TrackError::Store("Simulated write error".to_string()));
        }
        *self.blob.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
