use crate::error::{Result, TrackError};
use crate::index::{index_records, ListEntry};
use crate::model::Application;
use crate::store::{RecordStore, StorageBackend};

pub fn indexed_records<B: StorageBackend>(store: &RecordStore<B>) -> Result<Vec<ListEntry>> {
    let records = store.load_all()?;
    Ok(index_records(records))
}

/// Resolve a canonical display index to its record.
pub fn record_by_index<B: StorageBackend>(
    store: &RecordStore<B>,
    index: usize,
) -> Result<Application> {
    indexed_records(store)?
        .into_iter()
        .find(|entry| entry.index == index)
        .map(|entry| entry.record)
        .ok_or_else(|| TrackError::Api(format!("Index {} not found", index)))
}

/// Trimmed value, with the empty string standing for "cleared".
pub fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One-line handle for messages: "Acme - Backend Engineer".
pub fn describe(record: &Application) -> String {
    format!("{} - {}", record.company, record.position)
}
