use crate::commands::CmdResult;
use crate::error::{Result, TrackError};
use crate::store::{RecordStore, StorageBackend};

use super::helpers::indexed_records;

/// Shows the full detail of one or more applications by display index.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let entries = indexed_records(store)?;

    let mut selected = Vec::new();
    for &index in indexes {
        match entries.iter().find(|e| e.index == index) {
            Some(entry) => selected.push(entry.clone()),
            None => return Err(TrackError::Api(format!("Index {} not found", index))),
        }
    }

    Ok(CmdResult::default().with_listed_records(selected))
}
