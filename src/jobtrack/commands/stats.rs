use crate::commands::CmdResult;
use crate::error::Result;
use crate::query;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let records = store.load_all()?;
    Ok(CmdResult::default().with_stats(query::stats(&records)))
}
