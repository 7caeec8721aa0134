use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{Filter, SortBy};
use crate::store::{RecordStore, StorageBackend};

use super::helpers::indexed_records;

/// Lists applications. Filtering and sorting only affect which rows come
/// back and in what order; the display indexes stay canonical.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    filter: &Filter,
    sort: SortBy,
) -> Result<CmdResult> {
    let mut entries = indexed_records(store)?;
    entries.retain(|entry| filter.matches(&entry.record));
    entries.sort_by(|a, b| sort.cmp(&a.record, &b.record));

    Ok(CmdResult::default().with_listed_records(entries))
}
