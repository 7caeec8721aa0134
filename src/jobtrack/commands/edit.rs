use crate::commands::{ApplicationUpdate, CmdMessage, CmdResult};
use crate::error::{Result, TrackError};
use crate::store::{RecordStore, StorageBackend};

use super::helpers::{describe, none_if_empty, record_by_index};

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    index: usize,
    update: ApplicationUpdate,
) -> Result<CmdResult> {
    let mut record = record_by_index(store, index)?;

    if let Some(company) = update.company {
        let company = company.trim().to_string();
        if company.is_empty() {
            return Err(TrackError::Api("Company cannot be empty".into()));
        }
        record.company = company;
    }
    if let Some(position) = update.position {
        let position = position.trim().to_string();
        if position.is_empty() {
            return Err(TrackError::Api("Position cannot be empty".into()));
        }
        record.position = position;
    }
    if let Some(apply_date) = update.apply_date {
        record.apply_date = apply_date;
    }
    if let Some(status) = update.status {
        record.status = status;
    }
    if let Some(job_link) = update.job_link {
        record.job_link = none_if_empty(job_link);
    }
    if let Some(notes) = update.notes {
        record.notes = none_if_empty(notes);
    }

    store.upsert(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Application updated ({}): {}",
        index,
        describe(&record)
    )));
    result.affected_records.push(record);
    Ok(result)
}
