use crate::commands::{ApplicationForm, CmdMessage, CmdResult};
use crate::error::{Result, TrackError};
use crate::model::Application;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::{describe, none_if_empty};

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    form: ApplicationForm,
) -> Result<CmdResult> {
    let company = form.company.trim().to_string();
    if company.is_empty() {
        return Err(TrackError::Api("Company cannot be empty".into()));
    }
    let position = form.position.trim().to_string();
    if position.is_empty() {
        return Err(TrackError::Api("Position cannot be empty".into()));
    }

    let record = Application::new(company, position, form.apply_date, form.status)
        .with_job_link(form.job_link.and_then(none_if_empty))
        .with_notes(form.notes.and_then(none_if_empty));
    store.upsert(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Application added: {}",
        describe(&record)
    )));
    result.affected_records.push(record);
    Ok(result)
}
