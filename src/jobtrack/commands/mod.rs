use crate::config::TrackConfig;
use crate::index::ListEntry;
use crate::model::{Application, Status};
use crate::query::Stats;
use chrono::NaiveDate;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod list;
pub mod show;
pub mod stats;
pub mod undo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Application>,
    pub listed_records: Vec<ListEntry>,
    pub stats: Option<Stats>,
    pub config: Option<TrackConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Application>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, entries: Vec<ListEntry>) -> Self {
        self.listed_records = entries;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: TrackConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Input for creating a record. The command validates and fills the id.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    pub company: String,
    pub position: String,
    pub apply_date: NaiveDate,
    pub status: Status,
    pub job_link: Option<String>,
    pub notes: Option<String>,
}

/// A partial update; `None` fields keep their current value.
/// An explicitly empty string clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpdate {
    pub company: Option<String>,
    pub position: Option<String>,
    pub apply_date: Option<NaiveDate>,
    pub status: Option<Status>,
    pub job_link: Option<String>,
    pub notes: Option<String>,
}
