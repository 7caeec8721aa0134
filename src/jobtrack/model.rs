//! # Domain Model
//!
//! This module defines the core data types: [`Application`] and [`Status`].
//!
//! ## Wire Format
//!
//! Records are persisted as one pretty-printed JSON array. Field names are
//! camelCase on the wire (matching the CSV export header), statuses are
//! kebab-case tokens. Blobs written by older versions may lack the optional
//! `jobLink`/`notes` fields; those deserialize as `None`.
//!
//! ## Status Lifecycle
//!
//! Statuses form a loose pipeline from `Preparing` through the interview
//! rounds to one of the two closed outcomes, `Offer` or `Rejected`. Nothing
//! enforces forward-only movement; the status is just a label the user sets.
//! The closed pair matters only to statistics: an application counts as
//! "active" while its status is not closed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Preparing,
    Applied,
    WrittenTest,
    Interview1,
    Interview2,
    Interview3,
    HrInterview,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 9] = [
        Status::Preparing,
        Status::Applied,
        Status::WrittenTest,
        Status::Interview1,
        Status::Interview2,
        Status::Interview3,
        Status::HrInterview,
        Status::Offer,
        Status::Rejected,
    ];

    /// Human-readable label, used in lists and CSV cells.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Preparing => "Preparing",
            Status::Applied => "Applied",
            Status::WrittenTest => "Written test",
            Status::Interview1 => "1st interview",
            Status::Interview2 => "2nd interview",
            Status::Interview3 => "3rd interview",
            Status::HrInterview => "HR interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    /// Stable token, used on the command line and in the JSON blob.
    pub fn token(&self) -> &'static str {
        match self {
            Status::Preparing => "preparing",
            Status::Applied => "applied",
            Status::WrittenTest => "written-test",
            Status::Interview1 => "interview1",
            Status::Interview2 => "interview2",
            Status::Interview3 => "interview3",
            Status::HrInterview => "hr-interview",
            Status::Offer => "offer",
            Status::Rejected => "rejected",
        }
    }

    /// Closed statuses are final outcomes; everything else counts as an
    /// application still in flight.
    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Offer | Status::Rejected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Status::ALL
            .iter()
            .find(|status| status.token() == lower)
            .copied()
            .ok_or_else(|| {
                let tokens: Vec<&str> = Status::ALL.iter().map(|s| s.token()).collect();
                format!("Unknown status '{}' (expected one of: {})", s, tokens.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub apply_date: NaiveDate,
    pub status: Status,
    #[serde(default)]
    pub job_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Application {
    pub fn new(company: String, position: String, apply_date: NaiveDate, status: Status) -> Self {
        Self {
            id: Uuid::new_v4(),
            company,
            position,
            apply_date,
            status,
            job_link: None,
            notes: None,
        }
    }

    pub fn with_job_link(mut self, link: Option<String>) -> Self {
        self.job_link = link;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_token_roundtrip() {
        for status in Status::ALL {
            assert_eq!(Status::from_str(status.token()), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(Status::from_str("OFFER"), Ok(Status::Offer));
        assert_eq!(Status::from_str("Written-Test"), Ok(Status::WrittenTest));
    }

    #[test]
    fn test_status_parse_unknown() {
        let err = Status::from_str("ghosted").unwrap_err();
        assert!(err.contains("ghosted"));
        assert!(err.contains("preparing"));
    }

    #[test]
    fn test_closed_statuses() {
        assert!(Status::Offer.is_closed());
        assert!(Status::Rejected.is_closed());
        assert!(!Status::Applied.is_closed());
        assert!(!Status::HrInterview.is_closed());
    }

    #[test]
    fn test_application_serialization_roundtrip() {
        let app = Application::new(
            "Acme".to_string(),
            "Backend Engineer".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            Status::Interview2,
        )
        .with_job_link(Some("https://acme.example/jobs/42".to_string()));

        let json = serde_json::to_string(&app).unwrap();
        let loaded: Application = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, app);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let app = Application::new(
            "Acme".to_string(),
            "Dev".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            Status::WrittenTest,
        );

        let json = serde_json::to_string(&app).unwrap();
        assert!(json.contains("\"applyDate\":\"2025-01-02\""));
        assert!(json.contains("\"jobLink\":null"));
        assert!(json.contains("\"status\":\"written-test\""));
    }

    #[test]
    fn test_legacy_record_without_optional_fields() {
        let id = Uuid::new_v4();
        // JSON without jobLink/notes (legacy format)
        let json = format!(
            r#"{{
            "id": "{}",
            "company": "Initech",
            "position": "QA",
            "applyDate": "2024-11-30",
            "status": "applied"
        }}"#,
            id
        );

        let loaded: Application = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.company, "Initech");
        assert_eq!(loaded.job_link, None);
        assert_eq!(loaded.notes, None);
    }
}
