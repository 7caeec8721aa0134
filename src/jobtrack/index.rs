//! # The Index System
//!
//! Users reference records by short 1-based indexes (`jobtrack show 2`,
//! `jobtrack delete 5`). Indexes are assigned in canonical order, newest
//! apply date first, BEFORE any user-chosen filter or sort is applied.
//! A filtered or re-sorted listing shows the same indexes it would show
//! unfiltered, so `2` names the same record in every view and stays a
//! valid handle between commands.
//!
//! Records sharing an apply date keep their stored order (stable sort),
//! so indexes do not shuffle between loads.

use crate::model::Application;

/// A record paired with its canonical display index.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub index: usize,
    pub record: Application,
}

/// Assigns canonical display indexes to a list of records.
pub fn index_records(mut records: Vec<Application>) -> Vec<ListEntry> {
    records.sort_by(|a, b| b.apply_date.cmp(&a.apply_date));
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ListEntry {
            index: i + 1,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use chrono::NaiveDate;

    fn make_app(company: &str, date: (i32, u32, u32)) -> Application {
        Application::new(
            company.to_string(),
            "Engineer".to_string(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Status::Applied,
        )
    }

    #[test]
    fn indexes_follow_newest_first() {
        let records = vec![
            make_app("Oldest", (2025, 1, 1)),
            make_app("Newest", (2025, 3, 1)),
            make_app("Middle", (2025, 2, 1)),
        ];

        let entries = index_records(records);

        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[0].record.company, "Newest");
        assert_eq!(entries[1].record.company, "Middle");
        assert_eq!(entries[2].index, 3);
        assert_eq!(entries[2].record.company, "Oldest");
    }

    #[test]
    fn equal_dates_keep_stored_order() {
        let records = vec![
            make_app("First", (2025, 3, 1)),
            make_app("Second", (2025, 3, 1)),
            make_app("Third", (2025, 3, 1)),
        ];

        let entries = index_records(records);

        let companies: Vec<&str> = entries.iter().map(|e| e.record.company.as_str()).collect();
        assert_eq!(companies, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn empty_collection_is_empty() {
        assert!(index_records(Vec::new()).is_empty());
    }
}
