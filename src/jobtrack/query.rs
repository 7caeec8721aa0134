//! Pure filtering, sorting, and statistics over loaded records.
//! Nothing here touches storage; callers pass in what `load_all` returned.

use crate::model::{Application, Status};
use std::cmp::Ordering;
use std::str::FromStr;

/// Which records a listing shows. The default keeps everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Keep only records with exactly this status.
    pub status: Option<Status>,
    /// Case-insensitive substring match over company and position.
    pub search: Option<String>,
}

impl Filter {
    pub fn matches(&self, record: &Application) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = record.company.to_lowercase().contains(&term)
                || record.position.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    DateDesc,
    DateAsc,
    CompanyAsc,
    CompanyDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::DateDesc,
        SortBy::DateAsc,
        SortBy::CompanyAsc,
        SortBy::CompanyDesc,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            SortBy::DateDesc => "date-desc",
            SortBy::DateAsc => "date-asc",
            SortBy::CompanyAsc => "company-asc",
            SortBy::CompanyDesc => "company-desc",
        }
    }

    /// Ordering of two records under this sort. Company order is
    /// case-insensitive.
    pub fn cmp(&self, a: &Application, b: &Application) -> Ordering {
        match self {
            SortBy::DateDesc => b.apply_date.cmp(&a.apply_date),
            SortBy::DateAsc => a.apply_date.cmp(&b.apply_date),
            SortBy::CompanyAsc => a.company.to_lowercase().cmp(&b.company.to_lowercase()),
            SortBy::CompanyDesc => b.company.to_lowercase().cmp(&a.company.to_lowercase()),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        SortBy::ALL
            .iter()
            .find(|sort| sort.token() == lower)
            .copied()
            .ok_or_else(|| {
                let tokens: Vec<&str> = SortBy::ALL.iter().map(|s| s.token()).collect();
                format!("Unknown sort '{}' (expected one of: {})", s, tokens.join(", "))
            })
    }
}

/// Headline numbers for the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    /// Applications whose status is not a closed outcome.
    pub active: usize,
    pub offers: usize,
}

pub fn stats(records: &[Application]) -> Stats {
    Stats {
        total: records.len(),
        active: records.iter().filter(|r| !r.status.is_closed()).count(),
        offers: records.iter().filter(|r| r.status == Status::Offer).count(),
    }
}
