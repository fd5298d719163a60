use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Granularity of the revenue chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// One bucket per calendar day of a selected month
    ByDay,
    /// Twelve buckets, one per calendar month of a selected year
    ByMonth,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::ByDay => write!(f, "by_day"),
            ViewMode::ByMonth => write!(f, "by_month"),
        }
    }
}

/// The selected reporting period: a specific month for `ByDay`, a specific
/// year for `ByMonth`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    YearMonth { year: i32, month: u32 },
    Year { year: i32 },
}

impl Period {
    /// Build a year-month period, rejecting out-of-range months
    pub fn year_month(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Period::YearMonth { year, month })
    }

    pub fn year(year: i32) -> Self {
        Period::Year { year }
    }

    /// Parse the caller-supplied `YYYY-MM` selector used in by-day mode
    pub fn parse_year_month(s: &str) -> Result<Self> {
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| AppError::validation(format!("invalid year-month selector: {}", s)))?;
        let year: i32 = y
            .parse()
            .map_err(|_| AppError::validation(format!("invalid year in selector: {}", s)))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::validation(format!("invalid month in selector: {}", s)))?;
        Self::year_month(year, month)
    }

    /// Whether a timestamp falls inside this period
    ///
    /// Inclusive of the whole first and last day, matching a
    /// `[first 00:00:00, last 23:59:59]` range filter.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        match *self {
            Period::YearMonth { year, month } => {
                ts.year() == year && ts.month() == month
            }
            Period::Year { year } => ts.year() == year,
        }
    }
}

/// Number of calendar days in the given month (28-31)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("valid month")
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).expect("valid month")
    };
    next.signed_duration_since(first).num_days() as u32
}

/// Leniently parse an upstream timestamp string
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`, the space-separated
/// variant, and bare `YYYY-MM-DD`. Offsets are dropped in favor of the
/// written clock time so that range filtering and bucket assignment agree
/// on the calendar date. Returns `None` for anything unparseable; callers
/// treat that as "unknown date", never as the current date.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0).expect("midnight"));
    }
    None
}
