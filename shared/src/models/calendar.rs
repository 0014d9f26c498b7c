//! Holiday Calendar Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public holidays for one year, country and (optionally) branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    pub year: i32,
    pub country: String,
    #[serde(default)]
    pub branch: Option<String>,
    /// ISO `YYYY-MM-DD` strings
    #[serde(default)]
    pub dates: Vec<String>,
}

impl HolidayCalendar {
    /// Parsed dates; unparsable entries are skipped
    pub fn holiday_dates(&self) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .filter_map(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
            .collect()
    }
}

/// Holiday calendar query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayQuery {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub country: String,
}
