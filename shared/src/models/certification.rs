//! Certification Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ExpiryStatus;

/// Professional certification held by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: i64,
    pub employee_id: i64,
    pub certification_type: String,
    pub certification_name: String,
    #[serde(default)]
    pub issuing_authority: Option<String>,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ExpiryStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Certification {
    pub fn effective_status(&self, today: NaiveDate) -> ExpiryStatus {
        ExpiryStatus::from_expiry(self.expiry_date, self.status, today)
    }
}
