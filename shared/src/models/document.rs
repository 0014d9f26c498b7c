//! Employee Document Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::base_document_name;

/// Documents expiring within this many days are flagged `EXPIRING_SOON`
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Document type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    License,
    Contract,
    Certificate,
    Id,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::License => "LICENSE",
            Self::Contract => "CONTRACT",
            Self::Certificate => "CERTIFICATE",
            Self::Id => "ID",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity derived from an expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    #[default]
    Valid,
    Expired,
    ExpiringSoon,
}

impl ExpiryStatus {
    /// Status relative to `today`.
    ///
    /// Without an expiry date the server-reported status is kept.
    pub fn from_expiry(expiry: Option<NaiveDate>, fallback: ExpiryStatus, today: NaiveDate) -> Self {
        let Some(expiry) = expiry else {
            return fallback;
        };
        let days_left = (expiry - today).num_days();
        if days_left < 0 {
            Self::Expired
        } else if days_left <= EXPIRING_SOON_DAYS {
            Self::ExpiringSoon
        } else {
            Self::Valid
        }
    }
}

/// Document stored against an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    pub id: i64,
    pub employee_id: i64,
    pub document_type: DocumentType,
    /// `"<base>"` or `"<base> - <subtype>"`
    pub document_name: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ExpiryStatus,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EmployeeDocument {
    pub fn base_name(&self) -> &str {
        base_document_name(&self.document_name)
    }

    /// Status recomputed from `expiry_date`
    pub fn effective_status(&self, today: NaiveDate) -> ExpiryStatus {
        ExpiryStatus::from_expiry(self.expiry_date, self.status, today)
    }
}

/// Partial document update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpiryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// File attached to an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Create document payload
///
/// With a file attached it is sent as multipart form data, otherwise as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentUpload {
    pub employee_id: i64,
    pub document_type: DocumentType,
    pub document_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip)]
    pub file: Option<DocumentFile>,
}

impl DocumentUpload {
    pub fn new(employee_id: i64, document_type: DocumentType, document_name: impl Into<String>) -> Self {
        Self {
            employee_id,
            document_type,
            document_name: document_name.into(),
            tag: None,
            issue_date: None,
            expiry_date: None,
            is_sensitive: None,
            notes: None,
            file: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_dates(mut self, issue: Option<NaiveDate>, expiry: Option<NaiveDate>) -> Self {
        self.issue_date = issue;
        self.expiry_date = expiry;
        self
    }

    pub fn with_file(mut self, file: DocumentFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Non-file fields as multipart text parts
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("employee_id", self.employee_id.to_string()),
            ("document_type", self.document_type.as_str().to_string()),
            ("document_name", self.document_name.clone()),
        ];
        if let Some(tag) = &self.tag {
            fields.push(("tag", tag.clone()));
        }
        if let Some(date) = self.issue_date {
            fields.push(("issue_date", date.to_string()));
        }
        if let Some(date) = self.expiry_date {
            fields.push(("expiry_date", date.to_string()));
        }
        if let Some(sensitive) = self.is_sensitive {
            fields.push(("is_sensitive", sensitive.to_string()));
        }
        if let Some(notes) = &self.notes {
            fields.push(("notes", notes.clone()));
        }
        fields
    }
}
