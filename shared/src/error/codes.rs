//! Unified error codes for the HR tracker
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Document compliance errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// HR administrator role required
    AdminRequired = 2002,
    /// Employee belongs to another branch
    BranchMismatch = 2003,

    // ==================== 4xxx: Document ====================
    /// Document not found
    DocumentNotFound = 4001,
    /// Document entry is missing type, name or file
    DocumentIncomplete = 4002,
    /// Fewer legal documents than the required minimum
    InsufficientLegalDocuments = 4003,
    /// Department-specific documents are missing
    MissingRequiredDocuments = 4004,
    /// Document queue is empty
    DocumentQueueEmpty = 4005,
    /// Document upload failed
    DocumentUploadFailed = 4006,
    /// Queue position does not exist
    InvalidQueueIndex = 4007,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Identity details are incomplete
    IdentityIncomplete = 8002,
    /// Employee number already taken
    EmployeeNumberExists = 8003,
    /// Draft registration not found
    DraftNotFound = 8101,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Remote HR service rejected the request
    RemoteServiceError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,

    // ==================== 94xx: Storage ====================
    /// Local storage read/write failed
    StorageError = 9401,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "HR administrator role is required",
            ErrorCode::BranchMismatch => "Employee belongs to another branch",

            // Document
            ErrorCode::DocumentNotFound => "Document not found",
            ErrorCode::DocumentIncomplete => "Fill type, name, and select file",
            ErrorCode::InsufficientLegalDocuments => {
                "Upload at least 4 Employment & Legal documents"
            }
            ErrorCode::MissingRequiredDocuments => "Required documents are missing",
            ErrorCode::DocumentQueueEmpty => "Add documents to queue first",
            ErrorCode::DocumentUploadFailed => "Document upload failed",
            ErrorCode::InvalidQueueIndex => "Queue position does not exist",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::IdentityIncomplete => {
                "Enter National ID/Passport, KRA PIN, NHIF, NSSF and upload passport photo"
            }
            ErrorCode::EmployeeNumberExists => "Employee number already exists",
            ErrorCode::DraftNotFound => "Draft registration not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::RemoteServiceError => "HR service rejected the request",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",

            // Storage
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),
            2003 => Ok(ErrorCode::BranchMismatch),

            // Document
            4001 => Ok(ErrorCode::DocumentNotFound),
            4002 => Ok(ErrorCode::DocumentIncomplete),
            4003 => Ok(ErrorCode::InsufficientLegalDocuments),
            4004 => Ok(ErrorCode::MissingRequiredDocuments),
            4005 => Ok(ErrorCode::DocumentQueueEmpty),
            4006 => Ok(ErrorCode::DocumentUploadFailed),
            4007 => Ok(ErrorCode::InvalidQueueIndex),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::IdentityIncomplete),
            8003 => Ok(ErrorCode::EmployeeNumberExists),
            8101 => Ok(ErrorCode::DraftNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::RemoteServiceError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            // Storage
            9401 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
