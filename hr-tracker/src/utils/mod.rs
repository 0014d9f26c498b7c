//! Utilities - logging, dates and form validation

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
