//! Data models
//!
//! Records exchanged with the HR service plus the locally persisted
//! draft registration. Dates are `NaiveDate` (serialized as `YYYY-MM-DD`),
//! record IDs are `i64`.

pub mod calendar;
pub mod certification;
pub mod document;
pub mod draft;
pub mod employee;

// Re-exports
pub use calendar::*;
pub use certification::*;
pub use document::*;
pub use draft::*;
pub use employee::*;
