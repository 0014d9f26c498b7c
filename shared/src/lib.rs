//! Shared types for the HR tracker
//!
//! Domain models exchanged with the HR service, the unified error system
//! and a few small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
