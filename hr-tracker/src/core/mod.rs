//! Core - configuration and operator session
//!
//! - [`Config`] - tracker configuration
//! - [`SessionContext`] - operator role and branch

pub mod config;
pub mod session;

pub use config::Config;
pub use session::SessionContext;
