//! HR Client - HTTP client for the HR service
//!
//! Provides network-based calls to the HR API (`/hr/...` endpoints) and the
//! [`HrService`] trait the tracker is written against.

pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use service::HrService;
