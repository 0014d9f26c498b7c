//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate resource
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, message)
            }
            ClientError::Http(_) => AppError::network(message),
            ClientError::Unauthorized | ClientError::Forbidden(_) => {
                AppError::permission_denied(message)
            }
            ClientError::NotFound(_) => AppError::with_message(ErrorCode::NotFound, message),
            ClientError::Conflict(_) => AppError::with_message(ErrorCode::AlreadyExists, message),
            ClientError::Validation(_) => AppError::validation(message),
            ClientError::Config(_) => AppError::config(message),
            ClientError::Serialization(_) => AppError::invalid_format(message),
            ClientError::Internal(_) => AppError::remote(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_to_app_error() {
        let err: AppError = ClientError::NotFound("employee 9".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Not found: employee 9");

        let err: AppError = ClientError::Conflict("TPT-0001".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);

        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::PermissionDenied);

        let err: AppError = ClientError::Internal("boom".into()).into();
        assert_eq!(err.code, ErrorCode::RemoteServiceError);
    }
}
