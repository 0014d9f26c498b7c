//! Key-value storage capability
//!
//! The draft store persists through [`KvStore`], so the backing can be a
//! directory of JSON files ([`JsonFileStore`]) or memory ([`MemoryStore`]).

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => AppError::storage(format!("Local storage failed: {}", e)),
            StorageError::InvalidKey(key) => {
                AppError::with_message(ErrorCode::InvalidRequest, format!("Invalid storage key: {}", key))
            }
        }
    }
}

/// String values under string keys
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;

    /// All keys, sorted
    fn keys(&self) -> StorageResult<Vec<String>>;
}

/// Keys are limited to ASCII letters, digits, `_` and `-`
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("hr_drafts").is_ok());
        assert!(validate_key("a-b-1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("with space").is_err());
    }

    #[test]
    fn test_storage_error_to_app_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AppError = StorageError::Io(io).into();
        assert_eq!(err.code, ErrorCode::StorageError);

        let err: AppError = StorageError::InvalidKey("x y".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
