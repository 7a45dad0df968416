//! Error types for secret store access.

use thiserror::Error;

use crate::backend::Status;

/// Errors surfaced by [`crate::SecretStoreClient`].
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Invalid key: key must not be empty")]
    InvalidKey,

    #[error("Secret store access failed: {status}")]
    StoreAccess { status: Status },

    #[error("Failed to decode stored value: {0}")]
    DecodeFailure(#[source] serde_json::Error),

    #[error("No data produced from value: {0}")]
    EncodeFailure(#[source] serde_json::Error),
}

impl SecretError {
    /// Platform status code, for store access failures.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::StoreAccess { status } => Some(status.code()),
            _ => None,
        }
    }

    /// Whether the store reported that the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoreAccess { status } if status.is_not_found())
    }
}

impl From<Status> for SecretError {
    fn from(status: Status) -> Self {
        Self::StoreAccess { status }
    }
}

/// Convenience result alias for secret operations.
pub type Result<T> = std::result::Result<T, SecretError>;
