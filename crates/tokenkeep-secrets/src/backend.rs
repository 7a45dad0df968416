//! The capability interface to the platform secret store.
//!
//! A backend stores opaque byte payloads addressed by a (service, account)
//! pair and reports failures as platform status codes. Encryption, access
//! control and persistence are entirely the backend's business.

use std::fmt;
use std::sync::Arc;

use tokenkeep_core::BackendKind;
#[cfg(not(any(target_os = "macos", feature = "keyring")))]
use tracing::warn;

use crate::memory::MemoryBackend;

/// A platform result code.
///
/// Codes follow the Security framework numbering. Backends for other
/// platforms translate their failures into the same space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(i32);

impl Status {
    pub const SUCCESS: Status = Status(0);
    /// `errSecIO`
    pub const IO: Status = Status(-36);
    /// `errSecParam`
    pub const PARAM: Status = Status(-50);
    /// `errSecDuplicateItem`
    pub const DUPLICATE_ITEM: Status = Status(-25299);
    /// `errSecItemNotFound`
    pub const ITEM_NOT_FOUND: Status = Status(-25300);
    /// `errSecInteractionNotAllowed`
    pub const INTERACTION_NOT_ALLOWED: Status = Status(-25308);

    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    pub fn is_not_found(self) -> bool {
        self == Self::ITEM_NOT_FOUND
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::SUCCESS => "success",
            Self::IO => "I/O error",
            Self::PARAM => "invalid parameter",
            Self::DUPLICATE_ITEM => "duplicate item",
            Self::ITEM_NOT_FOUND => "item not found",
            Self::INTERACTION_NOT_ALLOWED => "interaction not allowed",
            _ => return None,
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (status {})", self.0),
            None => write!(f, "status {}", self.0),
        }
    }
}

impl std::error::Error for Status {}

/// Lookup criteria for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria<'a> {
    /// Namespace shared by every record of one application.
    pub service: &'a str,
    /// The record key.
    pub account: &'a str,
}

/// Raw byte storage offered by a platform secret store.
///
/// Every call is a single blocking request. Implementations must not cache.
pub trait SecretBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch at most one matching record's payload.
    ///
    /// A missing record may be reported either as `Ok(None)` or as
    /// `Err(Status::ITEM_NOT_FOUND)`.
    fn query(&self, criteria: &Criteria<'_>) -> Result<Option<Vec<u8>>, Status>;

    /// Create a new record. Fails with [`Status::DUPLICATE_ITEM`] when one
    /// already exists for the criteria.
    fn insert(&self, criteria: &Criteria<'_>, data: &[u8]) -> Result<(), Status>;

    /// Delete the matching record. Fails with [`Status::ITEM_NOT_FOUND`]
    /// when there is none.
    fn delete(&self, criteria: &Criteria<'_>) -> Result<(), Status>;
}

/// The protected store of the current platform.
///
/// Without a native store compiled in this degrades to an in-memory map.
pub fn platform_backend() -> Arc<dyn SecretBackend> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(crate::keychain::KeychainBackend)
    }

    #[cfg(all(feature = "keyring", not(target_os = "macos")))]
    {
        Arc::new(crate::keyring_store::KeyringBackend)
    }

    #[cfg(not(any(target_os = "macos", feature = "keyring")))]
    {
        warn!(
            "no OS secret store available in this build; secrets are kept in memory \
             and lost on exit (enable the `keyring` feature)"
        );
        Arc::new(MemoryBackend::new())
    }
}

/// Build the backend selected in configuration.
pub fn from_kind(kind: BackendKind) -> Arc<dyn SecretBackend> {
    match kind {
        BackendKind::Platform => platform_backend(),
        BackendKind::Memory => Arc::new(MemoryBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(
            Status::ITEM_NOT_FOUND.to_string(),
            "item not found (status -25300)"
        );
        assert_eq!(Status::from_code(-1).to_string(), "status -1");
    }

    #[test]
    fn test_status_predicates() {
        assert!(Status::SUCCESS.is_success());
        assert!(!Status::ITEM_NOT_FOUND.is_success());
        assert!(Status::from_code(-25300).is_not_found());
        assert!(!Status::DUPLICATE_ITEM.is_not_found());
    }

    #[test]
    fn test_from_kind_memory() {
        assert_eq!(from_kind(BackendKind::Memory).name(), "memory");
    }
}
