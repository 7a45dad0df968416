//! Typed secret persistence for tokenkeep.
//!
//! Values are serialized to JSON and handed to the platform secret store
//! (macOS Keychain, or the `keyring` crate elsewhere) through the narrow
//! [`SecretBackend`] capability. [`SecretStoreClient`] offers typed
//! get/set/remove; [`KeychainItem`] binds one well-known key to a value and
//! never fails.

pub mod backend;
pub mod client;
pub mod error;
pub mod item;
#[cfg(target_os = "macos")]
pub mod keychain;
#[cfg(all(feature = "keyring", not(target_os = "macos")))]
pub mod keyring_store;
pub mod memory;

pub use backend::{platform_backend, Criteria, SecretBackend, Status};
pub use client::SecretStoreClient;
pub use error::{Result, SecretError};
pub use item::{Access, ErrorHook, KeychainItem, SecretKey};
pub use memory::MemoryBackend;
