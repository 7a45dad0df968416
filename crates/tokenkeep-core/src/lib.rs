//! # tokenkeep-core
//!
//! Core types, configuration, and utilities for tokenkeep.
//!
//! This crate provides shared functionality used across the tokenkeep crates:
//!
//! - **Configuration**: Loading, validation, and persistence of the config file
//! - **Types**: The token types stored in the secret store
//! - **Utilities**: Path resolution, environment handling, and secret strings

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use config::{BackendKind, Config, StoreConfig};
pub use error::ConfigError;
pub use secret::SecretString;
pub use types::AccessToken;
