//! Shared fixtures for the tokenkeep integration tests.

use std::sync::Arc;

use tokenkeep_secrets::{MemoryBackend, SecretStoreClient};

/// Service namespace used by every fixture client.
pub const SERVICE: &str = "tokenkeep-integration";

/// A client over a fresh in-memory backend, plus the backend for inspection.
pub fn memory_client() -> (Arc<SecretStoreClient>, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let client = Arc::new(SecretStoreClient::new(backend.clone(), SERVICE));
    (client, backend)
}
