//! Typed get/set/remove over a [`SecretBackend`].
//!
//! Values are encoded as JSON. Each operation is one blocking request (two
//! for `set`) with no retries and no caching; every error reaches the caller.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokenkeep_core::{Config, StoreConfig};
use tracing::{debug, warn};

use crate::backend::{self, Criteria, SecretBackend};
use crate::error::{Result, SecretError};

static SHARED: OnceCell<Arc<SecretStoreClient>> = OnceCell::new();

/// Client for one service namespace of a secret store.
pub struct SecretStoreClient {
    backend: Arc<dyn SecretBackend>,
    service: String,
}

impl SecretStoreClient {
    pub fn new(backend: Arc<dyn SecretBackend>, service: impl Into<String>) -> Self {
        Self {
            backend,
            service: service.into(),
        }
    }

    /// Build a client for the backend and service named in `config`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(backend::from_kind(config.backend), config.service.clone())
    }

    /// The process-wide client.
    ///
    /// Created on first use from the resolved config file, or from
    /// [`install_shared`](Self::install_shared) if that ran first.
    pub fn shared() -> Arc<Self> {
        SHARED
            .get_or_init(|| {
                let config = Config::resolve_path(None)
                    .and_then(|path| Config::load_or_default(&path))
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "invalid configuration, using default secret store");
                        Config::default()
                    });
                Arc::new(Self::from_config(&config.store))
            })
            .clone()
    }

    /// Install the process-wide client. Returns the client back if one
    /// was already initialised.
    pub fn install_shared(client: Arc<Self>) -> std::result::Result<(), Arc<Self>> {
        SHARED.set(client)
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    fn criteria<'a>(&'a self, key: &'a str) -> Result<Criteria<'a>> {
        if key.is_empty() {
            return Err(SecretError::InvalidKey);
        }
        Ok(Criteria {
            service: &self.service,
            account: key,
        })
    }

    /// Read the value stored under `key`.
    ///
    /// A key that was never written yields `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let criteria = self.criteria(key)?;
        debug!(service = %self.service, key, "reading secret");

        let data = match self.backend.query(&criteria) {
            Ok(Some(data)) => data,
            Ok(None) => return Ok(None),
            Err(status) if status.is_not_found() => return Ok(None),
            Err(status) => return Err(status.into()),
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(SecretError::DecodeFailure)
    }

    /// Store `value` under `key`, replacing any previous record.
    ///
    /// `None` deletes the record and fails like [`remove`](Self::remove)
    /// when there is nothing to delete.
    pub fn set<T: Serialize + ?Sized>(&self, value: Option<&T>, key: &str) -> Result<()> {
        let criteria = self.criteria(key)?;

        let Some(value) = value else {
            return self.remove(key);
        };

        let data = serde_json::to_vec(value).map_err(SecretError::EncodeFailure)?;

        if let Err(status) = self.backend.delete(&criteria) {
            debug!(service = %self.service, key, %status, "no previous record replaced");
        }

        debug!(service = %self.service, key, "writing secret");
        self.backend.insert(&criteria, &data)?;
        Ok(())
    }

    /// Delete the record stored under `key`.
    ///
    /// A missing record is an error (`StoreAccess` with "item not found").
    pub fn remove(&self, key: &str) -> Result<()> {
        let criteria = self.criteria(key)?;
        debug!(service = %self.service, key, "removing secret");
        self.backend.delete(&criteria)?;
        Ok(())
    }
}

impl fmt::Debug for SecretStoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretStoreClient")
            .field("backend", &self.backend.name())
            .field("service", &self.service)
            .finish()
    }
}
