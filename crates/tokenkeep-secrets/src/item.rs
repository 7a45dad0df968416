//! A typed, infallible binding of one well-known key.
//!
//! [`KeychainItem`] reads and writes a single [`SecretKey`] through a
//! [`SecretStoreClient`]. Failures never reach the caller: reads degrade to
//! `None`, writes to a no-op. Each swallowed error is handed to an
//! [`ErrorHook`], which logs it by default.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::SecretStoreClient;
use crate::error::SecretError;

/// Keys the application stores values under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKey {
    AccessToken,
    RefreshToken,
}

impl SecretKey {
    pub const ALL: [SecretKey; 2] = [SecretKey::AccessToken, SecretKey::RefreshToken];

    /// The record key used in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "accessToken",
            Self::RefreshToken => "refreshToken",
        }
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown secret key: {s}"))
    }
}

/// Which accessor swallowed an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Observer for errors a [`KeychainItem`] does not propagate.
pub type ErrorHook = Arc<dyn Fn(SecretKey, Access, &SecretError) + Send + Sync>;

/// Default hook: "item not found" at debug, everything else at warn.
pub fn log_swallowed(key: SecretKey, access: Access, err: &SecretError) {
    if err.is_not_found() {
        debug!(%key, ?access, "secret store has no record");
    } else {
        warn!(%key, ?access, error = %err, "secret store error ignored");
    }
}

/// Optional value of type `T` persisted under one [`SecretKey`].
pub struct KeychainItem<T> {
    key: SecretKey,
    client: Arc<SecretStoreClient>,
    on_error: ErrorHook,
    _value: PhantomData<fn() -> T>,
}

impl<T> KeychainItem<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(key: SecretKey, client: Arc<SecretStoreClient>) -> Self {
        Self {
            key,
            client,
            on_error: Arc::new(log_swallowed),
            _value: PhantomData,
        }
    }

    /// Bind `key` on the process-wide client.
    pub fn shared(key: SecretKey) -> Self {
        Self::new(key, SecretStoreClient::shared())
    }

    /// Replace the default logging hook.
    pub fn with_error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(SecretKey, Access, &SecretError) + Send + Sync + 'static,
    {
        self.on_error = Arc::new(hook);
        self
    }

    pub fn key(&self) -> SecretKey {
        self.key
    }

    /// The stored value, or `None` if absent or unreadable.
    pub fn read(&self) -> Option<T> {
        match self.client.get(self.key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                (self.on_error)(self.key, Access::Read, &e);
                None
            }
        }
    }

    /// Store `value`, or delete the record when `None`.
    pub fn write(&self, value: Option<&T>) {
        if let Err(e) = self.client.set(value, self.key.as_str()) {
            (self.on_error)(self.key, Access::Write, &e);
        }
    }

    pub fn clear(&self) {
        self.write(None);
    }
}

impl<T> Clone for KeychainItem<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            client: Arc::clone(&self.client),
            on_error: Arc::clone(&self.on_error),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for KeychainItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeychainItem")
            .field("key", &self.key)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
