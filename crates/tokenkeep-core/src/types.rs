//! Values persisted in the secret store.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::secret::SecretString;

/// A bearer credential as issued by an authorization server.
///
/// Only `token` is required; the wire form of a bare token is
/// `{"token":"abc123"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: SecretString,

    /// Scheme the token is presented with, e.g. `Bearer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// When the token stops being accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(token: impl Into<SecretString>) -> Self {
        Self {
            token: token.into(),
            token_type: None,
            expires_at: None,
        }
    }

    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }

    /// Set the expiry relative to now.
    pub fn expires_in(mut self, lifetime: Duration) -> Self {
        self.expires_at = Some(Utc::now() + lifetime);
        self
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Tokens without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
