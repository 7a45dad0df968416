//! Zeroize-on-drop strings for token material.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of leading characters kept by [`SecretString::preview`].
const PREVIEW_CHARS: usize = 4;

/// A string holding token material that is wiped from memory on drop.
///
/// `Debug` and `Display` never print the value. Serialization writes the
/// plaintext, since the serialized form is what lands in the secret store.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Expose the plaintext. Use sparingly.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// A short, log-safe preview such as `abc1…`.
    ///
    /// Values no longer than the preview are fully masked.
    pub fn preview(&self) -> String {
        let total = self.inner.chars().count();
        if total <= PREVIEW_CHARS {
            return "*".repeat(total.max(1));
        }
        let head: String = self.inner.chars().take(PREVIEW_CHARS).collect();
        format!("{head}…")
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
    }
}

impl Eq for SecretString {}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Length-dependent but otherwise constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
