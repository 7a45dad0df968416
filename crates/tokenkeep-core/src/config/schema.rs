//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Default namespace under which records are stored.
pub const DEFAULT_SERVICE: &str = "tokenkeep";

/// Main tokenkeep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Secret store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Secret store section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Service namespace that scopes every record.
    #[serde(default = "default_service")]
    pub service: String,

    /// Which backend holds the records.
    #[serde(default)]
    pub backend: BackendKind,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            backend: BackendKind::default(),
        }
    }
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

/// Secret store backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The OS-provided protected store.
    #[default]
    Platform,
    /// An in-process map that lives as long as the process.
    Memory,
}
