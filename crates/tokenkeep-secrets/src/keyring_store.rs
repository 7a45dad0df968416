//! Secret backend over the `keyring` crate.
//!
//! Covers Linux (kernel keyutils) and Windows (Credential Manager). The
//! crate's errors have no status codes, so they are translated into the
//! Security framework code space.

use keyring::{Entry, Error as KeyringError};
use tracing::debug;

use crate::backend::{Criteria, SecretBackend, Status};

/// `keyring`-backed [`SecretBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringBackend;

fn status(err: KeyringError) -> Status {
    let status = match &err {
        KeyringError::NoEntry => Status::ITEM_NOT_FOUND,
        KeyringError::NoStorageAccess(_) => Status::INTERACTION_NOT_ALLOWED,
        KeyringError::Ambiguous(_) => Status::DUPLICATE_ITEM,
        KeyringError::BadEncoding(_)
        | KeyringError::TooLong(_, _)
        | KeyringError::Invalid(_, _) => Status::PARAM,
        _ => Status::IO,
    };
    if !status.is_not_found() {
        debug!(error = %err, %status, "keyring request failed");
    }
    status
}

fn entry(criteria: &Criteria<'_>) -> Result<Entry, Status> {
    Entry::new(criteria.service, criteria.account).map_err(status)
}

impl SecretBackend for KeyringBackend {
    fn name(&self) -> &'static str {
        "keyring"
    }

    fn query(&self, criteria: &Criteria<'_>) -> Result<Option<Vec<u8>>, Status> {
        entry(criteria)?.get_secret().map(Some).map_err(status)
    }

    fn insert(&self, criteria: &Criteria<'_>, data: &[u8]) -> Result<(), Status> {
        let entry = entry(criteria)?;
        // keyring only offers upsert; check first to keep add-only semantics.
        match entry.get_secret() {
            Ok(_) => return Err(Status::DUPLICATE_ITEM),
            Err(KeyringError::NoEntry) => {}
            Err(e) => return Err(status(e)),
        }
        entry.set_secret(data).map_err(status)
    }

    fn delete(&self, criteria: &Criteria<'_>) -> Result<(), Status> {
        entry(criteria)?.delete_credential().map_err(status)
    }
}
