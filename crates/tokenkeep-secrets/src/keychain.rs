//! macOS Keychain backend (Security.framework generic passwords).
//!
//! Records live in the `kSecClassGenericPassword` class with the configured
//! service as `kSecAttrService` and the key as `kSecAttrAccount`. Failures
//! carry the raw `OSStatus`.

use core_foundation::data::CFData;
use security_framework::base::Error as SecError;
use security_framework::item::{ItemAddOptions, ItemAddValue, ItemClass};
use security_framework::passwords::{delete_generic_password, get_generic_password};
use tracing::debug;

use crate::backend::{Criteria, SecretBackend, Status};

/// Keychain-backed [`SecretBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct KeychainBackend;

fn status(err: SecError) -> Status {
    Status::from_code(err.code())
}

impl SecretBackend for KeychainBackend {
    fn name(&self) -> &'static str {
        "macos-keychain"
    }

    fn query(&self, criteria: &Criteria<'_>) -> Result<Option<Vec<u8>>, Status> {
        match get_generic_password(criteria.service, criteria.account) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                debug!(account = criteria.account, code = e.code(), "keychain lookup failed");
                Err(status(e))
            }
        }
    }

    fn insert(&self, criteria: &Criteria<'_>, data: &[u8]) -> Result<(), Status> {
        let mut options = ItemAddOptions::new(ItemAddValue::Data {
            class: ItemClass::generic_password(),
            data: CFData::from_buffer(data),
        });
        options
            .set_service(criteria.service)
            .set_account_name(criteria.account);
        options.add().map_err(status)
    }

    fn delete(&self, criteria: &Criteria<'_>) -> Result<(), Status> {
        delete_generic_password(criteria.service, criteria.account).map_err(status)
    }
}
