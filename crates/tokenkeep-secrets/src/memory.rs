//! In-process secret backend.
//!
//! Holds records in a map for the lifetime of the process. Used by tests, by
//! the `memory` config backend, and as the fallback when no OS store is
//! compiled in. A fault can be injected so every request fails with a chosen
//! status.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use zeroize::Zeroize;

use crate::backend::{Criteria, SecretBackend, Status};

type RecordKey = (String, String);

/// A [`SecretBackend`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<RecordKey, Vec<u8>>>,
    fault: Mutex<Option<Status>>,
    requests: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent request fail with `status`, or clear the fault.
    pub fn fail_with(&self, status: Option<Status>) {
        *self.fault.lock() = status;
    }

    /// Number of requests received so far, including failed ones.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Number of records stored under `service`.
    pub fn records_in(&self, service: &str) -> usize {
        self.records
            .lock()
            .keys()
            .filter(|(s, _)| s == service)
            .count()
    }

    /// Raw payload of a record, bypassing fault injection and counting.
    pub fn raw(&self, service: &str, account: &str) -> Option<Vec<u8>> {
        self.records
            .lock()
            .get(&(service.to_string(), account.to_string()))
            .cloned()
    }

    /// Store a raw payload directly, replacing any existing record.
    pub fn put_raw(&self, service: &str, account: &str, data: &[u8]) {
        self.records
            .lock()
            .insert((service.to_string(), account.to_string()), data.to_vec());
    }

    fn begin(&self) -> Result<(), Status> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match *self.fault.lock() {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

fn record_key(criteria: &Criteria<'_>) -> RecordKey {
    (criteria.service.to_string(), criteria.account.to_string())
}

impl SecretBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn query(&self, criteria: &Criteria<'_>) -> Result<Option<Vec<u8>>, Status> {
        self.begin()?;
        Ok(self.records.lock().get(&record_key(criteria)).cloned())
    }

    fn insert(&self, criteria: &Criteria<'_>, data: &[u8]) -> Result<(), Status> {
        self.begin()?;
        let mut records = self.records.lock();
        let key = record_key(criteria);
        if records.contains_key(&key) {
            return Err(Status::DUPLICATE_ITEM);
        }
        records.insert(key, data.to_vec());
        Ok(())
    }

    fn delete(&self, criteria: &Criteria<'_>) -> Result<(), Status> {
        self.begin()?;
        match self.records.lock().remove(&record_key(criteria)) {
            Some(mut old) => {
                old.zeroize();
                Ok(())
            }
            None => Err(Status::ITEM_NOT_FOUND),
        }
    }
}
