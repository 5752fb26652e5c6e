//! The durable key-value medium and its in-memory implementation.
//!
//! A medium maps a fixed set of logical keys to text values. Writes must be
//! all-or-nothing: after a failed `write`, a subsequent `read` of the same
//! key returns the previous value.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::MediumError;

/// Host-provided storage that survives process restarts.
pub trait DurableMedium {
    /// Read the text stored at `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError`] if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Replace the text stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError`] if the value was not committed. The previous
    /// value must still be readable in that case.
    fn write(&self, key: &str, value: &str) -> Result<(), MediumError>;
}

/// A process-local medium backed by a map.
///
/// Nothing survives the process, which makes it the medium of choice for
/// tests and for hosts without a writable disk. Writes can be switched off
/// to simulate a full or unavailable medium.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: Mutex<BTreeMap<String, String>>,
    refuse_writes: AtomicBool,
}

impl MemoryMedium {
    /// Create an empty medium that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (`true`) or succeed (`false`).
    pub fn refuse_writes(&self, refuse: bool) {
        self.refuse_writes.store(refuse, Ordering::SeqCst);
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), MediumError> {
        if self.refuse_writes.load(Ordering::SeqCst) {
            return Err(MediumError::Unavailable(format!(
                "memory medium is refusing writes to {key}"
            )));
        }
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<M: DurableMedium + ?Sized> DurableMedium for &M {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), MediumError> {
        (**self).write(key, value)
    }
}
