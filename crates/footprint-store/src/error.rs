//! Error types for the persistence layer.
//!
//! Only writes surface errors. Reads degrade to "absent" or "empty" inside
//! the store and are logged instead of returned.

/// Errors raised by a [`DurableMedium`](crate::DurableMedium).
#[derive(Debug, thiserror::Error)]
pub enum MediumError {
    /// An I/O operation on the backing file failed.
    #[error("I/O error on key {key}: {source}")]
    Io {
        /// The logical key being accessed.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The medium refuses writes (full, read-only, or switched off).
    #[error("medium unavailable: {0}")]
    Unavailable(String),

    /// The key contains characters the medium cannot address.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

/// Errors surfaced by [`ProfileStore`](crate::ProfileStore) write operations.
///
/// A caller receiving any of these must treat the write as not having
/// happened. The previously committed record is intact.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The durable medium could not commit the record.
    #[error("storage unavailable for {key}: {source}")]
    StorageUnavailable {
        /// The logical key that failed to commit.
        key: &'static str,
        /// The underlying medium error.
        source: MediumError,
    },

    /// The record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
