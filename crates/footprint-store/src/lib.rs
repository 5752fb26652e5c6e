//! Persistence layer for the digital footprint tracker.
//!
//! Holds exactly one current [`ActivityProfile`] and an unbounded,
//! append-only list of [`EarlyAccessRequest`]s on a host-provided durable
//! key-value medium. The store never calls the calculator.
//!
//! # Architecture
//!
//! ```text
//! Caller (Session)
//!     |
//!     +-- ProfileStore ---------- typed records, write serialization
//!            |
//!            +-- DurableMedium -- FileMedium   (one JSON file per key)
//!                              -- MemoryMedium (process-local map)
//! ```
//!
//! # Failure Semantics
//!
//! - Reads degrade: a missing, unreadable, or malformed record is reported
//!   as absent (or an empty list) and logged at `warn`.
//! - Writes are atomic: a failed write returns
//!   [`StoreError::StorageUnavailable`] and the previous record survives.
//!
//! # Modules
//!
//! - [`medium`] -- The [`DurableMedium`] trait and [`MemoryMedium`]
//! - [`file`] -- [`FileMedium`], atomic write-then-rename files
//! - [`store`] -- [`ProfileStore`] and the fixed record keys
//! - [`error`] -- Shared error types
//!
//! [`ActivityProfile`]: footprint_types::ActivityProfile
//! [`EarlyAccessRequest`]: footprint_types::EarlyAccessRequest

pub mod error;
pub mod file;
pub mod medium;
pub mod store;

// Re-export primary types for convenience.
pub use error::{MediumError, StoreError};
pub use file::FileMedium;
pub use medium::{DurableMedium, MemoryMedium};
pub use store::{Clock, ProfileStore, keys};
