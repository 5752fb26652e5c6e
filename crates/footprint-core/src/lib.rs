//! Configuration and session orchestration for the digital footprint tracker.
//!
//! - [`config`] -- YAML configuration with serde defaults and env overrides.
//! - [`session`] -- [`Session`], the caller that owns the store and keeps the
//!   unsaved-changes indicator.

pub mod config;
pub mod session;

pub use config::{ConfigError, FootprintConfig, LoggingConfig, StorageConfig};
pub use session::Session;
