//! Error types for the `footprint` binary.

/// Top-level error for the `footprint` binary.
///
/// Each variant wraps a subsystem error so `run` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: footprint_core::ConfigError,
    },

    /// A record could not be saved. The previous record is intact.
    #[error("not saved: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: footprint_store::StoreError,
    },

    /// Output could not be written.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Output could not be encoded.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
