//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific startup failure, providing a single error
/// type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: yakshop_core::ConfigError,
    },

    /// The herd file could not be loaded.
    #[error("herd error: {source}")]
    Herd {
        /// The underlying herd file error.
        #[from]
        source: yakshop_core::HerdFileError,
    },

    /// The HTTP server failed to start or stopped with an error.
    #[error("api error: {source}")]
    Api {
        /// The underlying server error.
        #[from]
        source: yakshop_api::ServerError,
    },
}
