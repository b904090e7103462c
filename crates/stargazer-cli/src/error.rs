//! Error types for the `stargazer` binary.

/// Top-level error for the terminal front end.
///
/// Each variant wraps a subsystem error so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: stargazer_core::ConfigError,
    },

    /// The session could not be set up.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: stargazer_core::SessionError,
    },

    /// Reading from stdin or writing to stdout failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
