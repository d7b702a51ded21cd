use thiserror::Error;

/// Errors the filter core can surface
///
/// The core performs no I/O, so an invalid profile is the only fatal
/// condition. Malformed individual postings are normalized instead of
/// rejected.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Errors surfaced by the CLI wrapper around the core
#[derive(Debug, Error)]
pub enum AppError {
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("invalid arguments: {0}")]
    Cli(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid postings input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
