//! CLI error types.

use docnav_config::ConfigError;
use docnav_nav::FetchError;
use docnav_page::PageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Validation(String),
}
