use pubmedia_api::ApiError;
use pubmedia_lib::{BrowseError, RequestError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Browsing failed
    #[error(transparent)]
    Browse(#[from] BrowseError),

    /// The HTTP client could not be created
    #[error("Connection error: {0}")]
    Client(#[from] ApiError),

    /// Malformed self-request query
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    /// A request is missing something the mode needs
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
