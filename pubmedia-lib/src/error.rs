use pubmedia_api::ApiError;
use pubmedia_db::StoreError;
use thiserror::Error;

/// Errors surfaced to the user while browsing.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The publication, issue or track does not exist in this language.
    #[error("Not available")]
    NotFound,

    /// Network failure, timeout, unexpected status or undecodable response
    #[error("Connection error: {0}")]
    Transport(ApiError),

    /// The cache database could not be opened, read or written
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(#[from] StoreError),

    /// The settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl From<ApiError> for BrowseError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { url } => {
                log::debug!("not found: {url}");
                Self::NotFound
            }
            other => Self::Transport(other),
        }
    }
}

impl BrowseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Errors reading or writing `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A self-request query string that cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
