//! User settings and the profile directory.
//!
//! Everything the tool persists lives in one profile directory:
//! `cache.db` for the metadata cache and `settings.toml` for the settings
//! below. The directory is chosen once at startup.

use std::io;
use std::path::{Path, PathBuf};

use pubmedia_db::CACHE_FILE_NAME;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Environment variable overriding the default profile directory.
pub const PROFILE_ENV: &str = "PUBMEDIA_PROFILE";

/// Publisher code of the default language (English).
pub const DEFAULT_LANGUAGE: &str = "E";

/// Number of recently used languages remembered.
pub const LANGUAGE_HISTORY_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Publisher language code used for browsing
    pub language: String,
    /// Printable name of `language`, e.g. "Spanish / español"
    pub language_name: Option<String>,
    /// Most recently used language codes, newest first
    pub language_history: Vec<String>,
    /// Show the notice about the tool being unofficial at the top level
    pub startup_message: bool,
    /// Use translated menu names scraped from the publisher's web site
    pub scrape_translations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            language_name: None,
            language_history: Vec::new(),
            startup_message: true,
            scrape_translations: false,
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings to `path`, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Put `lang` first in the history, dropping older duplicates and
    /// anything beyond [`LANGUAGE_HISTORY_LEN`].
    pub fn push_language_history(&mut self, lang: &str) {
        self.language_history.retain(|h| h != lang);
        self.language_history.insert(0, lang.to_string());
        self.language_history.truncate(LANGUAGE_HISTORY_LEN);
    }

    /// Printable name of the browsing language.
    pub fn language_display_name(&self) -> &str {
        self.language_name.as_deref().unwrap_or(&self.language)
    }
}

/// The directory holding the cache and settings files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    dir: PathBuf,
}

impl Profile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the profile directory using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `PUBMEDIA_PROFILE` environment variable
    /// 3. `<data dir>/pubmedia`
    pub fn resolve(cli_override: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_override, std::env::var_os(PROFILE_ENV).map(PathBuf::from))
    }

    fn resolve_with(cli_override: Option<PathBuf>, env: Option<PathBuf>) -> Self {
        let dir = cli_override
            .or(env.filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("pubmedia")
            });
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cache_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE_NAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Create the directory on first run.
    pub fn ensure(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
