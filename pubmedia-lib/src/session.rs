//! Per-process browsing context.

use std::path::PathBuf;

use pubmedia_api::{MediaSource, TranslationKey};
use pubmedia_core::{MediaRecord, PublicationRecord};
use pubmedia_db::CacheDatabase;

use crate::error::BrowseError;
use crate::labels::Label;
use crate::refresh;
use crate::settings::{DEFAULT_LANGUAGE, Profile, Settings};
use crate::translations;

/// Everything a page needs: the cache, where to download from, and the
/// user's settings.
///
/// Created once at startup and passed to every page builder.
pub struct Session {
    cache: CacheDatabase,
    source: Box<dyn MediaSource>,
    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl Session {
    /// A session over an already opened cache. Settings changes are kept in
    /// memory only.
    pub fn new(cache: CacheDatabase, source: Box<dyn MediaSource>, settings: Settings) -> Self {
        Self {
            cache,
            source,
            settings,
            settings_path: None,
        }
    }

    /// Open the cache and settings of `profile`, creating the directory on
    /// first run. Settings changes are written back to the profile.
    pub fn open(profile: &Profile, source: Box<dyn MediaSource>) -> Result<Self, BrowseError> {
        profile
            .ensure()
            .map_err(|e| BrowseError::CacheUnavailable(e.into()))?;
        let settings_path = profile.settings_path();
        let settings = Settings::load(&settings_path)?;
        let cache = CacheDatabase::open(&profile.cache_path())?;
        Ok(Self {
            cache,
            source,
            settings,
            settings_path: Some(settings_path),
        })
    }

    pub fn cache(&self) -> &CacheDatabase {
        &self.cache
    }

    pub fn source(&self) -> &dyn MediaSource {
        self.source.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Publisher code of the browsing language.
    pub fn language(&self) -> &str {
        &self.settings.language
    }

    /// Change the settings and persist them.
    pub fn update_settings(
        &mut self,
        update: impl FnOnce(&mut Settings),
    ) -> Result<(), BrowseError> {
        update(&mut self.settings);
        if let Some(path) = &self.settings_path {
            self.settings.save(path)?;
        }
        Ok(())
    }

    pub fn download_pub_data(
        &self,
        key: &PublicationRecord,
    ) -> Result<(PublicationRecord, Vec<MediaRecord>), BrowseError> {
        refresh::download_pub_data(&self.cache, self.source(), key)
    }

    pub fn get_pub_data(&self, key: &PublicationRecord) -> Result<PublicationRecord, BrowseError> {
        refresh::get_pub_data(&self.cache, self.source(), key)
    }

    /// A key for `code` in the browsing language.
    pub fn publication_key(&self, code: &str) -> PublicationRecord {
        PublicationRecord::new()
            .with_code(code)
            .with_lang(self.language())
    }

    /// Scraped name for `key` when scraping is enabled and the string is
    /// cached, otherwise the built-in `fallback`.
    pub fn title(&self, key: TranslationKey, fallback: Label) -> Result<String, BrowseError> {
        if self.settings.scrape_translations {
            if let Some(text) = translations::translation(&self.cache, key, self.language())? {
                return Ok(text);
            }
        }
        Ok(fallback.text().to_string())
    }

    /// Fetch translations for the browsing language if scraping is enabled
    /// and the language is not the default one. Returns the number of
    /// strings stored.
    pub fn ensure_translations(&self) -> Result<usize, BrowseError> {
        let lang = self.language();
        if !self.settings.scrape_translations || lang == DEFAULT_LANGUAGE {
            return Ok(0);
        }
        translations::update_translations(&self.cache, self.source(), lang)
    }
}
