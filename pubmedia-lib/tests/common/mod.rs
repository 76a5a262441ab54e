#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use pubmedia_api::{ApiError, Language, MediaSource, PubMediaResponse};
use pubmedia_core::PublicationRecord;
use pubmedia_lib::{CacheDatabase, Session, Settings};
use serde_json::{Value, json};

/// Canned media source that counts every call.
#[derive(Default)]
pub struct FakeSource {
    publications: HashMap<String, Value>,
    languages: Vec<Language>,
    pages: HashMap<String, String>,
    broken: bool,
    calls: Rc<Cell<usize>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails like a dropped connection.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with_pub(mut self, key: &PublicationRecord, response: Value) -> Self {
        self.publications.insert(key_string(key), response);
        self
    }

    pub fn with_language(mut self, code: &str, name: &str, vernacular: &str, iso: &str) -> Self {
        self.languages.push(Language {
            langcode: code.to_string(),
            name: name.to_string(),
            vernacular_name: vernacular.to_string(),
            symbol: Some(iso.to_string()),
        });
        self
    }

    pub fn with_page(mut self, lang: &str, html: &str) -> Self {
        self.pages.insert(lang.to_string(), html.to_string());
        self
    }

    /// Shared call counter, readable after the source moved into a session.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }

    fn call(&self, url: &str) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.broken {
            return Err(ApiError::Status {
                status: 503,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(url: String) -> ApiError {
    ApiError::NotFound { url }
}

fn key_string(key: &PublicationRecord) -> String {
    format!(
        "{}|{}|{}|{}",
        key.code.as_deref().unwrap_or(""),
        key.issue.as_deref().unwrap_or(""),
        key.booknum.value().map(i64::to_string).unwrap_or_default(),
        key.lang.as_deref().unwrap_or(""),
    )
}

impl MediaSource for FakeSource {
    fn publication_media(
        &self,
        key: &PublicationRecord,
        _all_languages: bool,
    ) -> Result<PubMediaResponse, ApiError> {
        let url = key_string(key);
        self.call(&url)?;
        let response = self.publications.get(&url).ok_or_else(|| not_found(url))?;
        Ok(serde_json::from_value(response.clone())?)
    }

    fn languages(&self) -> Result<Vec<Language>, ApiError> {
        self.call("languages")?;
        Ok(self.languages.clone())
    }

    fn translation_page(&self, lang: &str) -> Result<String, ApiError> {
        self.call(lang)?;
        self.pages
            .get(lang)
            .cloned()
            .ok_or_else(|| not_found(lang.to_string()))
    }
}

pub fn session(source: FakeSource) -> Session {
    session_with(source, Settings::default())
}

pub fn session_with(source: FakeSource, settings: Settings) -> Session {
    Session::new(
        CacheDatabase::open_memory().unwrap(),
        Box::new(source),
        settings,
    )
}

/// A publication response in `lang` with the given MP3 entries.
pub fn response(name: &str, lang: &str, files: Vec<Value>) -> Value {
    let mut by_lang = serde_json::Map::new();
    by_lang.insert(lang.to_string(), json!({"MP3": files}));
    json!({
        "pubName": name,
        "formattedDate": "",
        "pubImage": {"url": format!("https://example.org/{name}.jpg")},
        "files": by_lang,
    })
}

pub fn audio(track: i64, title: &str) -> Value {
    json!({
        "mimetype": "audio/mpeg",
        "file": {"url": format!("https://example.org/{track}.mp3")},
        "title": title,
        "duration": 60.0,
        "track": track,
    })
}

/// A non-audio entry of a Bible index listing one book.
pub fn book(booknum: i64, title: &str) -> Value {
    json!({
        "mimetype": "application/zip",
        "title": title,
        "booknum": booknum,
    })
}
