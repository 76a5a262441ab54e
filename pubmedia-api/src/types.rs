use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::text::unescape;

/// Response of the publication media endpoint.
///
/// `files` is kept as raw JSON so one malformed entry never spoils its
/// siblings; see [`PubMediaResponse::mp3_files`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubMediaResponse {
    pub pub_name: String,
    #[serde(default)]
    pub formatted_date: Option<String>,
    #[serde(default)]
    pub pub_image: Option<PubImage>,
    #[serde(default)]
    pub files: Value,
    /// Only filled in when all languages were requested.
    #[serde(default)]
    pub languages: HashMap<String, PubLanguage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PubImage {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PubLanguage {
    #[serde(default)]
    pub name: String,
}

impl PubMediaResponse {
    /// Publication name, followed by the issue date for periodicals.
    pub fn display_title(&self) -> String {
        match self.formatted_date.as_deref() {
            Some(date) if !date.is_empty() => unescape(&format!("{} {}", self.pub_name, date)),
            _ => unescape(&self.pub_name),
        }
    }

    pub fn icon(&self) -> Option<&str> {
        self.pub_image.as_ref()?.url.as_deref()
    }

    /// The MP3 entries for `lang`, in response order. Empty when the
    /// language or format is missing.
    pub fn mp3_files(&self, lang: &str) -> Vec<MediaFile> {
        self.files
            .get(lang)
            .and_then(|formats| formats.get("MP3"))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(MediaFile::from_value).collect())
            .unwrap_or_default()
    }

    /// `(code, name)` of every language the publication is available in,
    /// sorted by name.
    pub fn language_names(&self) -> Vec<(String, String)> {
        let mut names: Vec<_> = self
            .languages
            .iter()
            .map(|(code, lang)| (code.clone(), lang.name.clone()))
            .collect();
        names.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        names
    }
}

/// One entry of a publication's file list.
///
/// Every attribute is optional; the caller decides which ones it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFile {
    pub mimetype: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub track: Option<i64>,
    pub booknum: Option<i64>,
}

impl MediaFile {
    pub const MP3_MIMETYPE: &'static str = "audio/mpeg";

    pub fn from_value(value: &Value) -> Self {
        Self {
            mimetype: string_at(value, "mimetype"),
            url: value.get("file").and_then(|f| string_at(f, "url")),
            title: string_at(value, "title"),
            duration: value.get("duration").and_then(Value::as_f64),
            track: value.get("track").and_then(loose_int),
            booknum: value.get("booknum").and_then(loose_int),
        }
    }

    pub fn is_audio(&self) -> bool {
        self.mimetype.as_deref() == Some(Self::MP3_MIMETYPE)
    }
}

fn string_at(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Integers sometimes arrive as strings.
fn loose_int(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Response of the global language list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageList {
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub langcode: String,
    pub name: String,
    #[serde(default)]
    pub vernacular_name: String,
    /// ISO 639-1 code, when the language has one
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Language {
    /// "English / English", "Spanish / español", ...
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.name, self.vernacular_name)
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
