//! Requests back to the tool itself.
//!
//! Every menu entry carries one of these. Encoded as a query string such as
//! `mode=open&pub=w&issue=202001&lang=E`, it is what a host passes back when
//! the entry is chosen.

use std::fmt;
use std::str::FromStr;

use pubmedia_core::{Field, PublicationRecord};
use url::form_urlencoded;

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Open a publication, or play one of its tracks
    Open,
    Bible,
    Magazines,
    Books,
    AddBooks,
    Languages,
    SetLanguage,
    CleanCache,
}

pub const ALL_MODES: &[Mode] = &[
    Mode::Open,
    Mode::Bible,
    Mode::Magazines,
    Mode::Books,
    Mode::AddBooks,
    Mode::Languages,
    Mode::SetLanguage,
    Mode::CleanCache,
];

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Open => "open",
            Mode::Bible => "bible",
            Mode::Magazines => "mag",
            Mode::Books => "books",
            Mode::AddBooks => "bookadd",
            Mode::Languages => "langlist",
            Mode::SetLanguage => "setlang",
            Mode::CleanCache => "clean",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RequestError::UnknownMode(s.to_string()))
    }
}

const KEY_MODE: &str = "mode";
const KEY_PUB: &str = "pub";
const KEY_ISSUE: &str = "issue";
const KEY_BOOKNUM: &str = "booknum";
const KEY_LANG: &str = "lang";
const KEY_LANG_NAME: &str = "langname";
const KEY_YEAR: &str = "year";
const KEY_TRACK: &str = "track";

/// A decoded self-request. `mode == None` is the top level menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub mode: Option<Mode>,
    /// Publication code
    pub code: Option<String>,
    pub issue: Option<String>,
    pub booknum: Option<i64>,
    pub lang: Option<String>,
    /// Printable language name, for [`Mode::SetLanguage`]
    pub lang_name: Option<String>,
    /// Magazine year
    pub year: Option<i32>,
    /// Track to play directly
    pub track: Option<i64>,
}

impl Request {
    pub fn top_level() -> Self {
        Self::default()
    }

    pub fn to(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// A request about `publication`, with its identifying fields copied.
    pub fn for_publication(mode: Mode, publication: &PublicationRecord) -> Self {
        Self {
            mode: Some(mode),
            code: publication.code.value().cloned(),
            issue: publication.issue.value().cloned(),
            booknum: publication.booknum.value().copied(),
            lang: publication.lang.value().cloned(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_lang_name(mut self, name: impl Into<String>) -> Self {
        self.lang_name = Some(name.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_track(mut self, track: i64) -> Self {
        self.track = Some(track);
        self
    }

    /// The publication this request is about, as a cache key.
    ///
    /// Missing publication fields are absent (they match NULL), and a missing
    /// language falls back to `default_lang`.
    pub fn publication(&self, default_lang: &str) -> PublicationRecord {
        PublicationRecord {
            code: Field::from_option(self.code.clone()),
            issue: Field::from_option(self.issue.clone()),
            booknum: Field::from_option(self.booknum),
            lang: Field::Value(
                self.lang
                    .clone()
                    .unwrap_or_else(|| default_lang.to_string()),
            ),
            ..PublicationRecord::default()
        }
    }

    /// Encode as a query string. Empty values are left out.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                query.append_pair(key, &value);
            }
        };
        put(KEY_MODE, self.mode.map(|m| m.as_str().to_string()));
        put(KEY_PUB, self.code.clone());
        put(KEY_ISSUE, self.issue.clone());
        put(KEY_BOOKNUM, self.booknum.map(|n| n.to_string()));
        put(KEY_LANG, self.lang.clone());
        put(KEY_LANG_NAME, self.lang_name.clone());
        put(KEY_YEAR, self.year.map(|y| y.to_string()));
        put(KEY_TRACK, self.track.map(|t| t.to_string()));
        query.finish()
    }

    /// Decode a query string, with or without the leading `?`.
    ///
    /// Unknown keys are ignored; for repeated keys the first one wins.
    pub fn from_query(query: &str) -> Result<Self, RequestError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut request = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                KEY_MODE if request.mode.is_none() => request.mode = Some(value.parse()?),
                KEY_PUB if request.code.is_none() => request.code = Some(value.into_owned()),
                KEY_ISSUE if request.issue.is_none() => request.issue = Some(value.into_owned()),
                KEY_BOOKNUM if request.booknum.is_none() => {
                    request.booknum = Some(parse_number(KEY_BOOKNUM, &value)?)
                }
                KEY_LANG if request.lang.is_none() => request.lang = Some(value.into_owned()),
                KEY_LANG_NAME if request.lang_name.is_none() => {
                    request.lang_name = Some(value.into_owned())
                }
                KEY_YEAR if request.year.is_none() => {
                    request.year = Some(parse_number(KEY_YEAR, &value)?)
                }
                KEY_TRACK if request.track.is_none() => {
                    request.track = Some(parse_number(KEY_TRACK, &value)?)
                }
                _ => {}
            }
        }
        Ok(request)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.to_query())
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, RequestError> {
    value.trim().parse().map_err(|_| RequestError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
