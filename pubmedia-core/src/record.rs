//! Publication, media and translation records.

use chrono::NaiveDateTime;

use crate::error::RecordError;
use crate::field::Field;
use crate::schema::{
    check_row_len, integer_field, text_field, timestamp_field, Column, Record, Value,
};

/// Book number of the Bible index page. Individual books are numbered from 1.
pub const BIBLE_INDEX_BOOKNUM: i64 = 0;

/// A publication, or a negative lookup result for one.
///
/// `(code, issue, booknum, lang)` identify the publication. `failed` is set
/// when the last refresh was answered with "not found".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublicationRecord {
    /// Publication code (`pub` column), e.g. "w", "nwt", "bh"
    pub code: Field<String>,
    /// Issue code for periodicals, e.g. "202001"
    pub issue: Field<String>,
    pub booknum: Field<i64>,
    /// Publisher language code, e.g. "E"
    pub lang: Field<String>,
    pub title: Field<String>,
    pub icon: Field<String>,
    pub failed: Field<NaiveDateTime>,
}

impl PublicationRecord {
    /// A record with every field unspecified.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Field::Value(code.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Field::Value(issue.into());
        self
    }

    pub fn with_booknum(mut self, booknum: i64) -> Self {
        self.booknum = Field::Value(booknum);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Field::Value(lang.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Value(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Field::Value(icon.into());
        self
    }

    pub fn with_failed(mut self, failed: NaiveDateTime) -> Self {
        self.failed = Field::Value(failed);
        self
    }

    /// Only the identifying fields; everything else unspecified.
    pub fn key(&self) -> Self {
        Self {
            code: self.code.clone(),
            issue: self.issue.clone(),
            booknum: self.booknum,
            lang: self.lang.clone(),
            ..Self::default()
        }
    }

    /// True for the Bible index page (`booknum == 0`).
    pub fn is_bible_index(&self) -> bool {
        self.booknum == Field::Value(BIBLE_INDEX_BOOKNUM)
    }

    pub fn is_failed(&self) -> bool {
        self.failed.is_value()
    }
}

const PUBLICATION_COLUMNS: &[Column] = &[
    Column::text("pub"),
    Column::text("issue"),
    Column::integer("booknum"),
    Column::text("lang"),
    Column::text("title"),
    Column::text("icon"),
    Column::timestamp("failed"),
];

impl Record for PublicationRecord {
    const TABLE: &'static str = "publications";
    const COLUMNS: &'static [Column] = PUBLICATION_COLUMNS;

    fn fields(&self) -> Vec<Field<Value>> {
        vec![
            text(&self.code),
            text(&self.issue),
            self.booknum.map(Value::Integer),
            text(&self.lang),
            text(&self.title),
            text(&self.icon),
            self.failed.map(Value::Timestamp),
        ]
    }

    fn from_row(values: Vec<Option<Value>>) -> Result<Self, RecordError> {
        check_row_len::<Self>(&values)?;
        let mut it = values.into_iter();
        Ok(Self {
            code: text_field("pub", it.next().flatten())?,
            issue: text_field("issue", it.next().flatten())?,
            booknum: integer_field("booknum", it.next().flatten())?,
            lang: text_field("lang", it.next().flatten())?,
            title: text_field("title", it.next().flatten())?,
            icon: text_field("icon", it.next().flatten())?,
            failed: timestamp_field("failed", it.next().flatten())?,
        })
    }
}

/// One playable track of a publication. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaRecord {
    pub code: Field<String>,
    pub issue: Field<String>,
    pub booknum: Field<i64>,
    pub lang: Field<String>,
    pub url: Field<String>,
    pub title: Field<String>,
    /// Length in seconds
    pub duration: Field<f64>,
    pub track: Field<i64>,
}

impl MediaRecord {
    /// A track belonging to `publication`, with its identifying fields copied.
    pub fn for_publication(publication: &PublicationRecord) -> Self {
        Self {
            code: publication.code.clone(),
            issue: publication.issue.clone(),
            booknum: publication.booknum,
            lang: publication.lang.clone(),
            ..Self::default()
        }
    }

    /// The publication this track belongs to, as a key.
    pub fn publication(&self) -> PublicationRecord {
        PublicationRecord {
            code: self.code.clone(),
            issue: self.issue.clone(),
            booknum: self.booknum,
            lang: self.lang.clone(),
            ..PublicationRecord::default()
        }
    }
}

/// A localized string scraped from the publisher's web site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationRecord {
    pub key: Field<String>,
    pub lang: Field<String>,
    pub string: Field<String>,
}

impl TranslationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Field::Value(key.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Field::Value(lang.into());
        self
    }

    pub fn with_string(mut self, string: impl Into<String>) -> Self {
        self.string = Field::Value(string.into());
        self
    }
}

const TRANSLATION_COLUMNS: &[Column] = &[
    Column::text("key"),
    Column::text("lang"),
    Column::text("string"),
];

impl Record for TranslationRecord {
    const TABLE: &'static str = "translations";
    const COLUMNS: &'static [Column] = TRANSLATION_COLUMNS;

    fn fields(&self) -> Vec<Field<Value>> {
        vec![text(&self.key), text(&self.lang), text(&self.string)]
    }

    fn from_row(values: Vec<Option<Value>>) -> Result<Self, RecordError> {
        check_row_len::<Self>(&values)?;
        let mut it = values.into_iter();
        Ok(Self {
            key: text_field("key", it.next().flatten())?,
            lang: text_field("lang", it.next().flatten())?,
            string: text_field("string", it.next().flatten())?,
        })
    }
}

fn text(field: &Field<String>) -> Field<Value> {
    field.as_ref().map(|s| Value::Text(s.clone()))
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
