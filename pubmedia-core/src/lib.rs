//! Core record types shared by the cache, the API client and the menu layer.
//!
//! Every record field is a [`Field`], which keeps "don't care" apart from
//! "this attribute does not exist". The storage layer reads the static
//! [`Column`] descriptors of a [`Record`] to build its SQL.

pub mod error;
pub mod field;
pub mod record;
pub mod schema;

pub use error::RecordError;
pub use field::Field;
pub use record::{
    MediaRecord, PublicationRecord, TranslationRecord, BIBLE_INDEX_BOOKNUM,
};
pub use schema::{Column, ColumnType, Record, Value};
