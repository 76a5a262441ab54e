//! Static table layouts.
//!
//! Each persisted record type describes its table with an ordered list of
//! [`Column`]s. The store derives DDL, inserts and predicates from that list,
//! so no reflection over struct fields is needed.

use chrono::NaiveDateTime;

use crate::error::RecordError;
use crate::field::Field;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Integer,
    Timestamp,
}

impl ColumnType {
    /// Type name used in `CREATE TABLE`. Only timestamps are declared, so the
    /// engine can hand them back as date/time values; other columns are
    /// left untyped.
    pub fn declared_type(&self) -> Option<&'static str> {
        match self {
            ColumnType::Timestamp => Some("TIMESTAMP"),
            ColumnType::Text | ColumnType::Integer => None,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "text"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Name and type of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Integer,
        }
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Timestamp,
        }
    }

    /// Column definition for `CREATE TABLE`, e.g. `failed TIMESTAMP`.
    pub fn definition(&self) -> String {
        match self.ty.declared_type() {
            Some(ty) => format!("{} {}", self.name, ty),
            None => self.name.to_string(),
        }
    }
}

/// A single stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Text(_) => ColumnType::Text,
            Value::Integer(_) => ColumnType::Integer,
            Value::Timestamp(_) => ColumnType::Timestamp,
        }
    }
}

/// A record type that maps onto one table.
pub trait Record: Sized {
    /// Table name.
    const TABLE: &'static str;

    /// Columns in storage order.
    const COLUMNS: &'static [Column];

    /// All fields, in the same order as [`Record::COLUMNS`].
    fn fields(&self) -> Vec<Field<Value>>;

    /// Build a record from one stored row (`None` = NULL), in column order.
    fn from_row(values: Vec<Option<Value>>) -> Result<Self, RecordError>;

    /// Column descriptors paired with this record's fields.
    fn columns_with_fields(&self) -> Vec<(Column, Field<Value>)> {
        Self::COLUMNS.iter().copied().zip(self.fields()).collect()
    }
}

/// Check the length of a stored row against a table layout.
pub(crate) fn check_row_len<R: Record>(values: &[Option<Value>]) -> Result<(), RecordError> {
    if values.len() != R::COLUMNS.len() {
        return Err(RecordError::ColumnCount {
            table: R::TABLE,
            expected: R::COLUMNS.len(),
            actual: values.len(),
        });
    }
    Ok(())
}

pub(crate) fn text_field(
    column: &'static str,
    value: Option<Value>,
) -> Result<Field<String>, RecordError> {
    match value {
        None => Ok(Field::Absent),
        Some(Value::Text(s)) => Ok(Field::Value(s)),
        Some(other) => Err(RecordError::TypeMismatch {
            column,
            expected: ColumnType::Text,
            actual: other.column_type(),
        }),
    }
}

pub(crate) fn integer_field(
    column: &'static str,
    value: Option<Value>,
) -> Result<Field<i64>, RecordError> {
    match value {
        None => Ok(Field::Absent),
        Some(Value::Integer(n)) => Ok(Field::Value(n)),
        Some(other) => Err(RecordError::TypeMismatch {
            column,
            expected: ColumnType::Integer,
            actual: other.column_type(),
        }),
    }
}

pub(crate) fn timestamp_field(
    column: &'static str,
    value: Option<Value>,
) -> Result<Field<NaiveDateTime>, RecordError> {
    match value {
        None => Ok(Field::Absent),
        Some(Value::Timestamp(t)) => Ok(Field::Value(t)),
        Some(other) => Err(RecordError::TypeMismatch {
            column,
            expected: ColumnType::Timestamp,
            actual: other.column_type(),
        }),
    }
}
