//! Tri-state record fields.

use std::ops::Deref;

/// One attribute of a record.
///
/// - `Unspecified`: wildcard. Left out of query predicates entirely and
///   written as NULL on insert.
/// - `Absent`: the entity has no such attribute. Matches `IS NULL` in queries
///   and is written as NULL on insert.
/// - `Value`: a literal. Matches `= ?` in queries.
///
/// Rows read back from storage only ever contain `Absent` or `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field<T> {
    #[default]
    Unspecified,
    Absent,
    Value(T),
}

impl<T> Field<T> {
    /// `Absent` for `None`, `Value` otherwise.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Absent,
        }
    }

    /// The literal value, if any. Wildcard and absent both read as `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Field::Unspecified)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unspecified => Field::Unspecified,
            Field::Absent => Field::Absent,
            Field::Value(v) => Field::Value(v),
        }
    }

    /// Map the literal value, keeping the other two states as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unspecified => Field::Unspecified,
            Field::Absent => Field::Absent,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    /// `self` if it is not a wildcard, otherwise `other`.
    pub fn or(self, other: Field<T>) -> Field<T> {
        match self {
            Field::Unspecified => other,
            _ => self,
        }
    }
}

impl<T: Deref> Field<T> {
    pub fn as_deref(&self) -> Option<&T::Target> {
        self.value().map(|v| v.deref())
    }
}
