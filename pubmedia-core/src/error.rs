use thiserror::Error;

use crate::schema::ColumnType;

/// Errors that can occur when turning stored values back into a record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The row has a different number of columns than the record layout
    #[error("Table '{table}' expects {expected} columns, got {actual}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A stored value does not have the type declared for its column
    #[error("Column '{column}' expects {expected}, got {actual}")]
    TypeMismatch {
        column: &'static str,
        expected: ColumnType,
        actual: ColumnType,
    },
}
