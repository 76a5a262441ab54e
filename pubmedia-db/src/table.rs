//! Partial-match CRUD over one record table.
//!
//! Query records build a conjunctive predicate: literal fields become
//! `column = ?`, absent fields become `column IS NULL`, and unspecified
//! fields are left out. The table enforces no uniqueness; callers that
//! replace a row delete it first.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use pubmedia_core::{Column, ColumnType, Field, Record, Value};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection, Row};

use crate::error::StoreError;

/// Storage format for timestamps, e.g. `2020-04-18 12:30:00.000000`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A table whose columns are the fields of `R`.
pub struct Table<'c, R> {
    conn: &'c Connection,
    _record: PhantomData<fn() -> R>,
}

impl<'c, R: Record> Table<'c, R> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    /// Create the table if it doesn't exist.
    pub fn ensure(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(&create_table_sql::<R>())?;
        Ok(())
    }

    /// Insert every field of `record`. Unspecified and absent fields are both
    /// written as NULL.
    pub fn insert(&self, record: &R) -> Result<(), StoreError> {
        let fields = record.fields();
        if fields.len() != R::COLUMNS.len() {
            return Err(StoreError::integrity(format!(
                "{} has {} columns, record has {} fields",
                R::TABLE,
                R::COLUMNS.len(),
                fields.len()
            )));
        }

        let mut values = Vec::with_capacity(fields.len());
        for (column, field) in R::COLUMNS.iter().zip(fields) {
            match field {
                Field::Value(value) => {
                    if value.column_type() != column.ty {
                        return Err(StoreError::integrity(format!(
                            "{}.{} expects {}, got {}",
                            R::TABLE,
                            column.name,
                            column.ty,
                            value.column_type()
                        )));
                    }
                    values.push(to_sql(value));
                }
                Field::Absent | Field::Unspecified => values.push(SqlValue::Null),
            }
        }

        let columns: Vec<_> = R::COLUMNS.iter().map(|c| c.name).collect();
        let placeholders = vec!["?"; columns.len()].join(",");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            columns.join(","),
            placeholders
        );
        self.conn.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    /// Delete rows matching the non-wildcard fields of `query`.
    ///
    /// A query with every field unspecified deletes nothing. Returns the
    /// number of rows removed.
    pub fn delete(&self, query: &R) -> Result<usize, StoreError> {
        let (predicate, values) = where_clause(&query.columns_with_fields());
        let Some(predicate) = predicate else {
            log::debug!("ignoring delete on {} without conditions", R::TABLE);
            return Ok(0);
        };
        let sql = format!("DELETE FROM {} WHERE {}", R::TABLE, predicate);
        let removed = self.conn.execute(&sql, params_from_iter(values))?;
        log::debug!("deleted {removed} rows from {}", R::TABLE);
        Ok(removed)
    }

    /// All rows matching `query`, or every row when `query` is `None`.
    ///
    /// Rows come back in storage order. Each call runs a fresh query.
    pub fn select(&self, query: Option<&R>) -> Result<Vec<R>, StoreError> {
        let mut rows = Vec::new();
        self.for_each(query, |row| {
            rows.push(row);
            ControlFlow::Continue(())
        })?;
        Ok(rows)
    }

    /// The first row matching `query`, if any.
    pub fn first(&self, query: &R) -> Result<Option<R>, StoreError> {
        let mut found = None;
        self.stream(Some(query), Some(1), |row| {
            found = Some(row);
            ControlFlow::Break(())
        })?;
        Ok(found)
    }

    /// Whether any row matches `query`.
    pub fn exists(&self, query: &R) -> Result<bool, StoreError> {
        Ok(self.first(query)?.is_some())
    }

    /// Hand matching rows to `f` one at a time, as they are read.
    ///
    /// Returning [`ControlFlow::Break`] stops reading; later rows are never
    /// decoded. Each call runs a fresh query.
    pub fn for_each<F>(&self, query: Option<&R>, f: F) -> Result<(), StoreError>
    where
        F: FnMut(R) -> ControlFlow<()>,
    {
        self.stream(query, None, f)
    }

    fn stream<F>(&self, query: Option<&R>, limit: Option<usize>, mut f: F) -> Result<(), StoreError>
    where
        F: FnMut(R) -> ControlFlow<()>,
    {
        let columns: Vec<_> = R::COLUMNS.iter().map(|c| c.name).collect();
        let mut sql = format!("SELECT {} FROM {}", columns.join(","), R::TABLE);

        let (predicate, values) = match query {
            Some(q) => where_clause(&q.columns_with_fields()),
            None => (None, Vec::new()),
        };
        if let Some(predicate) = predicate {
            sql.push_str(" WHERE ");
            sql.push_str(&predicate);
        }
        if let Some(n) = limit {
            sql.push_str(&format!(" LIMIT {n}"));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        while let Some(row) = rows.next()? {
            let record = R::from_row(read_row::<R>(row)?)?;
            if f(record).is_break() {
                break;
            }
        }
        Ok(())
    }
}

fn create_table_sql<R: Record>() -> String {
    let columns: Vec<_> = R::COLUMNS.iter().map(Column::definition).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        R::TABLE,
        columns.join(",")
    )
}

/// Build `a = ? AND b IS NULL ...` from the non-wildcard fields.
///
/// Returns `None` for the predicate when every field is a wildcard.
pub(crate) fn where_clause(
    pairs: &[(Column, Field<Value>)],
) -> (Option<String>, Vec<SqlValue>) {
    let mut tests = Vec::new();
    let mut values = Vec::new();
    for (column, field) in pairs {
        match field {
            Field::Unspecified => {}
            Field::Absent => tests.push(format!("{} IS NULL", column.name)),
            Field::Value(value) => {
                tests.push(format!("{} = ?", column.name));
                values.push(to_sql(value.clone()));
            }
        }
    }
    if tests.is_empty() {
        (None, values)
    } else {
        (Some(tests.join(" AND ")), values)
    }
}

fn to_sql(value: Value) -> SqlValue {
    match value {
        Value::Text(s) => SqlValue::Text(s),
        Value::Integer(n) => SqlValue::Integer(n),
        Value::Timestamp(t) => SqlValue::Text(t.format(TIMESTAMP_FORMAT).to_string()),
    }
}

fn read_row<R: Record>(row: &Row<'_>) -> rusqlite::Result<Vec<Option<Value>>> {
    let mut values = Vec::with_capacity(R::COLUMNS.len());
    for (i, column) in R::COLUMNS.iter().enumerate() {
        let value = match column.ty {
            ColumnType::Timestamp => row
                .get::<_, Option<chrono::NaiveDateTime>>(i)?
                .map(Value::Timestamp),
            ColumnType::Text | ColumnType::Integer => match row.get_ref(i)? {
                ValueRef::Null => None,
                ValueRef::Integer(n) => Some(Value::Integer(n)),
                ValueRef::Text(bytes) => Some(Value::Text(
                    String::from_utf8_lossy(bytes).into_owned(),
                )),
                other => {
                    return Err(rusqlite::Error::InvalidColumnType(
                        i,
                        column.name.to_string(),
                        other.data_type(),
                    ));
                }
            },
        };
        values.push(value);
    }
    Ok(values)
}
