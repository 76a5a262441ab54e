use super::*;
use crate::schema::ColumnType;
use chrono::NaiveDate;

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 4, 18)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

#[test]
fn publication_columns_match_cache_layout() {
    let names: Vec<_> = PublicationRecord::COLUMNS.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["pub", "issue", "booknum", "lang", "title", "icon", "failed"]
    );
    let failed = PublicationRecord::COLUMNS.last().unwrap();
    assert_eq!(failed.ty, ColumnType::Timestamp);
    assert_eq!(failed.definition(), "failed TIMESTAMP");
    assert_eq!(PublicationRecord::COLUMNS[0].definition(), "pub");
}

#[test]
fn translation_columns_match_cache_layout() {
    let names: Vec<_> = TranslationRecord::COLUMNS.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["key", "lang", "string"]);
}

#[test]
fn fields_keep_wildcard_and_absent_apart() {
    let mut record = PublicationRecord::new().with_code("w").with_lang("E");
    record.booknum = Field::Absent;
    let fields = record.fields();
    assert_eq!(fields[0], Field::Value(Value::Text("w".into())));
    assert_eq!(fields[1], Field::Unspecified);
    assert_eq!(fields[2], Field::Absent);
    assert_eq!(fields[3], Field::Value(Value::Text("E".into())));
}

#[test]
fn publication_from_row_reads_nulls_as_absent() {
    let row = vec![
        Some(Value::Text("w".into())),
        Some(Value::Text("202001".into())),
        None,
        Some(Value::Text("E".into())),
        Some(Value::Text("Watchtower".into())),
        None,
        Some(Value::Timestamp(timestamp())),
    ];
    let record = PublicationRecord::from_row(row).unwrap();
    assert_eq!(record.code.as_deref(), Some("w"));
    assert!(record.booknum.is_absent());
    assert!(record.icon.is_absent());
    assert_eq!(record.failed, Field::Value(timestamp()));
    assert!(record.is_failed());
}

#[test]
fn from_row_rejects_wrong_column_count() {
    let err = TranslationRecord::from_row(vec![None, None]).unwrap_err();
    assert!(matches!(
        err,
        RecordError::ColumnCount {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn from_row_rejects_wrong_type() {
    let row = vec![
        Some(Value::Integer(5)),
        None,
        None,
        None,
        None,
        None,
        None,
    ];
    let err = PublicationRecord::from_row(row).unwrap_err();
    assert!(matches!(
        err,
        RecordError::TypeMismatch { column: "pub", .. }
    ));
}

#[test]
fn key_drops_non_identifying_fields() {
    let record = PublicationRecord::new()
        .with_code("nwt")
        .with_booknum(0)
        .with_lang("E")
        .with_title("Bible")
        .with_failed(timestamp());
    let key = record.key();
    assert_eq!(key.code.as_deref(), Some("nwt"));
    assert!(key.issue.is_unspecified());
    assert!(key.title.is_unspecified());
    assert!(key.failed.is_unspecified());
    assert!(key.is_bible_index());
}

#[test]
fn media_copies_publication_key() {
    let mut publication = PublicationRecord::new().with_code("bh").with_lang("E");
    publication.issue = Field::Absent;
    let media = MediaRecord::for_publication(&publication);
    assert_eq!(media.code.as_deref(), Some("bh"));
    assert!(media.issue.is_absent());
    assert!(media.booknum.is_unspecified());
    assert_eq!(media.publication(), publication.key());
}
