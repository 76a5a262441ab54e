mod common;

use chrono::TimeDelta;
use pubmedia_core::{Field, PublicationRecord};
use pubmedia_lib::refresh::now;
use pubmedia_lib::{BrowseError, RETRY_AFTER};
use serde_json::json;

use common::{FakeSource, audio, book, response, session};

fn bh() -> PublicationRecord {
    PublicationRecord::new().with_code("bh").with_lang("E")
}

fn nwt_index() -> PublicationRecord {
    PublicationRecord::new()
        .with_code("nwt")
        .with_booknum(0)
        .with_lang("E")
}

#[test]
fn miss_downloads_then_hits_cache() {
    let source = FakeSource::new().with_pub(
        &bh(),
        response("Bible Teach", "E", vec![audio(1, "Chapter 1")]),
    );
    let calls = source.calls();
    let session = session(source);

    let first = session.get_pub_data(&bh()).unwrap();
    assert_eq!(first.title.as_deref(), Some("Bible Teach"));
    assert_eq!(calls.get(), 1);

    let second = session.get_pub_data(&bh()).unwrap();
    assert_eq!(second.title.as_deref(), Some("Bible Teach"));
    assert_eq!(second.failed, Field::Absent);
    assert_eq!(calls.get(), 1);
}

#[test]
fn not_found_is_cached_as_failure() {
    let source = FakeSource::new();
    let calls = source.calls();
    let session = session(source);

    let err = session.get_pub_data(&bh()).unwrap_err();
    assert!(matches!(err, BrowseError::NotFound));
    assert_eq!(calls.get(), 1);

    let cached = session.cache().publications().select(Some(&bh())).unwrap();
    assert_eq!(cached.len(), 1);
    assert!(cached[0].is_failed());
    assert_eq!(cached[0].title, Field::Absent);

    // suppressed for a day
    let err = session.get_pub_data(&bh()).unwrap_err();
    assert!(matches!(err, BrowseError::NotFound));
    assert_eq!(calls.get(), 1);
}

#[test]
fn recent_failure_is_not_retried() {
    let source = FakeSource::new().with_pub(&bh(), response("Bible Teach", "E", vec![]));
    let calls = source.calls();
    let session = session(source);

    let failed = bh().with_failed(now() - TimeDelta::hours(1));
    session.cache().publications().insert(&failed).unwrap();

    assert!(session.get_pub_data(&bh()).unwrap_err().is_not_found());
    assert_eq!(calls.get(), 0);
}

#[test]
fn old_failure_is_retried() {
    let source = FakeSource::new().with_pub(&bh(), response("Bible Teach", "E", vec![]));
    let calls = source.calls();
    let session = session(source);

    let failed = bh().with_failed(now() - RETRY_AFTER - TimeDelta::minutes(1));
    session.cache().publications().insert(&failed).unwrap();

    let publication = session.get_pub_data(&bh()).unwrap();
    assert!(!publication.is_failed());
    assert_eq!(calls.get(), 1);

    // the failed row is replaced
    let cached = session.cache().publications().select(Some(&bh())).unwrap();
    assert_eq!(cached.len(), 1);
    assert!(!cached[0].is_failed());
}

#[test]
fn old_failure_that_still_fails_is_renewed() {
    let source = FakeSource::new();
    let calls = source.calls();
    let session = session(source);

    let old = now() - TimeDelta::days(3);
    session
        .cache()
        .publications()
        .insert(&bh().with_failed(old))
        .unwrap();

    assert!(session.get_pub_data(&bh()).unwrap_err().is_not_found());
    assert_eq!(calls.get(), 1);

    let cached = session.cache().publications().select(Some(&bh())).unwrap();
    assert_eq!(cached.len(), 1);
    assert!(cached[0].failed.value().is_some_and(|&at| at > old));
}

#[test]
fn transport_errors_leave_cache_alone() {
    let session = session(FakeSource::broken());
    let err = session.get_pub_data(&bh()).unwrap_err();
    assert!(matches!(err, BrowseError::Transport(_)));
    assert!(session.cache().publications().select(None).unwrap().is_empty());
}

#[test]
fn download_returns_tracks_and_replaces_entry() {
    let source = FakeSource::new().with_pub(
        &bh(),
        response(
            "Bible Teach",
            "E",
            vec![audio(2, "Chapter 2"), audio(1, "Tom &amp; Jerry")],
        ),
    );
    let session = session(source);
    session
        .cache()
        .publications()
        .insert(&bh().with_title("Stale"))
        .unwrap();

    let (publication, media) = session.download_pub_data(&bh()).unwrap();
    assert_eq!(publication.icon.as_deref(), Some("https://example.org/Bible Teach.jpg"));
    assert_eq!(media.len(), 2);
    assert_eq!(media[1].title.as_deref(), Some("Tom & Jerry"));
    assert_eq!(media[1].track, Field::Value(1));
    assert_eq!(media[0].code.as_deref(), Some("bh"));
    assert_eq!(media[0].duration, Field::Value(60.0));

    let cached = session.cache().publications().select(Some(&bh())).unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].title.as_deref(), Some("Bible Teach"));
}

#[test]
fn incomplete_entries_are_skipped() {
    let files = vec![
        audio(1, "Good"),
        json!({"mimetype": "audio/mpeg", "title": "No file", "track": 2}),
        json!({"mimetype": "audio/mpeg", "file": {"url": "https://example.org/3.mp3"}, "track": 3}),
        json!({"mimetype": "audio/mpeg", "file": {"url": "https://example.org/4.mp3"}, "title": "No track"}),
    ];
    let source = FakeSource::new().with_pub(&bh(), response("Bible Teach", "E", files));
    let session = session(source);

    let (_, media) = session.download_pub_data(&bh()).unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].title.as_deref(), Some("Good"));
}

#[test]
fn bible_index_replaces_every_book() {
    let source = FakeSource::new().with_pub(
        &nwt_index(),
        response(
            "New World Translation",
            "E",
            vec![book(1, "Genesis"), book(2, "Exodus"), json!({"title": "No number"})],
        ),
    );
    let session = session(source);
    let table = session.cache().publications();

    for (booknum, title) in [(1, "Old Genesis"), (2, "Old Exodus"), (66, "Revelation")] {
        let stale = PublicationRecord::new()
            .with_code("nwt")
            .with_booknum(booknum)
            .with_lang("E")
            .with_title(title);
        table.insert(&stale).unwrap();
    }

    session.download_pub_data(&nwt_index()).unwrap();

    let bible = PublicationRecord::new().with_code("nwt").with_lang("E");
    let mut rows = table.select(Some(&bible)).unwrap();
    rows.sort_by_key(|r| r.booknum.value().copied());
    let books: Vec<_> = rows
        .iter()
        .map(|r| (r.booknum.value().copied(), r.title.as_deref().map(str::to_owned)))
        .collect();
    assert_eq!(
        books,
        vec![
            (Some(0), Some("New World Translation".to_string())),
            (Some(1), Some("Genesis".to_string())),
            (Some(2), Some("Exodus".to_string())),
        ]
    );
}

#[test]
fn bible_index_does_not_touch_other_languages() {
    let source = FakeSource::new().with_pub(
        &nwt_index(),
        response("New World Translation", "E", vec![book(1, "Genesis")]),
    );
    let session = session(source);
    let table = session.cache().publications();

    let spanish = PublicationRecord::new()
        .with_code("nwt")
        .with_booknum(1)
        .with_lang("S")
        .with_title("Génesis");
    table.insert(&spanish).unwrap();

    session.download_pub_data(&nwt_index()).unwrap();
    assert!(table.exists(&spanish).unwrap());
}
