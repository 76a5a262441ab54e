//! Cache refresh logic.
//!
//! Publications are looked up in the cache first and downloaded on a miss.
//! A publication the server answered "not found" for is remembered with a
//! `failed` timestamp and not asked for again for [`RETRY_AFTER`].

use chrono::{NaiveDateTime, TimeDelta, Utc};
use pubmedia_api::{MediaFile, MediaSource};
use pubmedia_core::{Field, MediaRecord, PublicationRecord};
use pubmedia_db::CacheDatabase;

use crate::error::BrowseError;

/// How long a negative result suppresses further downloads.
pub const RETRY_AFTER: TimeDelta = TimeDelta::hours(24);

/// Timestamp written to `failed`.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Download a publication, replace its cached metadata and return it with
/// its playable tracks.
///
/// Only the identifying fields of `key` are used. For the Bible index
/// (`booknum == 0`) every cached book of that Bible is replaced by the books
/// listed in the response.
///
/// A "not found" answer replaces the cached entry with a failed one and
/// returns [`BrowseError::NotFound`]. Other failures leave the cache as is.
pub fn download_pub_data(
    cache: &CacheDatabase,
    source: &dyn MediaSource,
    key: &PublicationRecord,
) -> Result<(PublicationRecord, Vec<MediaRecord>), BrowseError> {
    let key = key.key();
    let publications = cache.publications();

    let response = match source.publication_media(&key, false) {
        Ok(response) => response,
        Err(err) if err.is_not_found() => {
            log::debug!("caching failure for {key:?}");
            publications.delete(&key)?;
            publications.insert(&key.clone().with_failed(now()))?;
            return Err(BrowseError::NotFound);
        }
        Err(err) => return Err(BrowseError::Transport(err)),
    };

    if key.is_bible_index() {
        let bible = PublicationRecord {
            booknum: Field::Unspecified,
            ..key.clone()
        };
        publications.delete(&bible)?;
    } else {
        publications.delete(&key)?;
    }

    let publication = PublicationRecord {
        title: Field::Value(response.display_title()),
        icon: Field::from_option(response.icon().map(str::to_owned)),
        failed: Field::Absent,
        ..key.clone()
    };
    publications.insert(&publication)?;

    let files = match key.lang.as_deref() {
        Some(lang) => response.mp3_files(lang),
        None => Vec::new(),
    };

    let mut media = Vec::new();
    for file in files {
        if file.is_audio() {
            match track_record(&publication, &file) {
                Some(track) => media.push(track),
                None => log::warn!("skipping incomplete media entry in {key:?}: {file:?}"),
            }
        } else if key.is_bible_index() {
            match book_record(&key, &file) {
                Some(book) => publications.insert(&book)?,
                None => log::warn!("skipping incomplete book entry in {key:?}: {file:?}"),
            }
        }
    }

    Ok((publication, media))
}

/// The cached publication for `key`, downloading it when needed.
///
/// - no cached entry: download
/// - a complete entry: return it, no request
/// - a failed entry younger than [`RETRY_AFTER`]: [`BrowseError::NotFound`]
///   without a request
/// - an older failed entry: download again
pub fn get_pub_data(
    cache: &CacheDatabase,
    source: &dyn MediaSource,
    key: &PublicationRecord,
) -> Result<PublicationRecord, BrowseError> {
    let key = key.key();
    if let Some(cached) = cache.publications().first(&key)? {
        match cached.failed.value() {
            None => {
                log::debug!("cache hit for {key:?}");
                return Ok(cached);
            }
            Some(&failed) if now() < failed + RETRY_AFTER => {
                log::debug!("not retrying {key:?}, failed at {failed}");
                return Err(BrowseError::NotFound);
            }
            Some(_) => log::debug!("retrying {key:?}"),
        }
    }
    let (publication, _) = download_pub_data(cache, source, &key)?;
    Ok(publication)
}

fn track_record(publication: &PublicationRecord, file: &MediaFile) -> Option<MediaRecord> {
    let mut track = MediaRecord::for_publication(publication);
    track.url = Field::Value(file.url.clone()?);
    track.title = Field::Value(pubmedia_api::unescape(file.title.as_deref()?));
    track.duration = Field::from_option(file.duration);
    track.track = Field::Value(file.track?);
    Some(track)
}

/// A book of the Bible, listed on the index page.
fn book_record(key: &PublicationRecord, file: &MediaFile) -> Option<PublicationRecord> {
    let title = pubmedia_api::unescape(file.title.as_deref()?);
    let booknum = file.booknum?;
    Some(key.clone().with_title(title).with_booknum(booknum))
}
