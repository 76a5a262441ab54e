//! Builders for every menu page.
//!
//! A page that ends up with nothing to show returns
//! [`BrowseError::NotFound`], so the host can say "not available" instead of
//! opening an empty folder.

use chrono::{Datelike, NaiveDate};
use pubmedia_api::TranslationKey;
use pubmedia_api::urls::{ICON_AWAKE, ICON_BIBLE, ICON_BOOKS, ICON_WATCHTOWER};
use pubmedia_core::{BIBLE_INDEX_BOOKNUM, Field, MediaRecord, PublicationRecord};

use crate::calendar::{self, AWAKE, WATCHTOWER, WATCHTOWER_SIMPLIFIED, WATCHTOWER_STUDY};
use crate::error::BrowseError;
use crate::labels::Label;
use crate::menu::{MenuItem, Page};
use crate::request::{Mode, Request};
use crate::session::Session;

/// Bible editions with audio, in menu order.
pub const BIBLE_CODES: &[&str] = &["bi12", "nwt"];

pub fn top_level_page(session: &Session) -> Result<Page, BrowseError> {
    Ok(Page::new(vec![
        MenuItem::folder(
            Request::to(Mode::Bible),
            session.title(TranslationKey::Bible, Label::Bible)?,
        )
        .with_icon(ICON_BIBLE),
        MenuItem::folder(
            Request::to(Mode::Magazines),
            session.title(TranslationKey::Magazines, Label::Magazines)?,
        )
        .with_icon(ICON_WATCHTOWER),
        MenuItem::folder(
            Request::to(Mode::Books),
            session.title(TranslationKey::Books, Label::Books)?,
        )
        .with_icon(ICON_BOOKS),
    ]))
}

/// The Bible index pages, always downloaded fresh.
pub fn bible_page(session: &Session) -> Result<Page, BrowseError> {
    let mut items = Vec::new();
    for code in BIBLE_CODES {
        let key = session
            .publication_key(code)
            .with_booknum(BIBLE_INDEX_BOOKNUM);
        match session.download_pub_data(&key) {
            Ok((mut bible, _)) => {
                // the bi12 artwork does not fit a menu
                bible.icon = Field::Absent;
                items.push(MenuItem::publication(&bible));
            }
            Err(BrowseError::NotFound) => log::debug!("no {code} in {}", session.language()),
            Err(e) => return Err(e),
        }
    }
    non_empty(Page::new(items))
}

/// The magazines available in the browsing language.
pub fn magazines_page(session: &Session) -> Result<Page, BrowseError> {
    let mut items = Vec::new();
    for code in calendar::magazines_for_language(session.language()) {
        let (label, icon) = magazine_label(code);
        let title = match TranslationKey::for_magazine(code) {
            Some(key) => session.title(key, label)?,
            None => label.text().to_string(),
        };
        items.push(
            MenuItem::folder(Request::to(Mode::Magazines).with_code(code), title).with_icon(icon),
        );
    }
    Ok(Page::new(items))
}

/// Years of one magazine, newest first.
pub fn magazine_years_page(code: &str, today: NaiveDate) -> Result<Page, BrowseError> {
    let items = calendar::magazine_years(code, today.year())
        .into_iter()
        .map(|year| {
            MenuItem::folder(
                Request::to(Mode::Magazines).with_code(code).with_year(year),
                year.to_string(),
            )
        })
        .collect();
    non_empty(Page::new(items))
}

/// Issues of one magazine year that exist in the browsing language.
pub fn magazine_issues_page(
    session: &Session,
    code: &str,
    year: i32,
    today: NaiveDate,
) -> Result<Page, BrowseError> {
    let mut items = Vec::new();
    for issue in calendar::magazine_issues(code, year, today) {
        let key = session.publication_key(code).with_issue(issue);
        match session.get_pub_data(&key) {
            Ok(publication) => items.push(MenuItem::publication(&publication)),
            Err(BrowseError::NotFound) => {}
            Err(e) => return Err(e),
        }
    }
    non_empty(Page::new(items))
}

/// Contents of a publication: its books for a Bible index, otherwise its
/// tracks.
pub fn pub_content_page(session: &Session, key: &PublicationRecord) -> Result<Page, BrowseError> {
    if key.is_bible_index() {
        // refreshes when opened in another language
        session.get_pub_data(key)?;
        let search = PublicationRecord {
            booknum: Field::Unspecified,
            ..key.key()
        };
        let mut books: Vec<_> = session
            .cache()
            .publications()
            .select(Some(&search))?
            .into_iter()
            .filter(|book| matches!(book.booknum, Field::Value(n) if n != BIBLE_INDEX_BOOKNUM))
            .filter(|book| !book.is_failed())
            .collect();
        books.sort_by_key(|book| book.booknum.value().copied());
        Ok(Page::new(books.iter().map(MenuItem::publication).collect()))
    } else {
        let (_, mut media) = session.download_pub_data(key)?;
        media.sort_by_key(|m| m.track.value().copied());
        Ok(Page::songs(media.iter().filter_map(MenuItem::track).collect()))
    }
}

/// Cached books and brochures in the browsing language, by title, followed
/// by an entry for adding more.
pub fn books_page(session: &Session) -> Result<Page, BrowseError> {
    let search = PublicationRecord::new().with_lang(session.language());
    let mut books: Vec<_> = session
        .cache()
        .publications()
        .select(Some(&search))?
        .into_iter()
        .filter(|publication| !publication.is_failed())
        .filter(|publication| {
            publication
                .code
                .as_deref()
                .is_some_and(|code| !is_periodical_or_bible(code))
        })
        .collect();
    books.sort_by(|a, b| a.title.as_deref().cmp(&b.title.as_deref()));

    let mut items: Vec<_> = books.iter().map(MenuItem::publication).collect();
    items.push(MenuItem::folder(Request::to(Mode::AddBooks), Label::AddMore.text()));
    Ok(Page::new(items))
}

/// Download a publication and pick one of its tracks.
pub fn play_track(
    session: &Session,
    key: &PublicationRecord,
    track: i64,
) -> Result<MediaRecord, BrowseError> {
    let (_, media) = session.download_pub_data(key)?;
    media
        .into_iter()
        .find(|m| m.track == Field::Value(track) && m.url.is_value())
        .ok_or(BrowseError::NotFound)
}

/// What an open request resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Opened {
    Play(MediaRecord),
    Page(Page),
}

/// Open a publication, or play one of its tracks when the request names one.
///
/// Opening in a language other than the browsing language puts that
/// language in the history.
pub fn open(session: &mut Session, request: &Request) -> Result<Opened, BrowseError> {
    let key = request.publication(session.language());
    if let Some(lang) = key.lang.as_deref() {
        if lang != session.language() {
            session.update_settings(|s| s.push_language_history(lang))?;
        }
    }
    match request.track {
        Some(track) => Ok(Opened::Play(play_track(session, &key, track)?)),
        None => Ok(Opened::Page(pub_content_page(session, &key)?)),
    }
}

fn is_periodical_or_bible(code: &str) -> bool {
    calendar::is_magazine(code) || BIBLE_CODES.contains(&code)
}

fn magazine_label(code: &str) -> (Label, &'static str) {
    match code {
        AWAKE => (Label::Awake, ICON_AWAKE),
        WATCHTOWER => (Label::Watchtower, ICON_WATCHTOWER),
        WATCHTOWER_STUDY => (Label::WatchtowerStudy, ICON_WATCHTOWER),
        WATCHTOWER_SIMPLIFIED => (Label::WatchtowerSimplified, ICON_WATCHTOWER),
        _ => (Label::Magazines, ICON_WATCHTOWER),
    }
}

fn non_empty(page: Page) -> Result<Page, BrowseError> {
    if page.is_empty() {
        Err(BrowseError::NotFound)
    } else {
        Ok(page)
    }
}
