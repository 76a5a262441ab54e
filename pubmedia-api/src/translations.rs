//! Localized menu names scraped from the magazines landing page.
//!
//! The page carries the names of the main sections in its navigation menu
//! and the magazine names in the publication filter:
//!
//! ```html
//! <div class="BibleLandingPage" role="listitem">BIBLE</div>
//! <div class="PublicationsMagazinesLandingPage" role="listitem">MAGAZINES</div>
//! <div class="PublicationsDefaultLandingPage" role="listitem">BOOKS</div>
//! <select class="jsPublicationFilter">
//!     <option value="g">AWAKE!</option>
//! </select>
//! ```
//!
//! Only the first occurrence of each string is kept.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Keys of the scraped strings in the translations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    Bible,
    Magazines,
    Books,
    Awake,
    Watchtower,
    WatchtowerStudy,
    WatchtowerSimplified,
}

impl TranslationKey {
    /// Stored key. Magazine keys are the publisher's publication codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKey::Bible => "bible",
            TranslationKey::Magazines => "magazines",
            TranslationKey::Books => "books",
            TranslationKey::Awake => "g",
            TranslationKey::Watchtower => "wp",
            TranslationKey::WatchtowerStudy => "w",
            TranslationKey::WatchtowerSimplified => "ws",
        }
    }

    /// The key for a magazine code, if it is one of the magazines.
    pub fn for_magazine(code: &str) -> Option<Self> {
        match code {
            "g" => Some(TranslationKey::Awake),
            "wp" => Some(TranslationKey::Watchtower),
            "w" => Some(TranslationKey::WatchtowerStudy),
            "ws" => Some(TranslationKey::WatchtowerSimplified),
            _ => None,
        }
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("static selector"));
    };
}

selector!(BIBLE_SELECTOR, "div.BibleLandingPage[role='listitem']");
selector!(MAGAZINES_SELECTOR, "div.PublicationsMagazinesLandingPage[role='listitem']");
selector!(BOOKS_SELECTOR, "div.PublicationsDefaultLandingPage[role='listitem']");
selector!(FILTER_OPTION_SELECTOR, "select.jsPublicationFilter option[value]");

/// Extract translated strings from the landing page HTML.
pub fn scrape_translations(html: &str) -> BTreeMap<&'static str, String> {
    let doc = Html::parse_document(html);
    let mut strings = BTreeMap::new();

    let sections = [
        (TranslationKey::Bible, &*BIBLE_SELECTOR),
        (TranslationKey::Magazines, &*MAGAZINES_SELECTOR),
        (TranslationKey::Books, &*BOOKS_SELECTOR),
    ];
    for (key, selector) in sections {
        if let Some(text) = doc.select(selector).find_map(element_text) {
            strings.insert(key.as_str(), text);
        }
    }

    for option in doc.select(&FILTER_OPTION_SELECTOR) {
        let Some(key) = option
            .value()
            .attr("value")
            .and_then(TranslationKey::for_magazine)
        else {
            continue;
        };
        if strings.contains_key(key.as_str()) {
            continue;
        }
        if let Some(text) = element_text(option) {
            strings.insert(key.as_str(), text);
        }
    }

    strings
}

/// Text content with each line trimmed and line breaks removed.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    let raw: String = element.text().collect();
    let text: String = raw.lines().map(str::trim).collect();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
#[path = "tests/translations_tests.rs"]
mod tests;
