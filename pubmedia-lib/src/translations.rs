//! Scraped menu names, cached per language.

use pubmedia_api::{MediaSource, TranslationKey, scrape_translations};
use pubmedia_core::TranslationRecord;
use pubmedia_db::CacheDatabase;

use crate::error::BrowseError;

/// Scrape and cache the translated strings for `lang`.
///
/// Does nothing when any string for `lang` is already cached. Returns the
/// number of strings stored.
pub fn update_translations(
    cache: &CacheDatabase,
    source: &dyn MediaSource,
    lang: &str,
) -> Result<usize, BrowseError> {
    let table = cache.translations();
    if table.exists(&TranslationRecord::new().with_lang(lang))? {
        log::debug!("translations for {lang} already cached");
        return Ok(0);
    }

    let html = source.translation_page(lang)?;
    let strings = scrape_translations(&html);
    for (key, string) in &strings {
        table.delete(&TranslationRecord::new().with_key(*key).with_lang(lang))?;
        table.insert(
            &TranslationRecord::new()
                .with_key(*key)
                .with_lang(lang)
                .with_string(string.as_str()),
        )?;
    }
    log::debug!("stored {} translations for {lang}", strings.len());
    Ok(strings.len())
}

/// The cached string for `key` in `lang`, if any.
pub fn translation(
    cache: &CacheDatabase,
    key: TranslationKey,
    lang: &str,
) -> Result<Option<String>, BrowseError> {
    let query = TranslationRecord::new().with_key(key.as_str()).with_lang(lang);
    let found = cache.translations().first(&query)?;
    Ok(found.and_then(|record| record.string.into_value()))
}
