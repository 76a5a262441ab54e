//! Language lists and the browsing language setting.

use pubmedia_core::PublicationRecord;

use crate::error::BrowseError;
use crate::request::{Mode, Request};
use crate::session::Session;
use crate::settings::DEFAULT_LANGUAGE;

/// One entry of a language list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub code: String,
    pub name: String,
    /// What choosing this entry does
    pub request: Request,
}

/// Every language the publisher offers, as `name / vernacular name`.
/// Choosing one sets the browsing language.
pub fn language_choices(session: &Session) -> Result<Vec<LanguageChoice>, BrowseError> {
    let choices = session
        .source()
        .languages()?
        .into_iter()
        .map(|lang| {
            let name = lang.display_name();
            LanguageChoice {
                request: Request::to(Mode::SetLanguage)
                    .with_lang(&lang.langcode)
                    .with_lang_name(&name),
                code: lang.langcode,
                name,
            }
        })
        .collect();
    Ok(history_first(session, choices))
}

/// Languages `publication` is available in, sorted by name. Choosing one
/// plays `track` in that language.
pub fn publication_language_choices(
    session: &Session,
    publication: &PublicationRecord,
    track: i64,
) -> Result<Vec<LanguageChoice>, BrowseError> {
    let response = session
        .source()
        .publication_media(&publication.key(), true)?;
    let choices = response
        .language_names()
        .into_iter()
        .map(|(code, name)| LanguageChoice {
            request: Request::for_publication(Mode::Open, publication)
                .with_lang(&code)
                .with_track(track),
            code,
            name,
        })
        .collect();
    Ok(history_first(session, choices))
}

/// Recently used languages first, then the rest in their original order.
fn history_first(session: &Session, choices: Vec<LanguageChoice>) -> Vec<LanguageChoice> {
    let history = &session.settings().language_history;
    let (recent, rest): (Vec<_>, Vec<_>) = choices
        .into_iter()
        .partition(|choice| history.contains(&choice.code));
    recent.into_iter().chain(rest).collect()
}

/// Make `lang` the browsing language and remember it in the history.
///
/// Translations are scraped for the new language when enabled.
pub fn set_language(
    session: &mut Session,
    lang: &str,
    name: Option<&str>,
) -> Result<(), BrowseError> {
    log::info!("browsing language: {lang}");
    session.update_settings(|s| {
        s.language = lang.to_string();
        s.language_name = Some(name.unwrap_or(lang).to_string());
        s.push_language_history(lang);
    })?;
    session.ensure_translations()?;
    Ok(())
}

/// Select the language whose ISO 639-1 symbol is `iso`.
///
/// When none matches, the default language is written to the history so
/// the lookup is not attempted again. Returns whether a language was set.
pub fn autoselect_language(session: &mut Session, iso: &str) -> Result<bool, BrowseError> {
    let languages = session.source().languages()?;
    match languages
        .into_iter()
        .find(|lang| lang.symbol.as_deref() == Some(iso))
    {
        Some(lang) => {
            log::debug!("autoselecting language: {}", lang.langcode);
            set_language(session, &lang.langcode, Some(&lang.display_name()))?;
            Ok(true)
        }
        None => {
            log::debug!("no language with symbol {iso}");
            session.update_settings(|s| s.push_language_history(DEFAULT_LANGUAGE))?;
            Ok(false)
        }
    }
}

/// Whether the language should be picked automatically: nothing was ever
/// chosen and the host runs in something other than English.
pub fn needs_autoselect(session: &Session, host_iso: Option<&str>) -> bool {
    session.settings().language_history.is_empty()
        && host_iso.is_some_and(|iso| !iso.is_empty() && iso != "en")
}
