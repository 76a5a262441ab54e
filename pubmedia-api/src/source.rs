use pubmedia_core::PublicationRecord;

use crate::error::ApiError;
use crate::types::{Language, PubMediaResponse};

/// Where publication metadata comes from.
///
/// [`crate::PubMediaClient`] talks to the real servers; tests substitute a
/// canned implementation.
pub trait MediaSource {
    /// Media links for the publication identified by `key`.
    ///
    /// Returns [`ApiError::NotFound`] when the publication or issue does not
    /// exist in that language.
    fn publication_media(
        &self,
        key: &PublicationRecord,
        all_languages: bool,
    ) -> Result<PubMediaResponse, ApiError>;

    /// Every language the publisher offers.
    fn languages(&self) -> Result<Vec<Language>, ApiError>;

    /// HTML of the magazines landing page in `lang`, for scraping.
    fn translation_page(&self, lang: &str) -> Result<String, ApiError>;
}

/// Query parameters of the media endpoint for `key`.
///
/// Fields without a value are left out of the query.
pub fn pub_media_params(
    key: &PublicationRecord,
    all_languages: bool,
) -> Result<Vec<(&'static str, String)>, ApiError> {
    let code = key
        .code
        .as_deref()
        .ok_or_else(|| ApiError::InvalidRequest("publication code is required".to_string()))?;

    let mut params = vec![
        ("output", "json".to_string()),
        ("fileformat", "MP3".to_string()),
        ("pub", code.to_string()),
    ];
    if let Some(issue) = key.issue.as_deref() {
        params.push(("issue", issue.to_string()));
    }
    if let Some(booknum) = key.booknum.value() {
        params.push(("booknum", booknum.to_string()));
    }
    if let Some(lang) = key.lang.as_deref() {
        params.push(("langspoken", lang.to_string()));
        params.push(("txtCMSLang", lang.to_string()));
    }
    params.push(("alllangs", u8::from(all_languages).to_string()));
    Ok(params)
}
