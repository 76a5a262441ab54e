use pubmedia_core::PublicationRecord;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::source::{pub_media_params, MediaSource};
use crate::types::{Language, LanguageList, PubMediaResponse};
use crate::urls::{DOCID_MAGAZINES, FINDER_API, LANGUAGE_API, PUBMEDIA_API, REQUEST_TIMEOUT};

/// Blocking HTTP client for the publisher's media API and web site.
pub struct PubMediaClient {
    http: Client,
}

impl PubMediaClient {
    pub fn new() -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }

    /// Fetch `base?query` as text. HTTP 404 becomes [`ApiError::NotFound`].
    fn get_text(&self, base: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = if query.is_empty() {
            Url::parse(base)
        } else {
            Url::parse_with_params(base, query)
        }
        .map_err(|e| ApiError::InvalidRequest(format!("{base}: {e}")))?;
        log::info!("opening {url}");

        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let text = self.get_text(base, query)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl MediaSource for PubMediaClient {
    fn publication_media(
        &self,
        key: &PublicationRecord,
        all_languages: bool,
    ) -> Result<PubMediaResponse, ApiError> {
        let params = pub_media_params(key, all_languages)?;
        self.get_json(PUBMEDIA_API, &params)
    }

    fn languages(&self) -> Result<Vec<Language>, ApiError> {
        let list: LanguageList = self.get_json(LANGUAGE_API, &[])?;
        Ok(list.languages)
    }

    fn translation_page(&self, lang: &str) -> Result<String, ApiError> {
        self.get_text(
            FINDER_API,
            &[
                ("docid", DOCID_MAGAZINES.to_string()),
                ("wtlocale", lang.to_string()),
            ],
        )
    }
}
