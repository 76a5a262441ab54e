pub mod client;
pub mod error;
pub mod source;
pub mod text;
pub mod translations;
pub mod types;
pub mod urls;

pub use client::PubMediaClient;
pub use error::ApiError;
pub use source::{pub_media_params, MediaSource};
pub use text::unescape;
pub use translations::{scrape_translations, TranslationKey};
pub use types::{Language, LanguageList, MediaFile, PubImage, PubLanguage, PubMediaResponse};
