//! Browsing logic for publisher audio: the session context, refresh rules
//! for the metadata cache, menu pages and the settings they depend on.

pub mod books;
pub mod calendar;
pub mod error;
pub mod labels;
pub mod languages;
pub mod menu;
pub mod pages;
pub mod refresh;
pub mod request;
pub mod session;
pub mod settings;
pub mod translations;

pub use books::{AddOutcome, BOOK_CODES, ScanProgress, ScanSummary, add_book, scan_books};
pub use error::{BrowseError, RequestError, SettingsError};
pub use labels::Label;
pub use languages::LanguageChoice;
pub use menu::{Content, MenuItem, Page, Target};
pub use pages::Opened;
pub use refresh::{RETRY_AFTER, download_pub_data, get_pub_data};
pub use request::{Mode, Request};
pub use session::Session;
pub use settings::{Profile, Settings};

pub use pubmedia_api::{MediaSource, PubMediaClient};
pub use pubmedia_core::{Field, MediaRecord, PublicationRecord};
pub use pubmedia_db::{CacheDatabase, clear_cache_file};
