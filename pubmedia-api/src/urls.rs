//! Fixed endpoints and artwork of the publisher's sites.

use std::time::Duration;

pub const ICON_BIBLE: &str = "https://wol.jw.org/img/bibles@3x.png";
pub const ICON_BOOKS: &str = "https://wol.jw.org/img/books@3x.png";
pub const ICON_WATCHTOWER: &str = "https://wol.jw.org/img/watchtower@3x.png";
pub const ICON_AWAKE: &str = "https://wol.jw.org/img/awake@3x.png";

pub const LANGUAGE_API: &str = "https://www.jw.org/en/languages";
pub const PUBMEDIA_API: &str = "https://pubmedia.jw-api.org/GETPUBMEDIALINKS";
pub const FINDER_API: &str = "https://www.jw.org/finder";

/// Document id of the magazines landing page, used for scraping translations.
pub const DOCID_MAGAZINES: &str = "1011209";

/// Socket timeout for every request. The media API can stall for about ten
/// seconds before answering.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
