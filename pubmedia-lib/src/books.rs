//! Adding books and brochures to the cache.
//!
//! The media API cannot list publications, so books are found either by
//! probing a fixed list of known codes or by a code the user types in.

use std::ops::ControlFlow;

use pubmedia_core::PublicationRecord;

use crate::error::BrowseError;
use crate::session::Session;

/// Books and brochures known to have audio in at least some languages.
pub const BOOK_CODES: &[&str] = &[
    "bh", "bhs", "bt", "cf", "cl", "fg", "fy", "gt", "hf", "hl", "ia", "jd", "jl", "jr", "jy",
    "kr", "la", "lc", "lfb", "ll", "lr", "lv", "lvs", "mb", "my", "rj", "rr", "th", "yb10",
    "yb11", "yb12", "yb13", "yb14", "yb15", "yb16", "yb17", "yc", "ypq",
];

/// Progress update sent during a book scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanProgress {
    /// About to check `code`, the `index`th of `total` codes
    Checking {
        index: usize,
        total: usize,
        code: &'static str,
    },
    /// `code` exists in the browsing language
    Found { code: &'static str, title: String },
}

impl ScanProgress {
    /// Percentage done, 0 to 100.
    pub fn percent(&self) -> Option<usize> {
        match self {
            Self::Checking { index, total, .. } if *total > 0 => Some(index * 100 / total),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub found: Vec<PublicationRecord>,
    pub checked: usize,
    pub cancelled: bool,
}

/// Look up every code in [`BOOK_CODES`] in the browsing language.
///
/// `on_progress` sees each step. Returning [`ControlFlow::Break`] from a
/// `Checking` update cancels the scan before that code is checked; from a
/// `Found` update it stops after keeping that publication.
pub fn scan_books<F>(session: &Session, mut on_progress: F) -> Result<ScanSummary, BrowseError>
where
    F: FnMut(&ScanProgress) -> ControlFlow<()>,
{
    let total = BOOK_CODES.len();
    let mut summary = ScanSummary::default();

    for (index, &code) in BOOK_CODES.iter().enumerate() {
        let step = ScanProgress::Checking { index, total, code };
        if on_progress(&step).is_break() {
            log::info!("book scan cancelled after {index} of {total}");
            summary.cancelled = true;
            break;
        }

        match session.get_pub_data(&session.publication_key(code)) {
            Ok(publication) => {
                let title = publication.title.value().cloned().unwrap_or_default();
                let flow = on_progress(&ScanProgress::Found { code, title });
                summary.found.push(publication);
                summary.checked += 1;
                if flow.is_break() {
                    log::info!("book scan stopped after {} of {total}", index + 1);
                    summary.cancelled = true;
                    break;
                }
            }
            Err(BrowseError::NotFound) => summary.checked += 1,
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

/// Result of adding a single code.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(PublicationRecord),
    WrongCode,
}

/// Look up a publication code the user entered.
pub fn add_book(session: &Session, code: &str) -> Result<AddOutcome, BrowseError> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(AddOutcome::WrongCode);
    }
    match session.get_pub_data(&session.publication_key(code)) {
        Ok(publication) => Ok(AddOutcome::Added(publication)),
        Err(BrowseError::NotFound) => Ok(AddOutcome::WrongCode),
        Err(e) => Err(e),
    }
}
