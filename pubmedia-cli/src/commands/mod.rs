mod books;
mod browse;
mod clean;
mod languages;

pub(crate) use books::{ScanLimit, run_add_books};
pub(crate) use clean::{run_clean, run_after_clean};
pub(crate) use languages::run_autoselect;

use chrono::Local;

use pubmedia_lib::{Mode, Request, Session};

use crate::error::CliError;

/// Run a self-request. Cache cleaning is handled before the session is
/// opened, see [`run_clean`].
pub(crate) fn dispatch(session: &mut Session, request: &Request) -> Result<(), CliError> {
    log::debug!("request: {request}");
    let today = Local::now().date_naive();
    match request.mode {
        None => browse::run_top_level(session),
        Some(Mode::Bible) => browse::run_bible(session),
        Some(Mode::Magazines) => browse::run_magazines(session, request, today),
        Some(Mode::Books) => browse::run_books(session),
        Some(Mode::AddBooks) => run_add_books(session, request.code.as_deref(), None),
        Some(Mode::Languages) => languages::run_languages(session, request),
        Some(Mode::SetLanguage) => languages::run_set_language(session, request),
        Some(Mode::Open) => browse::run_open(session, request),
        Some(Mode::CleanCache) => run_after_clean(session),
    }
}
