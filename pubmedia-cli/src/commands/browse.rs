use chrono::NaiveDate;

use pubmedia_lib::{BrowseError, Label, Opened, Request, Session, pages};

use crate::error::CliError;
use crate::render;

pub(crate) fn run_top_level(session: &Session) -> Result<(), CliError> {
    if session.settings().startup_message {
        render::warning(Label::UnofficialWarning, Label::NotSupported);
    }
    render::print_page(&pages::top_level_page(session)?);
    Ok(())
}

pub(crate) fn run_bible(session: &Session) -> Result<(), CliError> {
    show(pages::bible_page(session))
}

pub(crate) fn run_magazines(
    session: &Session,
    request: &Request,
    today: NaiveDate,
) -> Result<(), CliError> {
    let page = match (request.code.as_deref(), request.year) {
        (None, _) => pages::magazines_page(session),
        (Some(code), None) => pages::magazine_years_page(code, today),
        (Some(code), Some(year)) => pages::magazine_issues_page(session, code, year, today),
    };
    show(page)
}

pub(crate) fn run_books(session: &Session) -> Result<(), CliError> {
    show(pages::books_page(session))
}

pub(crate) fn run_open(session: &mut Session, request: &Request) -> Result<(), CliError> {
    if request.code.is_none() {
        return Err(CliError::usage("open needs a publication code"));
    }
    match pages::open(session, request) {
        Ok(Opened::Play(media)) => render::print_playing(&media),
        Ok(Opened::Page(page)) => render::print_page(&page),
        Err(BrowseError::NotFound) => render::message(Label::NotAvailable),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Print a page, or "not available" for an empty one.
fn show(page: Result<pubmedia_lib::Page, BrowseError>) -> Result<(), CliError> {
    match page {
        Ok(page) => render::print_page(&page),
        Err(BrowseError::NotFound) => render::message(Label::NotAvailable),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
