use std::ops::ControlFlow;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pubmedia_lib::{AddOutcome, BOOK_CODES, Label, ScanProgress, Session, add_book, scan_books};

use crate::error::CliError;
use crate::spinner::step_bar;
use crate::{prompt, render};

/// Unattended scan, stopping after the given number of finds if set.
///
/// Ctrl-C ends the process outright; everything found so far is already
/// committed to the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanLimit(pub Option<usize>);

impl ScanLimit {
    fn check(&self, found: usize) -> ControlFlow<()> {
        match self.0 {
            Some(max) if found >= max => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Add books: look up `code`, scan the known codes, or ask which of the two.
pub(crate) fn run_add_books(
    session: &Session,
    code: Option<&str>,
    auto: Option<ScanLimit>,
) -> Result<(), CliError> {
    if let Some(code) = code {
        return add_one(session, code);
    }
    if let Some(limit) = auto {
        return scan(session, limit);
    }
    if prompt::confirm(Label::ScanQuestion.text())? {
        return scan(session, ScanLimit::default());
    }
    match prompt::input(Label::EnterPublication.text())? {
        Some(code) => add_one(session, &code),
        None => Ok(()),
    }
}

fn add_one(session: &Session, code: &str) -> Result<(), CliError> {
    match add_book(session, code)? {
        AddOutcome::Added(publication) => render::message(format!(
            "{}: {}",
            Label::PublicationAdded,
            publication.title.as_deref().unwrap_or(code)
        )),
        AddOutcome::WrongCode => render::message(Label::WrongCode),
    }
    Ok(())
}

fn scan(session: &Session, limit: ScanLimit) -> Result<(), CliError> {
    let pb = step_bar(BOOK_CODES.len());
    let mut found = 0;
    let result = scan_books(session, |progress| match progress {
        ScanProgress::Checking { index, code, .. } => {
            pb.set_position(*index as u64);
            pb.set_message(format!("{} {code}", Label::Scanning));
            ControlFlow::Continue(())
        }
        ScanProgress::Found { title, .. } => {
            pb.println(format!(
                "  {} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                title
            ));
            found += 1;
            limit.check(found)
        }
    });
    pb.finish_and_clear();

    let summary = result?;
    log::debug!(
        "checked {} codes, found {}",
        summary.checked,
        summary.found.len()
    );
    render::message(format!("{}: {}", Label::ScanDone, summary.found.len()));
    Ok(())
}
