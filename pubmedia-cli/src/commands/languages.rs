use pubmedia_lib::languages::{
    autoselect_language, language_choices, publication_language_choices, set_language,
};
use pubmedia_lib::{BrowseError, Label, Request, Session};

use crate::error::CliError;
use crate::spinner::spinner;
use crate::{prompt, render};

/// List languages and run the chosen entry: set the browsing language, or
/// play a track in another language when the request names a publication.
pub(crate) fn run_languages(session: &mut Session, request: &Request) -> Result<(), CliError> {
    if request.code.is_some() && request.track.is_none() {
        return Err(CliError::usage("languages for a publication need a track"));
    }
    let pb = spinner(Label::LoadingLanguages.text());
    let choices = match request.track {
        Some(track) if request.code.is_some() => {
            let publication = request.publication(session.language());
            publication_language_choices(session, &publication, track)
        }
        _ => language_choices(session),
    };
    pb.finish_and_clear();

    let choices = match choices {
        Ok(choices) => choices,
        Err(BrowseError::NotFound) => {
            render::message(Label::NotAvailable);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    render::print_choices(&choices);
    if let Some(index) = prompt::select(choices.len())? {
        super::dispatch(session, &choices[index].request)?;
    }
    Ok(())
}

pub(crate) fn run_set_language(session: &mut Session, request: &Request) -> Result<(), CliError> {
    let lang = request
        .lang
        .as_deref()
        .ok_or_else(|| CliError::usage("setlang needs a language code"))?;
    set_language(session, lang, request.lang_name.as_deref())?;
    render::message(session.settings().language_display_name());
    Ok(())
}

/// Pick the browsing language from the host's locale on first run.
pub(crate) fn run_autoselect(session: &mut Session, iso: &str) -> Result<(), CliError> {
    let pb = spinner(Label::LoadingLanguages.text());
    let result = autoselect_language(session, iso);
    pb.finish_and_clear();
    if result? {
        log::info!(
            "language set to {}",
            session.settings().language_display_name()
        );
    }
    Ok(())
}
