use pubmedia_lib::{Label, Profile, Session, clear_cache_file};

use crate::error::CliError;
use crate::spinner::spinner;
use crate::{prompt, render};

/// Delete the cache file after confirmation. Must run before the cache is
/// opened. Returns whether the cache was cleaned.
pub(crate) fn run_clean(profile: &Profile, yes: bool) -> Result<bool, CliError> {
    if !yes && !prompt::confirm(Label::CleanQuestion.text())? {
        return Ok(false);
    }
    let path = profile.cache_path();
    clear_cache_file(&path).map_err(pubmedia_lib::BrowseError::from)?;
    render::message(Label::CacheCleaned);
    Ok(true)
}

/// Translations went with the cache, so fetch them again when needed.
pub(crate) fn run_after_clean(session: &Session) -> Result<(), CliError> {
    let pb = spinner(Label::UpdatingTranslations.text());
    let result = session.ensure_translations();
    pb.finish_and_clear();
    result?;
    Ok(())
}
