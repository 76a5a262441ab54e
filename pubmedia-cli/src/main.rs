//! pubmedia CLI
//!
//! Command-line front end for browsing publication audio. Every menu entry
//! it prints carries a self-request (`?mode=...`) that can be passed back
//! with `pubmedia route`.

mod cli_types;
mod commands;
mod error;
mod prompt;
mod render;
mod spinner;

use clap::Parser;

use pubmedia_lib::languages::needs_autoselect;
use pubmedia_lib::{BrowseError, Label, Mode, Profile, PubMediaClient, Request, Session};

use crate::cli_types::{Cli, Commands};
use crate::commands::ScanLimit;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        match &e {
            CliError::Browse(BrowseError::Transport(_)) | CliError::Client(_) => {
                render::notify(Label::ConnectionError)
            }
            CliError::Browse(BrowseError::CacheUnavailable(_)) => {
                render::notify(Label::DatabaseError)
            }
            _ => render::notify(&e),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let profile = Profile::resolve(cli.profile);

    let (request, scan) = match cli.command {
        None => (Request::top_level(), None),
        Some(Commands::Route { query }) => (Request::from_query(&query)?, None),
        Some(Commands::CleanCache { yes }) => {
            return clean_and_reopen(&profile, yes);
        }
        Some(Commands::AddBooks { code, auto, limit }) => (
            Request {
                code,
                ..Request::to(Mode::AddBooks)
            },
            auto.then_some(ScanLimit(limit)),
        ),
        Some(command) => match command.to_request() {
            Some(request) => (request, None),
            None => return Ok(()),
        },
    };

    if request.mode == Some(Mode::CleanCache) {
        return clean_and_reopen(&profile, false);
    }

    let mut session = open_session(&profile)?;
    if request.mode.is_none() {
        let host = host_language();
        if needs_autoselect(&session, host.as_deref()) {
            if let Some(iso) = host.as_deref() {
                commands::run_autoselect(&mut session, iso)?;
            }
        }
    }
    if request.mode == Some(Mode::AddBooks) {
        return commands::run_add_books(&session, request.code.as_deref(), scan);
    }
    commands::dispatch(&mut session, &request)
}

fn open_session(profile: &Profile) -> Result<Session, CliError> {
    log::debug!("profile: {}", profile.dir().display());
    let client = PubMediaClient::new()?;
    Ok(Session::open(profile, Box::new(client))?)
}

/// The cache file must go before any connection to it is opened.
fn clean_and_reopen(profile: &Profile, yes: bool) -> Result<(), CliError> {
    if commands::run_clean(profile, yes)? {
        let session = open_session(profile)?;
        commands::run_after_clean(&session)?;
    }
    Ok(())
}

/// ISO 639-1 code of the user's locale, from `LC_ALL`, `LC_MESSAGES` or
/// `LANG` ("es_ES.UTF-8" gives "es").
fn host_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| iso_from_locale(&value))
}

fn iso_from_locale(locale: &str) -> Option<String> {
    let code: String = locale
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    match code.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_to_iso() {
        assert_eq!(iso_from_locale("es_ES.UTF-8").as_deref(), Some("es"));
        assert_eq!(iso_from_locale("fr").as_deref(), Some("fr"));
        assert_eq!(iso_from_locale("C.UTF-8"), None);
        assert_eq!(iso_from_locale("POSIX"), None);
        assert_eq!(iso_from_locale(""), None);
    }

    #[test]
    fn commands_map_to_requests() {
        let cli = Cli::parse_from(["pubmedia", "mag", "w", "2019"]);
        let request = cli.command.and_then(Commands::to_request).unwrap();
        assert_eq!(request.to_query(), "mode=mag&pub=w&year=2019");

        let cli = Cli::parse_from(["pubmedia", "open", "--pub", "bh", "--lang", "S", "--track", "2"]);
        let request = cli.command.and_then(Commands::to_request).unwrap();
        assert_eq!(request.to_query(), "mode=open&pub=bh&lang=S&track=2");

        let cli = Cli::parse_from(["pubmedia", "setlang", "S", "Spanish"]);
        let request = cli.command.and_then(Commands::to_request).unwrap();
        assert_eq!(request.to_query(), "mode=setlang&lang=S&langname=Spanish");
    }

    #[test]
    fn route_and_clean_have_no_request() {
        let cli = Cli::parse_from(["pubmedia", "route", "?mode=books"]);
        assert!(cli.command.and_then(Commands::to_request).is_none());

        let cli = Cli::parse_from(["pubmedia", "--profile", "/tmp/p", "clean", "-y"]);
        assert_eq!(cli.profile.as_deref(), Some(std::path::Path::new("/tmp/p")));
        assert!(cli.command.and_then(Commands::to_request).is_none());
    }

    #[test]
    fn scan_limit_needs_auto() {
        let cli = Cli::parse_from(["pubmedia", "add-books", "--auto", "--limit", "3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::AddBooks { auto: true, limit: Some(3), .. })
        ));
        assert!(Cli::try_parse_from(["pubmedia", "add-books", "--limit", "3"]).is_err());
    }

    #[test]
    fn no_command_is_top_level() {
        let cli = Cli::parse_from(["pubmedia", "-v"]);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
