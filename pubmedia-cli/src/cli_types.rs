//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pubmedia_lib::{Mode, Request};

#[derive(Parser)]
#[command(name = "pubmedia")]
#[command(about = "Browse and play publication audio", long_about = None)]
pub(crate) struct Cli {
    /// Profile directory holding the cache and settings
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command, show the top level menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Fields identifying a publication.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct PublicationArgs {
    /// Publication code (e.g., bh, w, nwt)
    #[arg(long = "pub")]
    pub code: Option<String>,

    /// Issue code for magazines (e.g., 202001)
    #[arg(long)]
    pub issue: Option<String>,

    /// Book number (0 for the Bible index)
    #[arg(long)]
    pub booknum: Option<i64>,

    /// Language code (defaults to the browsing language)
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the Bible editions
    Bible,

    /// Browse magazines, their years and issues
    #[command(alias = "mag")]
    Magazines {
        /// Magazine code (g, wp, w, ws)
        code: Option<String>,

        /// Year to list issues for
        year: Option<i32>,
    },

    /// List cached books and brochures
    Books,

    /// Add books by scanning known codes or entering one
    #[command(name = "add-books", alias = "bookadd")]
    AddBooks {
        /// Publication code to look up
        code: Option<String>,

        /// Scan known codes without asking
        #[arg(long, conflicts_with = "code")]
        auto: bool,

        /// Stop scanning once this many publications are found
        #[arg(long, requires = "auto")]
        limit: Option<usize>,
    },

    /// Open a publication, or play one of its tracks
    Open {
        #[command(flatten)]
        publication: PublicationArgs,

        /// Track to play
        #[arg(long)]
        track: Option<i64>,
    },

    /// Choose the browsing language, or a language to play a track in
    #[command(alias = "langlist")]
    Languages {
        #[command(flatten)]
        publication: PublicationArgs,

        /// Track to play in the chosen language (requires --pub)
        #[arg(long, requires = "code")]
        track: Option<i64>,
    },

    /// Set the browsing language
    #[command(name = "set-language", alias = "setlang")]
    SetLanguage {
        /// Language code (e.g., E, S, F)
        lang: String,

        /// Printable name of the language
        name: Option<String>,
    },

    /// Remove the metadata cache
    #[command(alias = "clean")]
    CleanCache {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Handle a self-request query string (e.g., "?mode=mag&pub=w")
    Route {
        query: String,
    },
}

impl PublicationArgs {
    fn apply(self, mut request: Request) -> Request {
        request.code = self.code;
        request.issue = self.issue;
        request.booknum = self.booknum;
        request.lang = self.lang;
        request
    }
}

impl Commands {
    /// The self-request equivalent of a command. `Route` and `CleanCache`
    /// have none.
    pub(crate) fn to_request(self) -> Option<Request> {
        let request = match self {
            Commands::Bible => Request::to(Mode::Bible),
            Commands::Magazines { code, year } => Request {
                code,
                year,
                ..Request::to(Mode::Magazines)
            },
            Commands::Books => Request::to(Mode::Books),
            Commands::AddBooks { code, .. } => Request {
                code,
                ..Request::to(Mode::AddBooks)
            },
            Commands::Open { publication, track } => Request {
                track,
                ..publication.apply(Request::to(Mode::Open))
            },
            Commands::Languages { publication, track } => Request {
                track,
                ..publication.apply(Request::to(Mode::Languages))
            },
            Commands::SetLanguage { lang, name } => Request {
                lang: Some(lang),
                lang_name: name,
                ..Request::to(Mode::SetLanguage)
            },
            Commands::CleanCache { .. } | Commands::Route { .. } => return None,
        };
        Some(request)
    }
}
