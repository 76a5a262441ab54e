//! Built-in English user interface strings.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    PlayInOtherLanguage,
    ConnectionError,
    LoadingLanguages,
    UnofficialWarning,
    NotSupported,
    Bible,
    Magazines,
    Books,
    NotAvailable,
    AddMore,
    ScanQuestion,
    Scanning,
    ScanDone,
    EnterPublication,
    PublicationAdded,
    WrongCode,
    CleanQuestion,
    CacheCleaned,
    UpdatingTranslations,
    DatabaseError,
    Watchtower,
    WatchtowerStudy,
    WatchtowerSimplified,
    Awake,
}

impl Label {
    pub fn text(self) -> &'static str {
        match self {
            Label::PlayInOtherLanguage => "Play in other language",
            Label::ConnectionError => "Could not connect to the server",
            Label::LoadingLanguages => "Loading languages...",
            Label::UnofficialWarning => "Unofficial tool",
            Label::NotSupported => {
                "This tool is not supported or endorsed by the publisher. \
                 Use the official apps for the full experience."
            }
            Label::Bible => "Bible",
            Label::Magazines => "Magazines",
            Label::Books => "Books and brochures",
            Label::NotAvailable => "Not available",
            Label::AddMore => "Add more...",
            Label::ScanQuestion => "Scan for known books and brochures? This can take a while.",
            Label::Scanning => "Checking",
            Label::ScanDone => "Scan done",
            Label::EnterPublication => "Enter publication code",
            Label::PublicationAdded => "Publication added",
            Label::WrongCode => "No publication with that code",
            Label::CleanQuestion => "Remove all cached metadata?",
            Label::CacheCleaned => "Cache cleaned",
            Label::UpdatingTranslations => "Updating translations...",
            Label::DatabaseError => "Cache database error",
            Label::Watchtower => "The Watchtower",
            Label::WatchtowerStudy => "The Watchtower (Study Edition)",
            Label::WatchtowerSimplified => "The Watchtower (Simplified Edition)",
            Label::Awake => "Awake!",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
