//! Menu pages as shown by a host.

use pubmedia_core::{MediaRecord, PublicationRecord};

use crate::request::{Mode, Request};

/// What choosing a menu item does.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Run the tool again with this request
    Request(Request),
    /// Play this media URL
    Media(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub title: String,
    pub target: Target,
    pub icon: Option<String>,
    /// Track length in seconds
    pub duration: Option<f64>,
    /// "Play in other language" action for tracks
    pub other_language: Option<Request>,
}

impl MenuItem {
    /// A folder leading to another page.
    pub fn folder(request: Request, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: Target::Request(request),
            icon: None,
            duration: None,
            other_language: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// A folder opening `publication`.
    pub fn publication(publication: &PublicationRecord) -> Self {
        let title = publication.title.value().cloned().unwrap_or_default();
        Self {
            icon: publication.icon.value().cloned(),
            ..Self::folder(Request::for_publication(Mode::Open, publication), title)
        }
    }

    /// A playable track. Tracks without a URL get no item.
    pub fn track(media: &MediaRecord) -> Option<Self> {
        let url = media.url.value()?.clone();
        let mut other_language = Request::for_publication(Mode::Languages, &media.publication());
        other_language.track = media.track.value().copied();
        Some(Self {
            title: media.title.value().cloned().unwrap_or_default(),
            target: Target::Media(url),
            icon: None,
            duration: media.duration.value().copied(),
            other_language: Some(other_language),
        })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.target, Target::Request(_))
    }

    /// The request behind a folder.
    pub fn request(&self) -> Option<&Request> {
        match &self.target {
            Target::Request(request) => Some(request),
            Target::Media(_) => None,
        }
    }
}

/// Kind of entries on a page, so a host can pick a fitting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Files,
    Songs,
}

/// An ordered list of menu items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub content: Content,
    pub items: Vec<MenuItem>,
}

impl Page {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            content: Content::Files,
            items,
        }
    }

    pub fn songs(items: Vec<MenuItem>) -> Self {
        Self {
            content: Content::Songs,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
