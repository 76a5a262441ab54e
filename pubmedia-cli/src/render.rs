//! Terminal output for pages, language lists and notifications.

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use pubmedia_lib::languages::LanguageChoice;
use pubmedia_lib::{Label, MediaRecord, MenuItem, Page, Target};

pub(crate) fn print_page(page: &Page) {
    let width = page.len().to_string().len();
    for (i, item) in page.items.iter().enumerate() {
        println!("{:>width$}. {}", i + 1, format_item(item));
    }
}

fn format_item(item: &MenuItem) -> String {
    match &item.target {
        Target::Request(request) => format!(
            "{}  {}",
            item.title.if_supports_color(Stdout, |t| t.bold()),
            request.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        Target::Media(url) => {
            let mut line = format!("{}", item.title.if_supports_color(Stdout, |t| t.bold()));
            if let Some(secs) = item.duration {
                line.push_str(&format!(" ({})", format_duration(secs)));
            }
            line.push_str(&format!(
                "\n      {}",
                url.if_supports_color(Stdout, |t| t.cyan())
            ));
            if let Some(other) = &item.other_language {
                line.push_str(&format!(
                    "\n      {}: {}",
                    Label::PlayInOtherLanguage,
                    other.if_supports_color(Stdout, |t| t.dimmed()),
                ));
            }
            line
        }
    }
}

pub(crate) fn print_choices(choices: &[LanguageChoice]) {
    let width = choices.len().to_string().len();
    for (i, choice) in choices.iter().enumerate() {
        println!(
            "{:>width$}. {} {}",
            i + 1,
            choice.name.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", choice.code).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

pub(crate) fn print_playing(media: &MediaRecord) {
    let title = media.title.as_deref().unwrap_or_default();
    let url = media.url.as_deref().unwrap_or_default();
    println!(
        "{} {}",
        "\u{25B6}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    println!("  {}", url.if_supports_color(Stdout, |t| t.cyan()));
}

/// A message box: something the user should see, not an error.
pub(crate) fn message(text: impl std::fmt::Display) {
    println!(
        "{} {}",
        "\u{2139}".if_supports_color(Stdout, |t| t.blue()),
        text
    );
}

/// An error notification on stderr.
pub(crate) fn notify(text: impl std::fmt::Display) {
    eprintln!(
        "{} {}",
        "\u{2718}".if_supports_color(Stderr, |t| t.red()),
        text
    );
}

pub(crate) fn warning(title: Label, text: Label) {
    eprintln!(
        "{} {}",
        title.if_supports_color(Stderr, |t| t.yellow()),
        text.if_supports_color(Stderr, |t| t.dimmed()),
    );
}

/// "1:05", "1:02:03"
pub(crate) fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
