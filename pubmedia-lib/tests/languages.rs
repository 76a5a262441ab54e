mod common;

use pubmedia_core::PublicationRecord;
use pubmedia_lib::languages::{
    autoselect_language, language_choices, needs_autoselect, publication_language_choices,
    set_language,
};
use pubmedia_lib::{Mode, Settings};
use serde_json::json;

use common::{FakeSource, session, session_with};

fn world() -> FakeSource {
    FakeSource::new()
        .with_language("E", "English", "English", "en")
        .with_language("F", "French", "français", "fr")
        .with_language("S", "Spanish", "español", "es")
}

const SPANISH_PAGE: &str = r#"
<div class="BibleLandingPage" role="listitem">Biblia</div>
<div class="PublicationsMagazinesLandingPage" role="listitem">Revistas</div>
"#;

#[test]
fn global_list_sets_language() {
    let session = session(world());
    let choices = language_choices(&session).unwrap();
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[2].name, "Spanish / español");
    assert_eq!(choices[2].request.mode, Some(Mode::SetLanguage));
    assert_eq!(choices[2].request.lang.as_deref(), Some("S"));
    assert_eq!(choices[2].request.lang_name.as_deref(), Some("Spanish / español"));
}

#[test]
fn history_languages_come_first_once() {
    let mut settings = Settings::default();
    settings.language_history = vec!["S".to_string(), "X".to_string()];
    let session = session_with(world(), settings);

    let codes: Vec<_> = language_choices(&session)
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec!["S", "E", "F"]);
}

#[test]
fn publication_list_plays_track_in_chosen_language() {
    let key = PublicationRecord::new().with_code("bh").with_lang("E");
    let source = FakeSource::new().with_pub(
        &key,
        json!({
            "pubName": "Bible Teach",
            "languages": {
                "S": {"name": "Spanish"},
                "E": {"name": "English"},
                "F": {"name": "French"}
            }
        }),
    );
    let session = session(source);

    let choices = publication_language_choices(&session, &key, 4).unwrap();
    let names: Vec<_> = choices.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["English", "French", "Spanish"]);

    let request = &choices[1].request;
    assert_eq!(request.to_query(), "mode=open&pub=bh&lang=F&track=4");
}

#[test]
fn set_language_saves_name_and_history() {
    let mut session = session(world());
    set_language(&mut session, "F", Some("French / français")).unwrap();
    set_language(&mut session, "S", None).unwrap();

    let settings = session.settings();
    assert_eq!(settings.language, "S");
    assert_eq!(settings.language_name.as_deref(), Some("S"));
    assert_eq!(settings.language_history, vec!["S", "F"]);
}

#[test]
fn set_language_scrapes_translations_when_enabled() {
    let settings = Settings {
        scrape_translations: true,
        ..Settings::default()
    };
    let source = world().with_page("S", SPANISH_PAGE);
    let calls = source.calls();
    let mut session = session_with(source, settings);

    set_language(&mut session, "S", Some("Spanish / español")).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(session.cache().translations().select(None).unwrap().len(), 2);

    // already cached
    set_language(&mut session, "S", None).unwrap();
    assert_eq!(calls.get(), 1);

    // nothing to scrape for English
    set_language(&mut session, "E", None).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn autoselect_by_iso_symbol() {
    let mut session = session(world());
    assert!(needs_autoselect(&session, Some("es")));
    assert!(!needs_autoselect(&session, Some("en")));
    assert!(!needs_autoselect(&session, None));

    assert!(autoselect_language(&mut session, "es").unwrap());
    assert_eq!(session.language(), "S");
    assert_eq!(
        session.settings().language_name.as_deref(),
        Some("Spanish / español")
    );
    assert!(!needs_autoselect(&session, Some("es")));
}

#[test]
fn autoselect_without_match_is_not_retried() {
    let mut session = session(world());
    assert!(!autoselect_language(&mut session, "xx").unwrap());
    assert_eq!(session.language(), "E");
    assert_eq!(session.settings().language_history, vec!["E"]);
    assert!(!needs_autoselect(&session, Some("xx")));
}
