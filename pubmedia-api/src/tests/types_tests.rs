use super::*;

const SAMPLE: &str = r#"{
    "pubName": "The Watchtower (Study)",
    "formattedDate": "January 2020",
    "pubImage": {"url": "https://example.org/w_202001.jpg"},
    "files": {
        "E": {
            "MP3": [
                {
                    "mimetype": "audio/mpeg",
                    "file": {"url": "https://example.org/w_E_202001_01.mp3"},
                    "title": "Article &amp; Questions",
                    "duration": 1234.5,
                    "track": 1
                },
                {
                    "mimetype": "audio/mpeg",
                    "title": "Missing file"
                },
                {
                    "mimetype": "application/zip",
                    "file": {"url": "https://example.org/all.zip"},
                    "title": "All tracks",
                    "track": "0"
                }
            ]
        }
    }
}"#;

fn sample() -> PubMediaResponse {
    serde_json::from_str(SAMPLE).unwrap()
}

#[test]
fn title_includes_formatted_date() {
    assert_eq!(sample().display_title(), "The Watchtower (Study) January 2020");
}

#[test]
fn title_without_date_is_just_the_name() {
    let resp: PubMediaResponse =
        serde_json::from_str(r#"{"pubName": "Bible Stories &amp; More", "formattedDate": ""}"#)
            .unwrap();
    assert_eq!(resp.display_title(), "Bible Stories & More");
    assert_eq!(resp.icon(), None);
    assert!(resp.mp3_files("E").is_empty());
}

#[test]
fn icon_comes_from_pub_image() {
    assert_eq!(sample().icon(), Some("https://example.org/w_202001.jpg"));
}

#[test]
fn mp3_files_tolerates_incomplete_entries() {
    let files = sample().mp3_files("E");
    assert_eq!(files.len(), 3);

    assert!(files[0].is_audio());
    assert_eq!(files[0].url.as_deref(), Some("https://example.org/w_E_202001_01.mp3"));
    assert_eq!(files[0].duration, Some(1234.5));
    assert_eq!(files[0].track, Some(1));

    assert!(files[1].is_audio());
    assert_eq!(files[1].url, None);
    assert_eq!(files[1].track, None);

    assert!(!files[2].is_audio());
    assert_eq!(files[2].track, Some(0));
}

#[test]
fn mp3_files_for_unknown_language_is_empty() {
    assert!(sample().mp3_files("S").is_empty());
}

#[test]
fn missing_pub_name_is_an_error() {
    let result: Result<PubMediaResponse, _> = serde_json::from_str(r#"{"files": {}}"#);
    assert!(result.is_err());
}

#[test]
fn language_names_are_sorted_by_name() {
    let resp: PubMediaResponse = serde_json::from_str(
        r#"{
            "pubName": "x",
            "languages": {
                "S": {"name": "Spanish"},
                "E": {"name": "English"},
                "F": {"name": "French"}
            }
        }"#,
    )
    .unwrap();
    let names: Vec<_> = resp.language_names().into_iter().map(|(c, _)| c).collect();
    assert_eq!(names, vec!["E", "F", "S"]);
}

#[test]
fn language_display_name_joins_vernacular() {
    let list: LanguageList = serde_json::from_str(
        r#"{"languages": [{"langcode": "S", "name": "Spanish", "vernacularName": "español", "symbol": "es"}]}"#,
    )
    .unwrap();
    assert_eq!(list.languages[0].display_name(), "Spanish / español");
    assert_eq!(list.languages[0].symbol.as_deref(), Some("es"));
}
