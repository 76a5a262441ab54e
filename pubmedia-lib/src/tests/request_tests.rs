use super::*;

#[test]
fn mode_names() {
    for &mode in ALL_MODES {
        assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
    }
    assert_eq!(Mode::Magazines.as_str(), "mag");
    assert_eq!(
        "play".parse::<Mode>(),
        Err(RequestError::UnknownMode("play".to_string()))
    );
}

#[test]
fn top_level_is_empty_query() {
    assert_eq!(Request::top_level().to_query(), "");
    assert_eq!(Request::from_query("").unwrap(), Request::top_level());
    assert_eq!(Request::from_query("?").unwrap(), Request::top_level());
}

#[test]
fn query_order_and_omitted_fields() {
    let request = Request::to(Mode::Magazines).with_code("w").with_year(2019);
    assert_eq!(request.to_query(), "mode=mag&pub=w&year=2019");
    assert_eq!(request.to_string(), "?mode=mag&pub=w&year=2019");
}

#[test]
fn publication_fields_are_copied() {
    let publication = PublicationRecord::new()
        .with_code("nwt")
        .with_booknum(0)
        .with_lang("S")
        .with_title("Biblia");
    let request = Request::for_publication(Mode::Open, &publication);
    assert_eq!(request.to_query(), "mode=open&pub=nwt&booknum=0&lang=S");
}

#[test]
fn overrides_replace_publication_fields() {
    let publication = PublicationRecord::new()
        .with_code("w")
        .with_issue("202001")
        .with_lang("E");
    let request = Request::for_publication(Mode::Open, &publication)
        .with_lang("F")
        .with_track(3);
    assert_eq!(request.lang.as_deref(), Some("F"));
    assert_eq!(request.issue.as_deref(), Some("202001"));
    assert_eq!(request.track, Some(3));
}

#[test]
fn names_are_percent_encoded() {
    let request = Request::to(Mode::SetLanguage)
        .with_lang("S")
        .with_lang_name("Spanish / español");
    let query = request.to_query();
    assert!(!query.contains(' '));
    assert!(!query.contains('ñ'));
    assert_eq!(Request::from_query(&query).unwrap(), request);
}

#[test]
fn full_request_survives_encoding() {
    let request = Request {
        mode: Some(Mode::Open),
        code: Some("w".to_string()),
        issue: Some("20150115".to_string()),
        booknum: Some(12),
        lang: Some("E".to_string()),
        lang_name: Some("English".to_string()),
        year: Some(2015),
        track: Some(4),
    };
    assert_eq!(Request::from_query(&request.to_string()).unwrap(), request);
}

#[test]
fn unknown_keys_and_empty_values_are_ignored() {
    let request = Request::from_query("mode=books&foo=bar&pub=&lang=E").unwrap();
    assert_eq!(request.mode, Some(Mode::Books));
    assert_eq!(request.code, None);
    assert_eq!(request.lang.as_deref(), Some("E"));
}

#[test]
fn bad_numbers_are_rejected() {
    assert_eq!(
        Request::from_query("mode=mag&pub=w&year=soon"),
        Err(RequestError::InvalidValue {
            key: "year",
            value: "soon".to_string()
        })
    );
}

#[test]
fn publication_key_uses_absent_and_default_language() {
    let request = Request::from_query("mode=open&pub=bh").unwrap();
    let key = request.publication("F");
    assert_eq!(key.code, Field::Value("bh".to_string()));
    assert_eq!(key.issue, Field::Absent);
    assert_eq!(key.booknum, Field::Absent);
    assert_eq!(key.lang, Field::Value("F".to_string()));
    assert!(key.title.is_unspecified());
    assert!(key.failed.is_unspecified());
}
