use scraper::Html;

/// Decode HTML character references (`&amp;`, `&#8220;`, ...) in a title.
pub fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text).root_element().text().collect()
}
