use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static pattern"));

/// Collapses every run of whitespace (spaces, tabs, newlines) to a single
/// space and trims both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes anything that looks like a tag and normalizes the remaining text
///
/// This is a lightweight alternative to DOM extraction: it does not parse the
/// document, so script and style bodies survive as text and entities are left
/// undecoded.
pub fn strip_tags(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    normalize_whitespace(&text.replace('\n', " "))
}

/// Appends a text fragment the way the extractor joins leaf text nodes:
/// trimmed, followed by one separating space
pub fn push_fragment(buf: &mut String, fragment: &str) {
    buf.push_str(fragment.trim());
    buf.push(' ');
}
