use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("static pattern"));

/// Convert a URL to a filesystem-safe file stem
///
/// Every run of non-alphanumeric characters becomes a single `_`. Distinct
/// URLs can map to the same stem; the later write wins.
pub fn sanitize_filename(url: &str) -> String {
    NON_ALPHANUMERIC.replace_all(url, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("https://a.example/x"),
            "https_a_example_x"
        );
        assert_eq!(
            sanitize_filename("https://www.upenn.edu/tuition?id=3&lang=en"),
            "https_www_upenn_edu_tuition_id_3_lang_en"
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let url = "https://example.com/a//b--c/";
        let once = sanitize_filename(url);
        assert_eq!(once, sanitize_filename(url));
        assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn test_non_ascii_collapses() {
        assert_eq!(sanitize_filename("https://ex.com/café"), "https_ex_com_caf_");
    }

    #[test]
    fn test_distinct_urls_can_collide() {
        assert_eq!(
            sanitize_filename("https://a.example/x-y"),
            sanitize_filename("https://a.example/x_y")
        );
        assert_ne!(
            sanitize_filename("http://a.example/x"),
            sanitize_filename("https://a.example/x")
        );
    }
}
