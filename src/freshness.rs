use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"20\d{2}").expect("static pattern"));

/// Guesses whether a page is recent
///
/// A page is fresh when its URL contains one of `recent_years`, or when any
/// `20xx` token in the raw HTML is one of them.
pub fn estimate_freshness(url: &str, html: &str, recent_years: &[u16]) -> bool {
    if recent_years
        .iter()
        .any(|year| url.contains(&year.to_string()))
    {
        return true;
    }

    YEAR.find_iter(html)
        .filter_map(|m| m.as_str().parse::<u16>().ok())
        .any(|year| recent_years.contains(&year))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEARS: &[u16] = &[2024, 2025];

    #[test]
    fn test_year_in_url() {
        assert!(estimate_freshness("https://ex.com/2025/news", "", YEARS));
    }

    #[test]
    fn test_year_in_html() {
        assert!(estimate_freshness(
            "https://ex.com/news",
            "<p>Updated March 2024</p>",
            YEARS
        ));
    }

    #[test]
    fn test_old_page() {
        assert!(!estimate_freshness(
            "https://ex.com/archive",
            "<p>Copyright 2019-2021</p>",
            YEARS
        ));
    }

    #[test]
    fn test_no_years_configured() {
        assert!(!estimate_freshness("https://ex.com/2025", "2025", &[]));
    }
}
