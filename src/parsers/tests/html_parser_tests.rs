use crate::parsers::html::{ContentExtractor, EXCLUDED_TAGS};

#[cfg(test)]
mod extraction_tests {
    use super::*;

    #[test]
    fn test_main_content_with_nav() {
        let html = "<html><body><nav>skip</nav><main>Hello <b>World</b></main></body></html>";
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "Hello World");
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><body><header>Site</header><p>Just a paragraph.</p><footer>(c)</footer></body></html>";
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "Just a paragraph.");
    }

    #[test]
    fn test_empty_page_yields_empty_string() {
        assert_eq!(ContentExtractor::default().extract(""), "");
        assert_eq!(
            ContentExtractor::default().extract("<html><body></body></html>"),
            ""
        );
    }

    #[test]
    fn test_excluded_tags_nested_in_main() {
        let html = r#"<html><head><title>T</title><style>.a{}</style></head><body>
            <main>
                <p>Keep this</p>
                <script>alert("no")</script>
                <div><noscript>Enable JS</noscript><iframe>frame text</iframe></div>
                <header>Inner header</header>
                <p>and this</p>
            </main>
        </body></html>"#;
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "Keep this and this");
        for noise in ["alert", "Enable JS", "frame text", "Inner header"] {
            assert!(!text.contains(noise), "'{}' leaked into '{}'", noise, text);
        }
    }

    #[test]
    fn test_no_tag_delimiters_in_output() {
        let html = "<html><body><article><h1>Title</h1><p>a &amp; c</p><ul><li>one</li><li>two</li></ul></article></body></html>";
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "Title a & c one two");
        assert!(!text.contains("<h1>"));
        assert!(!text.contains("</"));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<html><body><main>\n\t  Lots   of\n\n\n space\t\there \r\n </main></body></html>";
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "Lots of space here");
    }

    #[test]
    fn test_excluded_tag_list() {
        for tag in ["script", "style", "nav", "header", "footer", "iframe", "noscript", "meta", "link"] {
            assert!(EXCLUDED_TAGS.contains(&tag));
        }
    }
}

#[cfg(test)]
mod selector_priority_tests {
    use super::*;

    #[test]
    fn test_main_beats_content_class() {
        let html = r#"<html><body>
            <div class="content">From content div</div>
            <main>From main</main>
        </body></html>"#;
        let text = ContentExtractor::default().extract(html);
        assert_eq!(text, "From main");
    }

    #[test]
    fn test_article_beats_content_id() {
        let html = r#"<html><body><div id="content">By id</div><article>By article</article></body></html>"#;
        assert_eq!(ContentExtractor::default().extract(html), "By article");
    }

    #[test]
    fn test_content_class_beats_main_class() {
        let html = r#"<html><body><div class="main">Main class</div><div class="content">Content class</div><p>rest</p></body></html>"#;
        assert_eq!(ContentExtractor::default().extract(html), "Content class");
    }

    #[test]
    fn test_main_id_used_last() {
        let html = r#"<html><body><p>outside</p><section id="main">Inside</section></body></html>"#;
        assert_eq!(ContentExtractor::default().extract(html), "Inside");
    }

    #[test]
    fn test_all_matches_of_winning_selector() {
        let html = "<html><body><article>First</article><p>between</p><article>Second</article></body></html>";
        assert_eq!(ContentExtractor::default().extract(html), "First Second");
    }

    #[test]
    fn test_nested_matches_read_once() {
        let html = r#"<html><body><div class="content">Outer <div class="content">Inner</div></div></body></html>"#;
        assert_eq!(ContentExtractor::default().extract(html), "Outer Inner");
    }

    #[test]
    fn test_main_inside_excluded_is_ignored() {
        let html = "<html><body><header><main>Hidden main</main></header><article>Visible</article></body></html>";
        assert_eq!(ContentExtractor::default().extract(html), "Visible");
    }

    #[test]
    fn test_custom_selectors() {
        let extractor = ContentExtractor::new(&[".post"]).unwrap();
        let html = r#"<html><body><main>Main</main><div class="post">Post</div></body></html>"#;
        assert_eq!(extractor.extract(html), "Post");
    }

    #[test]
    fn test_invalid_selector_rejected() {
        assert!(ContentExtractor::new(&["div[["]).is_err());
    }
}

#[cfg(test)]
mod clean_html_tests {
    use super::*;

    #[test]
    fn test_attributes_stripped() {
        let html = r#"<html><body><main class="c" id="m" style="color:red" onclick="x()" onload="y()" data-keep="1"><a href="/a">link</a></main></body></html>"#;
        let cleaned = ContentExtractor::default().clean_html(html);
        for attr in ["class=", "id=", "style=", "onclick=", "onload="] {
            assert!(!cleaned.contains(attr), "{} survived in {}", attr, cleaned);
        }
        assert!(cleaned.contains(r#"data-keep="1""#));
        assert!(cleaned.contains(r#"<a href="/a">link</a>"#));
    }

    #[test]
    fn test_excluded_elements_removed() {
        let html = "<html><head><meta charset=\"utf-8\"><link rel=\"x\"><script>s()</script></head><body><nav>n</nav><p>p<br>q</p></body></html>";
        let cleaned = ContentExtractor::default().clean_html(html);
        assert_eq!(cleaned, "<html><head></head><body><p>p<br>q</p></body></html>");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = "<html><body><p>a &amp; b &lt;c&gt;</p></body></html>";
        let cleaned = ContentExtractor::default().clean_html(html);
        assert!(cleaned.contains("<p>a &amp; b &lt;c&gt;</p>"));
    }
}
