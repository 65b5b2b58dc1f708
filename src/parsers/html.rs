use crate::error::ConfigError;
use crate::parsers::text;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose whole subtree is dropped before any text is read
pub const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "iframe", "noscript", "meta", "link",
];

/// Attributes removed from every element in the cleaned HTML
pub const STRIPPED_ATTRIBUTES: &[&str] = &["class", "id", "style", "onclick", "onload"];

/// Main content selectors, highest priority first
pub const DEFAULT_MAIN_SELECTORS: &[&str] =
    &["main", "article", ".content", "#content", ".main", "#main"];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Extracts the readable main content of an HTML page
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    selectors: Vec<Selector>,
    body: Selector,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAIN_SELECTORS).expect("Default content selectors should be valid")
    }
}

impl ContentExtractor {
    /// Create an extractor that tries `selectors` in order before falling back to `<body>`
    pub fn new<S: AsRef<str>>(selectors: &[S]) -> Result<Self, ConfigError> {
        let selectors = selectors
            .iter()
            .map(|s| parse_selector(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            selectors,
            body: parse_selector("body")?,
        })
    }

    /// Returns the normalized text of the page's main content region
    ///
    /// The first selector matching anything wins; all of its outermost
    /// matches contribute, in document order. A page with nothing readable
    /// yields an empty string.
    pub fn extract(&self, html: &str) -> String {
        let doc = parse_pruned(html);
        let regions = self.main_region(&doc);

        let mut buf = String::new();
        for region in regions {
            for node in region.descendants() {
                if let Some(fragment) = node.value().as_text() {
                    text::push_fragment(&mut buf, fragment);
                }
            }
        }

        text::normalize_whitespace(&buf)
    }

    /// Serializes the pruned document with cosmetic and handler attributes removed
    pub fn clean_html(&self, html: &str) -> String {
        let doc = parse_pruned(html);
        let mut out = String::with_capacity(html.len());
        write_element(doc.root_element(), &mut out);
        out
    }

    fn main_region<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        let root = doc.root_element();

        for selector in &self.selectors {
            let matches: Vec<ElementRef<'a>> = root.select(selector).collect();
            if !matches.is_empty() {
                ::log::trace!("Main content matched {} node(s)", matches.len());
                return outermost(matches);
            }
        }

        ::log::trace!("No main content selector matched, using <body>");
        root.select(&self.body).take(1).collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::Selector(selector.to_string()))
}

/// Parses the document and detaches every excluded subtree
fn parse_pruned(html: &str) -> Html {
    let mut doc = Html::parse_document(html);

    let excluded: Vec<_> = doc
        .tree
        .nodes()
        .filter(|node| {
            matches!(node.value(), Node::Element(el) if EXCLUDED_TAGS.contains(&el.name()))
        })
        .map(|node| node.id())
        .collect();

    for id in excluded {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    doc
}

/// Drops matches nested inside another match so no text is read twice
fn outermost(matches: Vec<ElementRef<'_>>) -> Vec<ElementRef<'_>> {
    matches
        .iter()
        .filter(|el| {
            !el.ancestors()
                .any(|ancestor| matches.iter().any(|other| other.id() == ancestor.id()))
        })
        .copied()
        .collect()
}

fn write_element(el: ElementRef<'_>, out: &mut String) {
    let name = el.value().name();

    out.push('<');
    out.push_str(name);
    for (attr, value) in el.value().attrs() {
        if STRIPPED_ATTRIBUTES.contains(&attr) {
            continue;
        }
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape(value, true));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&escape(t, false)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    write_element(child_el, out);
                }
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape(s: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' if !attribute => escaped.push_str("&lt;"),
            '>' if !attribute => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
