use once_cell::sync::Lazy;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Containers tried in priority order when isolating the main content of a
/// page. `body` is the last resort when no semantic container yields text.
const CANDIDATE_SELECTORS: [&str; 8] = [
    "article",
    "main",
    "[role='main']",
    "#content",
    ".post-content",
    ".article-content",
    ".entry-content",
    "body",
];

/// Subtrees that never contribute readable text: page chrome, embeds and
/// executable content.
const SKIP_TAGS: [&str; 11] = [
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside", "form",
    "iframe", "svg",
];

static CANDIDATES: Lazy<Vec<Selector>> = Lazy::new(|| {
    CANDIDATE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

/// Readability-style reduction of an HTML document to plain text.
///
/// Picks the first candidate container that yields any text, drops chrome
/// subtrees, collapses whitespace runs to single spaces and trims. An empty
/// or content-free document yields the empty string.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    for selector in CANDIDATES.iter() {
        let mut raw = String::new();
        for element in document.select(selector) {
            collect_text(element, &mut raw);
        }
        let text = collapse_whitespace(&raw);
        if !text.is_empty() {
            return text;
        }
    }
    String::new()
}

fn collect_text(element: ElementRef, out: &mut String) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
