use crate::parsers::{ParseResult, text};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start on a new line when rendered
const BLOCK_ELEMENTS: [&str; 37] = [
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td",
    "th", "title", "tr", "ul",
];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Parses an HTML document and extracts its on-page SEO signals
pub fn parse(html: &str) -> ParseResult {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();

    let meta_description = doc
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|e| e.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    let h1_tags = doc
        .select(&H1)
        .map(|e| e.text().collect::<String>())
        .collect::<Vec<String>>();

    let images = doc
        .select(&IMG)
        .filter_map(|e| e.value().attr("src"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    let word_count = text::count_words(&visible_text(&doc));

    ::log::debug!(
        "HTML parser found {} h1 tags and {} images",
        h1_tags.len(),
        images.len()
    );

    ParseResult {
        title,
        meta_description,
        h1_tags,
        images,
        word_count,
    }
}

/// Collects the document's readable text, skipping script and style content.
///
/// Text nodes are concatenated as-is, so inline markup inside a word
/// (`H<sub>2</sub>O`) keeps it whole. Block elements are separated by a space.
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    collect_text(doc.root_element(), &mut out);
    text::normalize_whitespace(&out)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if HIDDEN_ELEMENTS.contains(&name) {
        return;
    }

    let block = BLOCK_ELEMENTS.contains(&name);
    if block {
        out.push(' ');
    }
    for child in element.children() {
        if let Node::Text(text) = child.value() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            collect_text(child, out);
        }
    }
    if block {
        out.push(' ');
    }
}
