//! Read-only helpers over a parsed document snapshot.
//!
//! The snapshot is a [`scraper::Html`] owned by the caller; everything
//! here borrows it and performs selector lookups, attribute reads and
//! ancestor traversal only.

use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose text never renders.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Tags that end a line in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Try each selector in order and return the trimmed text of the first
/// matching node whose trimmed text is non-empty.
///
/// Only the first node matching each selector is considered, and a
/// whitespace-only match counts as no match. First match wins, not best
/// match. Selectors that fail to parse are skipped.
pub fn first_non_empty_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = visible_text(element);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Approximate the rendered text of an element.
///
/// Depth-first walk collecting text nodes, skipping non-rendered tags,
/// inserting line breaks at block boundaries and `<br>`, then collapsing
/// blank lines and trimming horizontal whitespace per line.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    tidy_lines(&raw)
}

/// Visible text of the document body, or of the whole document when a
/// page somehow has no body element.
pub fn body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    match document.select(&selector).next() {
        Some(body) => visible_text(body),
        None => visible_text(document.root_element()),
    }
}

/// Innermost ancestor element with the given tag name.
pub fn ancestor_with_tag<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}

/// Immediate parent element, if any.
pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }
    if tag == "br" {
        out.push('\n');
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
    if BLOCK_TAGS.contains(&tag) && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Trim each line and collapse runs of blank lines.
fn tidy_lines(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }
    lines.join("\n").trim().to_string()
}
