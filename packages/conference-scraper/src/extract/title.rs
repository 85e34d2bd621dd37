//! Title guessing: heading first, then OpenGraph, then `<title>`.

use scraper::{Html, Selector};

use crate::dom;

/// Guess the conference title or acronym.
///
/// Tries the first non-empty `h1`, then the `content` attribute of
/// `meta[property="og:title"]` when non-empty after trimming, then the
/// document title. Never fails; returns an empty string when the page
/// provides nothing at all.
pub fn guess_title(document: &Html) -> String {
    if let Some(heading) = dom::first_non_empty_text(document, &["h1"]) {
        return heading;
    }

    if let Some(og_title) = og_title(document) {
        return og_title;
    }

    document_title(document).unwrap_or_default()
}

fn og_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

fn document_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h1_wins() {
        let document = Html::parse_document(
            r#"<html><head><title>T</title><meta property="og:title" content="OG"></head>
               <body><h1> ICSE 2026 </h1></body></html>"#,
        );
        assert_eq!(guess_title(&document), "ICSE 2026");
    }

    #[test]
    fn test_og_title_fallback() {
        let document = Html::parse_document(
            r#"<html><head><title>T</title><meta property="og:title" content=" OG Title "></head>
               <body><h1>   </h1></body></html>"#,
        );
        assert_eq!(guess_title(&document), "OG Title");
    }

    #[test]
    fn test_empty_og_title_skipped() {
        let document = Html::parse_document(
            r#"<html><head><title>T</title><meta property="og:title" content="  "></head>
               <body></body></html>"#,
        );
        assert_eq!(guess_title(&document), "T");
    }

    #[test]
    fn test_document_title_last_resort() {
        let document =
            Html::parse_document("<html><head><title>T</title></head><body></body></html>");
        assert_eq!(guess_title(&document), "T");
    }

    #[test]
    fn test_nothing_at_all() {
        let document = Html::parse_document("<html><body></body></html>");
        assert_eq!(guess_title(&document), "");
    }
}
