//! The heuristic finders and their composition.
//!
//! Each finder is a pure function over the document snapshot or its
//! rendered text. They are deliberately naive: substring and regex
//! matching tuned for typical CFP pages, not a parser of anything.

mod contacts;
mod dates;
mod location;
mod title;

pub use contacts::find_contacts;
pub use dates::extract_dates;
pub use location::extract_location;
pub use title::guess_title;

use scraper::Html;
use tracing::debug;

use crate::dom;
use crate::types::{ConferenceInfo, PAGE_SUMMARY_MAX_CHARS};

/// Run every finder over one document snapshot.
///
/// Best-effort by construction: a page that yields nothing produces an
/// empty record, not an error. `url` is carried through untouched.
pub fn scrape_document(document: &Html, url: &str) -> ConferenceInfo {
    let title = guess_title(document);
    let body = dom::body_text(document);

    let dates = extract_dates(&body).unwrap_or_default();
    let location = extract_location(&body);
    let chairs = find_contacts(document);

    debug!(
        url = %url,
        dates = dates.len(),
        chairs = chairs.len(),
        has_location = location.is_some(),
        "Scraped conference page"
    );

    ConferenceInfo {
        url: url.to_string(),
        title,
        dates,
        location,
        chairs,
        page_summary: truncate_chars(&body, PAGE_SUMMARY_MAX_CHARS),
    }
}

/// Truncate to a character count (not bytes, not word boundaries).
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4).chars().count(), 4);
        assert_eq!(truncate_chars(&text, 10), text);
        assert_eq!(truncate_chars(&text, 20), text);
    }

    #[test]
    fn test_scrape_empty_document() {
        let document = Html::parse_document("<html><body></body></html>");
        let info = scrape_document(&document, "https://example.org");

        assert_eq!(info.url, "https://example.org");
        assert_eq!(info.title, "");
        assert!(info.dates.is_empty());
        assert_eq!(info.location, None);
        assert!(info.chairs.is_empty());
        assert_eq!(info.page_summary, "");
    }
}
