//! Calendar-date spotting in page text.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::MAX_DATES;

/// `<Month> <day>[,] <year>` with capitalized English month names and
/// abbreviations. Lexical only: no calendar validation, no locales.
static RE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{1,2},?\s+\d{4}\b",
    )
    .unwrap()
});

/// Scan text left to right for date-like substrings.
///
/// Matches are non-overlapping, deduplicated to their first occurrence
/// with order preserved, and capped at [`MAX_DATES`] distinct entries.
/// Returns `None` when the text contains no match at all.
pub fn extract_dates(text: &str) -> Option<Vec<String>> {
    let mut dates: Vec<String> = Vec::new();
    for found in RE_DATE.find_iter(text) {
        let date = found.as_str();
        if dates.iter().any(|seen| seen == date) {
            continue;
        }
        dates.push(date.to_string());
        if dates.len() == MAX_DATES {
            break;
        }
    }

    if dates.is_empty() {
        None
    } else {
        Some(dates)
    }
}
