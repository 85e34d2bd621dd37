//! `Location:` / `Venue:` line spotting.

use std::sync::LazyLock;

use regex::Regex;

/// Labeled location line; the captured remainder stops at the newline.
static RE_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Location|Venue)\s*:\s*([^\n]+)").unwrap());

/// First `Location:`/`Venue:` line fragment in the text, trimmed.
///
/// Case-insensitive; `None` when no such label appears anywhere.
pub fn extract_location(text: &str) -> Option<String> {
    RE_LOCATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|rest| rest.as_str().trim().to_string())
}
