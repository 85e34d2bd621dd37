//! Conference record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of distinct date strings kept per page.
pub const MAX_DATES: usize = 4;

/// Maximum length of the page summary, in characters.
pub const PAGE_SUMMARY_MAX_CHARS: usize = 8000;

/// Best-effort facts extracted from one conference page.
///
/// Constructed fresh per extraction, consumed once, never persisted.
/// Every field is optional in spirit: an empty title, empty date list or
/// missing location is valid output, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceInfo {
    /// URL the page was scraped from
    pub url: String,

    /// Conference title or acronym, empty when the page provides nothing
    pub title: String,

    /// Distinct date strings in order of first appearance, at most [`MAX_DATES`]
    #[serde(default)]
    pub dates: Vec<String>,

    /// Trailing fragment of the first `Location:`/`Venue:` line, if any
    pub location: Option<String>,

    /// Chair/committee contacts, one per distinct email
    #[serde(default)]
    pub chairs: Vec<Contact>,

    /// Visible body text truncated to [`PAGE_SUMMARY_MAX_CHARS`]
    #[serde(rename = "pageSummary")]
    pub page_summary: String,
}

/// A person reachable via a `mailto:` link on the page.
///
/// At most one contact per distinct email address in a given record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Contact {
    /// Create a chair contact. The role is always the literal `"chair"`;
    /// the keyword heuristics do not distinguish chair flavors.
    pub fn chair(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: "chair".to_string(),
        }
    }
}

/// A raw page as fetched, before parsing into a document snapshot.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,

    /// Raw response body
    pub html: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}
