//! Wire types for the draft backend contract.
//!
//! Field names mirror the backend exactly: the profile block is
//! camelCase, the request envelope is snake_case.

use conference_scraper::ConferenceInfo;
use serde::{Deserialize, Serialize};

/// Sender identity, forwarded verbatim inside the request envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "fullName", default)]
    pub full_name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub affiliation: String,

    #[serde(rename = "shortBio", default)]
    pub short_bio: String,

    /// Comma-separated expertise keywords
    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub email: String,

    /// Base URL of the draft backend; not used server-side
    #[serde(rename = "backendUrl", default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
}

/// Envelope for `POST /api/generate-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateEmailRequest {
    pub profile: Profile,
    pub conference: ConferenceInfo,
    pub opportunity_type: String,
    pub tone: String,
    #[serde(default)]
    pub custom_notes: String,
}

impl GenerateEmailRequest {
    /// Request with the default opportunity type (`reviewer`) and tone
    /// (`professional`).
    pub fn new(profile: Profile, conference: ConferenceInfo) -> Self {
        Self {
            profile,
            conference,
            opportunity_type: "reviewer".to_string(),
            tone: "professional".to_string(),
            custom_notes: String::new(),
        }
    }

    /// Set the opportunity to ask about (reviewer, speaker, judge, ...).
    pub fn with_opportunity_type(mut self, opportunity_type: impl Into<String>) -> Self {
        self.opportunity_type = opportunity_type.into();
        self
    }

    /// Set the tone of the draft (professional, friendly, formal).
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Add free-form notes for the draft to emphasize.
    pub fn with_custom_notes(mut self, notes: impl Into<String>) -> Self {
        self.custom_notes = notes.into();
        self
    }
}

/// A drafted outreach email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEmail {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conference() -> ConferenceInfo {
        ConferenceInfo {
            url: "https://quest.example.org".to_string(),
            title: "QUEST 2026".to_string(),
            dates: vec!["May 18, 2026".to_string()],
            location: Some("Valencia, Spain".to_string()),
            chairs: vec![],
            page_summary: String::new(),
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let profile = Profile {
            full_name: "Ada Lovelace".to_string(),
            short_bio: "Analyst".to_string(),
            backend_url: Some("http://localhost:8000".to_string()),
            ..Default::default()
        };
        let request = GenerateEmailRequest::new(profile, sample_conference())
            .with_tone("friendly")
            .with_custom_notes("met at ICSE");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["profile"]["fullName"], "Ada Lovelace");
        assert_eq!(value["profile"]["shortBio"], "Analyst");
        assert_eq!(value["profile"]["backendUrl"], "http://localhost:8000");
        assert_eq!(value["opportunity_type"], "reviewer");
        assert_eq!(value["tone"], "friendly");
        assert_eq!(value["custom_notes"], "met at ICSE");
        assert_eq!(value["conference"]["pageSummary"], "");
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"fullName":"Ada"}"#).unwrap();
        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.affiliation, "");
        assert_eq!(profile.backend_url, None);
    }

    #[test]
    fn test_draft_parses() {
        let draft: DraftEmail =
            serde_json::from_str(r#"{"subject":"Hello","body":"Dear chairs"}"#).unwrap();
        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.body, "Dear chairs");
    }
}
