//! REST client for the outreach email draft backend.
//!
//! A minimal client for the drafting service: one endpoint,
//! `POST /api/generate-email`, which takes the sender profile plus the
//! scraped conference record and returns a drafted subject and body.
//!
//! # Example
//!
//! ```rust,ignore
//! use outreach_client::{GenerateEmailRequest, OutreachClient};
//!
//! let client = OutreachClient::new("http://localhost:8000".into());
//! let request = GenerateEmailRequest::new(profile, conference)
//!     .with_tone("friendly")
//!     .with_custom_notes("Met the program chair at ICSE last year.");
//! let draft = client.generate_email(&request).await?;
//! println!("Subject: {}", draft.subject);
//! ```

pub mod error;
pub mod types;

pub use error::{BackendError, Result};
pub use types::{DraftEmail, GenerateEmailRequest, Profile};

pub struct OutreachClient {
    client: reqwest::Client,
    base_url: String,
}

impl OutreachClient {
    /// Create a client for a backend at `base_url` (scheme + host, no
    /// trailing path).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the backend to draft an outreach email.
    ///
    /// One request, one response. Non-2xx responses are hard failures
    /// carrying the response body text.
    pub async fn generate_email(&self, request: &GenerateEmailRequest) -> Result<DraftEmail> {
        let url = format!("{}/api/generate-email", self.base_url);
        tracing::debug!(
            url = %url,
            opportunity_type = %request.opportunity_type,
            tone = %request.tone,
            "Requesting email draft"
        );

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let draft: DraftEmail = resp.json().await?;
        tracing::debug!(subject = %draft.subject, "Draft received");
        Ok(draft)
    }
}
