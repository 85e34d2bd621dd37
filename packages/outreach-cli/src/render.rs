//! Terminal rendering of scraped records and drafts.

use colored::Colorize;
use conference_scraper::ConferenceInfo;
use outreach_client::DraftEmail;

/// Print the scan summary: title badge, then one line per known fact.
pub fn print_conference(info: &ConferenceInfo) {
    let title: &str = if info.title.is_empty() {
        "Unknown conference"
    } else {
        &info.title
    };
    println!("{}", title.bold());

    if let Some(location) = &info.location {
        println!("Location: {}", location);
    }
    if !info.dates.is_empty() {
        println!("Dates: {}", info.dates.join(", "));
    }
    println!("URL: {}", info.url);
    if !info.chairs.is_empty() {
        let chairs = info
            .chairs
            .iter()
            .map(|c| format!("{} <{}>", c.name, c.email))
            .collect::<Vec<_>>()
            .join("; ");
        println!("Chairs detected: {}", chairs);
    }
}

/// Print a draft ready to paste into a mail client.
pub fn print_draft(draft: &DraftEmail, to: &str) {
    println!();
    if !to.is_empty() {
        println!("{} {}", "To:".bold(), to);
    }
    println!("{} {}", "Subject:".bold(), draft.subject);
    println!();
    println!("{}", draft.body);
}

/// Gmail compose URL with to/subject/body encoded into the query string.
pub fn gmail_compose_url(to: &str, subject: &str, body: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("to", to)
        .append_pair("su", subject)
        .append_pair("body", body)
        .finish();
    format!("https://mail.google.com/mail/?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmail_compose_url_encodes_fields() {
        let url = gmail_compose_url("ada@conf.org", "Reviewer interest", "Dear chairs,\nhello");
        assert!(url.starts_with("https://mail.google.com/mail/?"));
        assert!(url.contains("to=ada%40conf.org"));
        assert!(url.contains("su=Reviewer+interest"));
        assert!(url.contains("body=Dear+chairs%2C%0Ahello"));
    }
}
