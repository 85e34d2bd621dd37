//! End-to-end extraction over a realistic CFP page.

use conference_scraper::{scrape_document, Contact, PAGE_SUMMARY_MAX_CHARS};
use scraper::Html;

const CFP_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>QUEST 2026 | Home</title>
  <meta property="og:title" content="QUEST 2026 | Intl. Conference on Software Quality">
  <style>.hero { color: red; }</style>
</head>
<body>
  <script>window.analytics = "tracker";</script>
  <h1>QUEST 2026</h1>
  <p>The 14th International Conference on Software Quality.</p>
  <p>Location: Valencia, Spain</p>
  <p>Conference dates: May 18, 2026 &ndash; May 21, 2026. Abstracts due
     Jan 9, 2026; full papers due Jan 16, 2026; notification Mar 2, 2026.</p>
  <h2>Organizing Committee</h2>
  <table>
    <tr>
      <td>General Chair</td>
      <td><a href="mailto:m.rossi@quest.example.org">Maria Rossi</a></td>
    </tr>
    <tr>
      <td>Program Chair</td>
      <td><a href="mailto:j.tanaka@quest.example.org"></a></td>
    </tr>
    <tr>
      <td>Publicity</td>
      <td><a href="mailto:press@quest.example.org">Press Office</a></td>
    </tr>
  </table>
  <p>General inquiries: <a href="mailto:m.rossi@quest.example.org">Maria</a></p>
</body>
</html>"#;

#[test]
fn test_scrape_cfp_page() {
    let document = Html::parse_document(CFP_HTML);
    let info = scrape_document(&document, "https://quest.example.org/2026");

    assert_eq!(info.url, "https://quest.example.org/2026");
    assert_eq!(info.title, "QUEST 2026");
    assert_eq!(info.location, Some("Valencia, Spain".to_string()));

    // Five date strings on the page, all distinct: capped at four.
    assert_eq!(
        info.dates,
        vec!["May 18, 2026", "May 21, 2026", "Jan 9, 2026", "Jan 16, 2026"]
    );

    // The publicity address has no chair keyword in its row, and the
    // trailing "general inquiries" duplicate has none either, so the
    // qualifying chair entry survives untouched. The program chair link
    // has no text, so the name falls back to the local part.
    assert_eq!(
        info.chairs,
        vec![
            Contact::chair("Maria Rossi", "m.rossi@quest.example.org"),
            Contact::chair("j.tanaka", "j.tanaka@quest.example.org"),
        ]
    );

    // Script and style content never reaches the summary.
    assert!(!info.page_summary.contains("tracker"));
    assert!(!info.page_summary.contains(".hero"));
    assert!(info.page_summary.contains("International Conference"));
}

#[test]
fn test_summary_truncated_to_limit() {
    let filler = "x".repeat(PAGE_SUMMARY_MAX_CHARS + 1000);
    let html = format!("<html><body><p>{}</p></body></html>", filler);
    let document = Html::parse_document(&html);

    let info = scrape_document(&document, "https://example.org");
    assert_eq!(info.page_summary.chars().count(), PAGE_SUMMARY_MAX_CHARS);
}

#[test]
fn test_short_summary_untouched() {
    let document = Html::parse_document("<html><body><p>short page</p></body></html>");
    let info = scrape_document(&document, "https://example.org");
    assert_eq!(info.page_summary, "short page");
}

#[test]
fn test_record_serializes_for_the_backend() {
    let document = Html::parse_document(CFP_HTML);
    let info = scrape_document(&document, "https://quest.example.org/2026");

    let value = serde_json::to_value(&info).unwrap();
    assert!(value["pageSummary"].is_string());
    assert_eq!(value["chairs"][0]["role"], "chair");
    assert_eq!(value["dates"].as_array().unwrap().len(), 4);
}
