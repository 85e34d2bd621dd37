//! Chair/committee contact detection from `mailto:` links.

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::dom;
use crate::types::Contact;

/// Context keywords that qualify a `mailto:` link as a chair contact.
///
/// A plain `"chair"` already covers the chair variants; `"committee"` is
/// the only additional trigger. The list is kept as-is so each variant
/// could be narrowed independently later.
const CHAIR_KEYWORDS: &[&str] = &[
    "chair",
    "pc chair",
    "program chair",
    "track chair",
    "committee",
];

/// Find chair/committee contacts on the page.
///
/// Every `mailto:` link is inspected in document order. A link qualifies
/// when the text around it (innermost table row, else list item, else
/// the immediate parent, else the whole body) mentions a chair keyword
/// (case-insensitive). Qualifying contacts are deduplicated by email:
/// a later occurrence replaces the earlier one's fields but keeps the
/// earlier one's position.
pub fn find_contacts(document: &Html) -> Vec<Contact> {
    let Ok(selector) = Selector::parse(r#"a[href^="mailto:"]"#) else {
        return Vec::new();
    };

    let mut by_email: IndexMap<String, Contact> = IndexMap::new();

    for link in document.select(&selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let email = href
            .strip_prefix("mailto:")
            .unwrap_or(href)
            .trim()
            .to_string();
        if email.is_empty() {
            continue;
        }

        let link_text = dom::visible_text(link);
        let name = if link_text.trim().is_empty() {
            local_part(&email).to_string()
        } else {
            link_text.trim().to_string()
        };

        let context = context_text(document, link).to_lowercase();
        if !CHAIR_KEYWORDS
            .iter()
            .any(|keyword| context.contains(keyword))
        {
            continue;
        }

        by_email.insert(email.clone(), Contact::chair(name, email));
    }

    by_email.into_values().collect()
}

/// Local part of an email address (the whole address when there is no `@`).
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Text surrounding a link: innermost `tr`, else `li`, else the parent
/// element, else the document body.
fn context_text(document: &Html, link: ElementRef<'_>) -> String {
    if let Some(row) = dom::ancestor_with_tag(link, "tr") {
        return dom::visible_text(row);
    }
    if let Some(item) = dom::ancestor_with_tag(link, "li") {
        return dom::visible_text(item);
    }
    if let Some(parent) = dom::parent_element(link) {
        return dom::visible_text(parent);
    }
    dom::body_text(document)
}
