//! Heuristic conference page scraper.
//!
//! Pulls best-effort metadata (title, dates, location, chair contacts) out
//! of a conference or CFP web page. The heuristics are deliberately naive
//! pattern matching over rendered text and link structure. They work well
//! on typical CFP pages and fail soft everywhere else: an absent field is
//! reported as empty, never as an error.
//!
//! The document snapshot is a [`scraper::Html`] owned by the caller; every
//! extractor borrows it read-only and performs no I/O. The only
//! network-touching piece is [`PageFetcher`], which turns a URL into a
//! snapshot.
//!
//! # Usage
//!
//! ```rust,ignore
//! use conference_scraper::{scrape_document, PageFetcher};
//! use scraper::Html;
//!
//! // From HTML you already have:
//! let document = Html::parse_document(&html);
//! let info = scrape_document(&document, "https://icse2026.example.org");
//!
//! // Or fetch and extract in one round trip:
//! let fetcher = PageFetcher::new();
//! let info = fetcher.scrape("icse2026.example.org").await?;
//! ```

pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod types;

pub use error::{Result, ScrapeError};
pub use extract::{extract_dates, extract_location, find_contacts, guess_title, scrape_document};
pub use fetch::PageFetcher;
pub use types::{ConferenceInfo, Contact, FetchedPage, MAX_DATES, PAGE_SUMMARY_MAX_CHARS};
