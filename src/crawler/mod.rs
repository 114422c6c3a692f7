//! Crawler module for first-stage page fetching
//!
//! This module contains the per-URL crawl step, including:
//! - HTTP fetching and content-type classification
//! - HTML parsing for visible text and document links
//! - The never-failing `crawl_page` composition

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use parser::{has_document_extension, parse_page, ParsedPage, DOCUMENT_EXTENSIONS};

use reqwest::Client;
use url::Url;

/// Result of crawling one seed URL
///
/// Immutable once returned. `document_links` are resolved against the page's
/// base URL and deduplicated, in first-seen order.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// The URL that was crawled
    pub source_url: Url,

    /// Visible page text; empty on any failure
    pub page_text: String,

    /// Links to downloadable documents found on the page
    pub document_links: Vec<Url>,
}

impl CrawlResult {
    fn empty(source_url: Url) -> Self {
        Self {
            source_url,
            page_text: String::new(),
            document_links: Vec::new(),
        }
    }
}

/// Crawls a single URL: fetch, classify, and parse
///
/// This function never fails. On any network, timeout, status, or parse
/// error it logs the condition and returns a `CrawlResult` with empty text
/// and no links, so one bad URL never disturbs its siblings.
///
/// Classification of the response:
/// - office/PDF MIME family: the URL itself is the document; it is returned
///   as the single document link and extraction happens downstream
/// - plain text: the body is the page text
/// - anything else: parsed as HTML for visible text and document links
pub async fn crawl_page(client: &Client, url: &Url) -> CrawlResult {
    tracing::info!("Crawling {}", url);

    match fetch_page(client, url.as_str()).await {
        FetchOutcome::Html { body } => {
            let parsed = parse_page(&body, url);
            tracing::debug!(
                "Parsed {}: {} chars of text, {} document links",
                url,
                parsed.text.len(),
                parsed.document_links.len()
            );
            CrawlResult {
                source_url: url.clone(),
                page_text: parsed.text,
                document_links: parsed.document_links,
            }
        }
        FetchOutcome::PlainText { body } => CrawlResult {
            source_url: url.clone(),
            page_text: body,
            document_links: Vec::new(),
        },
        FetchOutcome::DirectDocument => {
            tracing::debug!("{} is a direct document, deferring to extractor", url);
            CrawlResult {
                source_url: url.clone(),
                page_text: String::new(),
                document_links: vec![url.clone()],
            }
        }
        FetchOutcome::HttpError { status } => {
            tracing::warn!("HTTP {} fetching {}", status, url);
            CrawlResult::empty(url.clone())
        }
        FetchOutcome::NetworkError { error, timed_out } => {
            if timed_out {
                tracing::warn!("Timeout fetching {}", url);
            } else {
                tracing::warn!("Network error fetching {}: {}", url, error);
            }
            CrawlResult::empty(url.clone())
        }
    }
}
