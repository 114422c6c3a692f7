//! HTTP fetcher implementation
//!
//! This module handles the first-stage page fetch for the crawler:
//! - Building the shared HTTP client with the browser user agent
//! - GET requests with a bounded timeout
//! - Content-Type classification (document / plain text / HTML)
//! - Error classification into a typed outcome

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;

/// MIME families that mark a URL as a direct document rather than a page.
///
/// Matching is substring-based on the lowercased Content-Type header, so
/// parameters like charset do not interfere.
const DOCUMENT_MIME_FAMILIES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument",
    "application/msword",
];

/// Result of a page fetch, classified by the response's declared content type
#[derive(Debug)]
pub enum FetchOutcome {
    /// An HTML page body to be parsed for text and document links
    Html { body: String },

    /// A plain-text body; used verbatim as page text, no links
    PlainText { body: String },

    /// The URL itself points at an office/PDF document (MIME family match).
    /// Extraction is deferred to the document extractors.
    DirectDocument,

    /// Non-2xx response
    HttpError { status: u16 },

    /// Network-level failure (timeout, connection refused, TLS, body read)
    NetworkError { error: String, timed_out: bool },
}

/// Builds the HTTP client shared by page fetches and document downloads
///
/// The client carries the configured user agent and the page timeout as its
/// default; document downloads override the timeout per request.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.page_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the response
///
/// # Classification
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | office/PDF MIME family | `DirectDocument` |
/// | `text/plain` | `PlainText` |
/// | anything else 2xx | `Html` |
/// | non-2xx status | `HttpError` |
/// | timeout / connect / body error | `NetworkError` |
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::NetworkError {
                error: e.to_string(),
                timed_out: e.is_timeout(),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            status: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if DOCUMENT_MIME_FAMILIES
        .iter()
        .any(|family| content_type.contains(family))
    {
        return FetchOutcome::DirectDocument;
    }

    let is_plain_text = content_type.contains("text/plain");

    match response.text().await {
        Ok(body) if is_plain_text => FetchOutcome::PlainText { body },
        Ok(body) => FetchOutcome::Html { body },
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
            timed_out: e.is_timeout(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> Client {
        build_http_client(&FetchConfig::default()).unwrap()
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&FetchConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_html_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html><body>hi</body></html>", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let outcome = fetch_page(&test_client(), &format!("{}/page", server.uri())).await;
        assert!(matches!(outcome, FetchOutcome::Html { .. }));
    }

    #[tokio::test]
    async fn test_fetch_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notes.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("raw notes", "text/plain"))
            .mount(&server)
            .await;

        let outcome = fetch_page(&test_client(), &format!("{}/notes.txt", server.uri())).await;
        match outcome {
            FetchOutcome::PlainText { body } => assert_eq!(body, "raw notes"),
            other => panic!("expected PlainText, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_direct_pdf() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/report"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
            )
            .mount(&server)
            .await;

        let outcome = fetch_page(&test_client(), &format!("{}/report", server.uri())).await;
        assert!(matches!(outcome, FetchOutcome::DirectDocument));
    }

    #[tokio::test]
    async fn test_fetch_direct_docx_mime() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/minutes"))
            .respond_with(ResponseTemplate::new(200).insert_header(
                "content-type",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ))
            .mount(&server)
            .await;

        let outcome = fetch_page(&test_client(), &format!("{}/minutes", server.uri())).await;
        assert!(matches!(outcome, FetchOutcome::DirectDocument));
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let outcome = fetch_page(&test_client(), &format!("{}/missing", server.uri())).await;
        match outcome {
            FetchOutcome::HttpError { status } => assert_eq!(status, 404),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Nothing listens on this port
        let outcome = fetch_page(&test_client(), "http://127.0.0.1:1/").await;
        assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    }
}
