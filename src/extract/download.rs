//! Bounded-timeout document downloads
//!
//! Documents get a longer timeout than pages (binary bodies are larger), set
//! per request on top of the shared client. Binary downloads land in a named
//! temporary file carrying the source format's extension; the file is
//! deleted when the handle drops, on every exit path including parse errors.

use crate::config::FetchConfig;
use crate::{ExtractError, ExtractResult};
use reqwest::Client;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use url::Url;

fn network_error(url: &Url, e: reqwest::Error) -> ExtractError {
    if e.is_timeout() {
        ExtractError::Timeout {
            url: url.to_string(),
        }
    } else {
        ExtractError::Network {
            url: url.to_string(),
            source: e,
        }
    }
}

async fn send_request(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<reqwest::Response> {
    let response = client
        .get(url.as_str())
        .timeout(Duration::from_secs(config.document_timeout_secs))
        .send()
        .await
        .map_err(|e| network_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Downloads a document body into a scoped temporary file
///
/// # Arguments
///
/// * `extension` - File extension for the temp file, without the dot
///   (some parsers key on it)
///
/// # Returns
///
/// The temp file handle; the file is removed when the handle drops.
pub async fn download_to_temp(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
    extension: &str,
) -> ExtractResult<NamedTempFile> {
    let response = send_request(client, config, url).await?;
    let bytes = response.bytes().await.map_err(|e| network_error(url, e))?;

    let mut file = tempfile::Builder::new()
        .prefix("magpie-")
        .suffix(&format!(".{}", extension))
        .tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;

    Ok(file)
}

/// Downloads a document body as decoded text (for .txt documents)
pub async fn download_string(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<String> {
    let response = send_request(client, config, url).await?;
    response.text().await.map_err(|e| network_error(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_to_temp_writes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 data".to_vec()))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/doc.pdf", server.uri())).unwrap();
        let file = download_to_temp(&Client::new(), &FetchConfig::default(), &url, "pdf")
            .await
            .unwrap();

        let contents = std::fs::read(file.path()).unwrap();
        assert_eq!(contents, b"%PDF-1.4 data");
        assert!(file.path().to_string_lossy().ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_temp_file_removed_on_drop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.docx"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data".to_vec()))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/doc.docx", server.uri())).unwrap();
        let file = download_to_temp(&Client::new(), &FetchConfig::default(), &url, "docx")
            .await
            .unwrap();

        let temp_path = file.path().to_path_buf();
        assert!(temp_path.exists());
        drop(file);
        assert!(!temp_path.exists());
    }

    #[tokio::test]
    async fn test_download_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notes.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("note body"))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/notes.txt", server.uri())).unwrap();
        let text = download_string(&Client::new(), &FetchConfig::default(), &url)
            .await
            .unwrap();
        assert_eq!(text, "note body");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.pdf"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/gone.pdf", server.uri())).unwrap();
        let result = download_to_temp(&Client::new(), &FetchConfig::default(), &url, "pdf").await;
        assert!(matches!(
            result,
            Err(ExtractError::HttpStatus { status: 404, .. })
        ));
    }
}
