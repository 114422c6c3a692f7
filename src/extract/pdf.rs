//! PDF text extraction
//!
//! Downloads the document to a scoped temp file and extracts text in page
//! order. The temp file is removed when the handle drops, including when
//! extraction fails on a malformed body.

use crate::config::FetchConfig;
use crate::extract::download::download_to_temp;
use crate::{ExtractError, ExtractResult};
use reqwest::Client;
use url::Url;

/// Downloads and extracts text from a PDF document
pub async fn extract_pdf(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<String> {
    let file = download_to_temp(client, config, url, "pdf").await?;

    pdf_extract::extract_text(file.path()).map_err(|e| ExtractError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_malformed_pdf_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not a pdf".to_vec()))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/broken.pdf", server.uri())).unwrap();
        let result = extract_pdf(&Client::new(), &FetchConfig::default(), &url).await;
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_download_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/secret.pdf"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/secret.pdf", server.uri())).unwrap();
        let result = extract_pdf(&Client::new(), &FetchConfig::default(), &url).await;
        assert!(matches!(result, Err(ExtractError::HttpStatus { .. })));
    }
}
