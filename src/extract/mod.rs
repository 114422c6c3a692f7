//! Document extraction module
//!
//! Converts downloaded office/PDF/text files into plain text. Dispatch is
//! driven purely by the URL path suffix, case-insensitive, with no content
//! sniffing. This route is deliberately independent of the crawler's MIME
//! classification: a URL served with a document MIME type but carrying no
//! recognized suffix reaches this dispatcher and classifies as `Unknown`,
//! contributing nothing. The two routes are not reconciled and neither takes
//! priority over the other.
//!
//! Every extractor fails soft: download and parse errors are logged and the
//! document contributes an empty string, never an aborted pipeline.

mod docx;
mod download;
mod ooxml;
mod pdf;
mod pptx;
mod xlsx;

pub use download::{download_string, download_to_temp};

use crate::config::FetchConfig;
use crate::ExtractError;
use reqwest::Client;
use url::Url;

/// Document format derived from a URL's path suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Xlsx,
    Pptx,
    Txt,
    /// Legacy binary Office container (.doc, .xls, .ppt) - out of scope
    Unsupported,
    /// Suffix not recognized; extraction yields nothing
    Unknown,
}

impl DocumentKind {
    /// Classifies a URL by its path suffix, case-insensitive
    pub fn from_url(url: &Url) -> Self {
        let path = url.path().to_ascii_lowercase();

        if path.ends_with(".pdf") {
            Self::Pdf
        } else if path.ends_with(".docx") {
            Self::Docx
        } else if path.ends_with(".xlsx") {
            Self::Xlsx
        } else if path.ends_with(".pptx") {
            Self::Pptx
        } else if path.ends_with(".txt") {
            Self::Txt
        } else if path.ends_with(".doc") || path.ends_with(".xls") || path.ends_with(".ppt") {
            Self::Unsupported
        } else {
            Self::Unknown
        }
    }
}

/// Downloads and extracts text from a document URL
///
/// Dispatches on the URL suffix and degrades every failure to an empty
/// string, logging the reason. The returned text may be empty to signal
/// "extraction failed or yielded nothing" - never an error.
pub async fn extract_document(client: &Client, config: &FetchConfig, url: &Url) -> String {
    let kind = DocumentKind::from_url(url);
    tracing::info!("Extracting {:?} from {}", kind, url);

    let result = match kind {
        DocumentKind::Pdf => pdf::extract_pdf(client, config, url).await,
        DocumentKind::Docx => docx::extract_docx(client, config, url).await,
        DocumentKind::Xlsx => xlsx::extract_xlsx(client, config, url).await,
        DocumentKind::Pptx => pptx::extract_pptx(client, config, url).await,
        DocumentKind::Txt => download::download_string(client, config, url).await,
        DocumentKind::Unsupported => Err(ExtractError::Unsupported {
            url: url.to_string(),
            extension: legacy_extension(url).to_string(),
        }),
        DocumentKind::Unknown => return String::new(),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Extraction failed, skipping document: {}", e);
            String::new()
        }
    }
}

fn legacy_extension(url: &Url) -> &'static str {
    let path = url.path().to_ascii_lowercase();
    if path.ends_with(".doc") {
        "doc"
    } else if path.ends_with(".xls") {
        "xls"
    } else {
        "ppt"
    }
}
