//! Magpie-Harvest: a document-hoarding web scraper
//!
//! This crate crawls a set of seed URLs, extracts visible page text and text
//! embedded in linked office documents (PDF, DOCX, XLSX, PPTX, TXT), cleans
//! it up, and aggregates everything into a single JSON corpus.

pub mod config;
pub mod crawler;
pub mod discovery;
pub mod extract;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for Magpie-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL is not absolute (missing scheme or host): {0}")]
    NotAbsolute(String),
}

/// Errors raised inside the crawl/extract stages.
///
/// These never escape the pipeline: the orchestrator maps every variant to an
/// empty contribution for the affected URL or document and moves on. They
/// exist so the degradation is explicit instead of swallowed ad hoc.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse document {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Unsupported legacy format .{extension} for {url}")]
    Unsupported { url: String, extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Magpie-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for crawl/extract stages
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::CrawlResult;
pub use extract::DocumentKind;
pub use pipeline::ContentRecord;
