use serde::Deserialize;

/// Desktop-browser user agent sent with every outbound request.
///
/// Some hosts refuse obviously-programmatic clients; page and document
/// fetches both identify as a desktop Chrome build.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

/// Main configuration structure for Magpie-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Network fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Timeout for page and plain-text fetches (seconds)
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Timeout for binary document downloads (seconds)
    #[serde(rename = "document-timeout-secs", default = "default_document_timeout")]
    pub document_timeout_secs: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Pipeline behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of seed URLs processed concurrently
    #[serde(rename = "max-concurrent", default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Maximum characters kept per content record
    #[serde(rename = "max-content-chars", default = "default_max_content_chars")]
    pub max_content_chars: usize,
}

fn default_page_timeout() -> u64 {
    15
}

fn default_document_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_concurrent() -> usize {
    8
}

fn default_max_content_chars() -> usize {
    10_000
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout(),
            document_timeout_secs: default_document_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            max_content_chars: default_max_content_chars(),
        }
    }
}
