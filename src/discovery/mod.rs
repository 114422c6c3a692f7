//! Seed URL discovery seam
//!
//! Search-result scraping is an external collaborator, not part of this
//! crate: it is selector-bound, engine-specific, and brittle. What lives
//! here is the contract such a collaborator must satisfy, plus the shipped
//! `SeedList` provider that serves explicit seed URLs from the command line
//! or a seeds file.

use async_trait::async_trait;
use url::Url;

/// Contract for seed URL discovery
///
/// `discover` returns up to `limit` absolute URLs for the given free-text
/// query, in the order the discovery source produced them.
#[async_trait]
pub trait Discovery {
    async fn discover(&self, query: &str, limit: usize) -> crate::Result<Vec<Url>>;
}

/// Static seed provider: a fixed, pre-validated URL list
///
/// The query is ignored; the list was assembled outside the crate (CLI
/// arguments, a seeds file, or an upstream search run whose output was saved).
pub struct SeedList {
    seeds: Vec<Url>,
}

impl SeedList {
    /// Builds a seed list from raw strings, skipping invalid entries
    ///
    /// Entries that do not parse as absolute URLs are logged and dropped;
    /// an entirely invalid list yields an empty provider, which in turn
    /// yields an empty corpus rather than an error.
    pub fn from_strings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seeds = Vec::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            match crate::url::parse_absolute(entry) {
                Ok(url) => seeds.push(url),
                Err(e) => tracing::warn!("Skipping invalid seed URL: {}", e),
            }
        }
        Self { seeds }
    }

    /// Reads seeds from a file, one URL per line; `#` lines are comments
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_strings(
            content.lines().filter(|line| !line.trim_start().starts_with('#')),
        ))
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

#[async_trait]
impl Discovery for SeedList {
    async fn discover(&self, _query: &str, limit: usize) -> crate::Result<Vec<Url>> {
        Ok(self.seeds.iter().take(limit).cloned().collect())
    }
}
