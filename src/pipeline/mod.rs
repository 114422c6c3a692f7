//! Pipeline orchestrator
//!
//! Runs the crawl -> extract -> normalize sequence for every seed URL,
//! concurrently but bounded, and aggregates the surviving content records in
//! the original seed order. Seed pipelines are fully isolated: a failure,
//! timeout, or panic in one never aborts or blocks the others.

use crate::config::Config;
use crate::crawler::crawl_page;
use crate::extract::extract_document;
use crate::normalize::normalize;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// The only persisted output unit: one record per productive seed URL
///
/// `content` is the normalized, truncated concatenation of page text and all
/// successfully extracted document texts. Records with empty content never
/// reach the corpus. Created once and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContentRecord {
    pub url: String,
    pub content: String,
}

/// Runs the full pipeline over the given seed URLs
///
/// One task per seed, gated by a semaphore sized from
/// `config.pipeline.max_concurrent` so the number of simultaneous outbound
/// connections stays capped. Results are collected in seed order (stable)
/// with empty records dropped.
pub async fn run_pipeline(client: &Client, config: &Config, seeds: Vec<Url>) -> Vec<ContentRecord> {
    let semaphore = Arc::new(Semaphore::new(config.pipeline.max_concurrent));
    let config = Arc::new(config.clone());

    let mut handles = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let client = client.clone();
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);

        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                // Semaphore is never closed while tasks run
                Err(_) => return None,
            };
            process_seed(&client, &config, &seed).await
        }));
    }

    let mut records = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => {
                // A panicked seed task costs only its own record
                tracing::warn!("Seed task failed: {}", e);
            }
        }
    }

    tracing::info!("Pipeline produced {} content records", records.len());
    records
}

/// Processes one seed URL: crawl, extract linked documents, normalize
///
/// Returns `None` when the normalized content is empty - the record is
/// filtered out of the corpus rather than stored blank.
async fn process_seed(client: &Client, config: &Config, seed: &Url) -> Option<ContentRecord> {
    let crawl = crawl_page(client, seed).await;

    let mut document_texts = Vec::new();
    for doc_url in &crawl.document_links {
        let text = extract_document(client, &config.fetch, doc_url).await;
        if !text.is_empty() {
            document_texts.push(text);
        }
    }

    let mut combined = crawl.page_text;
    if !document_texts.is_empty() {
        combined.push('\n');
        combined.push_str(&document_texts.join("\n"));
    }

    let cleaned = normalize(&combined);
    if cleaned.is_empty() {
        tracing::debug!("No usable content for {}", seed);
        return None;
    }

    Some(ContentRecord {
        url: seed.to_string(),
        content: truncate_chars(&cleaned, config.pipeline.max_content_chars),
    })
}

/// Truncates to a number of characters, never splitting a UTF-8 sequence
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
