//! PPTX text extraction
//!
//! A PPTX is a zip archive with one DrawingML part per slide under
//! `ppt/slides/`. Slides come out in numeric filename order, each introduced
//! by a `Slide <n>:` header, with one line per non-empty text paragraph.

use crate::config::FetchConfig;
use crate::extract::download::download_to_temp;
use crate::extract::ooxml;
use crate::{ExtractError, ExtractResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Downloads and extracts text from a PPTX presentation
pub async fn extract_pptx(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<String> {
    let file = download_to_temp(client, config, url, "pptx").await?;
    parse_pptx_file(file.path()).map_err(|message| ExtractError::Parse {
        url: url.to_string(),
        message,
    })
}

/// Parses a PPTX container on disk into plain text
pub fn parse_pptx_file(path: &Path) -> Result<String, String> {
    let entries = ooxml::list_entries(path)?;

    let mut slides: Vec<(u32, String)> = entries
        .into_iter()
        .filter_map(|name| slide_number(&name).map(|n| (n, name)))
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut out = String::new();
    for (index, (_, name)) in slides.iter().enumerate() {
        let xml = ooxml::read_entry(path, name)?;
        let body = parse_slide_xml(&xml).map_err(|e| e.to_string())?;

        out.push_str(&format!("Slide {}:\n", index + 1));
        out.push_str(&body);
    }

    Ok(out)
}

/// Extracts N from "ppt/slides/slideN.xml"
fn slide_number(entry_name: &str) -> Option<u32> {
    entry_name
        .strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Collects DrawingML text runs, one line per non-empty paragraph
fn parse_slide_xml(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut out = String::new();
    let mut in_text = false;
    let mut paragraph = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"a:t" {
                    in_text = true;
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if !paragraph.trim().is_empty() {
                        out.push_str(paragraph.trim());
                        out.push('\n');
                    }
                    paragraph.clear();
                }
                _ => {}
            },
            Event::Text(t) if in_text => paragraph.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
