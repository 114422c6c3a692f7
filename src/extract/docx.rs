//! DOCX text extraction
//!
//! A DOCX is a zip archive; the text lives in `word/document.xml` as
//! WordprocessingML. Body paragraphs come out first in document order,
//! newline-joined, then each table's cells row-major: cells space-joined,
//! rows newline-separated.

use crate::config::FetchConfig;
use crate::extract::download::download_to_temp;
use crate::extract::ooxml;
use crate::{ExtractError, ExtractResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Downloads and extracts text from a DOCX document
pub async fn extract_docx(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<String> {
    let file = download_to_temp(client, config, url, "docx").await?;
    parse_docx_file(file.path()).map_err(|message| ExtractError::Parse {
        url: url.to_string(),
        message,
    })
}

/// Parses a DOCX container on disk into plain text
pub fn parse_docx_file(path: &Path) -> Result<String, String> {
    let xml = ooxml::read_entry(path, "word/document.xml")?;
    parse_document_xml(&xml).map_err(|e| e.to_string())
}

/// Parses WordprocessingML into paragraphs followed by table text
fn parse_document_xml(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut tables: Vec<Vec<Vec<String>>> = Vec::new();

    // Nesting depth inside w:tbl; body paragraphs are only those at depth 0
    let mut table_depth: usize = 0;
    let mut in_text = false;
    let mut current_paragraph = String::new();
    let mut current_cell = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        tables.push(Vec::new());
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    if let Some(table) = tables.last_mut() {
                        table.push(Vec::new());
                    }
                }
                b"w:tc" if table_depth == 1 => current_cell.clear(),
                b"w:p" if table_depth == 0 => current_paragraph.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:tc" if table_depth == 1 => {
                    if let Some(row) = tables.last_mut().and_then(|t| t.last_mut()) {
                        row.push(current_cell.trim().to_string());
                    }
                }
                b"w:p" if table_depth == 0 => paragraphs.push(current_paragraph.clone()),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape()?;
                if table_depth > 0 {
                    current_cell.push_str(&text);
                } else {
                    current_paragraph.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let mut out = paragraphs.join("\n");
    for table in tables {
        for row in table {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&row.join(" "));
        }
    }

    Ok(out)
}
