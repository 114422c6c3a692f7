//! XLSX text extraction
//!
//! Reads the workbook with calamine. Output format, per sheet in workbook
//! order: a `Sheet: <name>` header line, then one line per row with cell
//! values joined by `" | "`. Blank cells render as empty strings; rows whose
//! cells are all blank are skipped.

use crate::config::FetchConfig;
use crate::extract::download::download_to_temp;
use crate::{ExtractError, ExtractResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Downloads and extracts text from an XLSX workbook
pub async fn extract_xlsx(
    client: &Client,
    config: &FetchConfig,
    url: &Url,
) -> ExtractResult<String> {
    let file = download_to_temp(client, config, url, "xlsx").await?;
    parse_xlsx_file(file.path()).map_err(|message| ExtractError::Parse {
        url: url.to_string(),
        message,
    })
}

/// Parses an XLSX workbook on disk into plain text
pub fn parse_xlsx_file(path: &Path) -> Result<String, String> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| e.to_string())?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut out = String::new();
    for name in sheet_names {
        out.push_str("Sheet: ");
        out.push_str(&name);
        out.push('\n');

        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(e) => {
                tracing::warn!("Skipping sheet {:?}: {}", name, e);
                continue;
            }
        };

        for row in range.rows() {
            if row.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }
            let cells: Vec<String> = row.iter().map(cell_to_string).collect();
            out.push_str(&cells.join(" | "));
            out.push('\n');
        }
    }

    Ok(out)
}

/// Renders a cell value; blank cells become empty strings, not a marker
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
