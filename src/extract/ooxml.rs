//! Shared helpers for OOXML (zip-of-XML) containers
//!
//! DOCX and PPTX are both zip archives holding XML parts; these helpers read
//! named entries out of a downloaded container.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Reads a single XML part out of an OOXML container
pub fn read_entry(path: &Path, name: &str) -> Result<String, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let mut archive = ZipArchive::new(file).map_err(|e| e.to_string())?;
    let mut entry = archive.by_name(name).map_err(|e| e.to_string())?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    Ok(xml)
}

/// Lists the entry names of an OOXML container
pub fn list_entries(path: &Path) -> Result<Vec<String>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let archive = ZipArchive::new(file).map_err(|e| e.to_string())?;
    Ok(archive.file_names().map(String::from).collect())
}
