//! Corpus output
//!
//! Writes the final corpus as a JSON array of `{"url", "content"}` objects,
//! 2-space indented, UTF-8 with non-ASCII characters preserved. The file is
//! written once at the end of a run; there is no incremental output. A write
//! failure here is the one extraction-side error that is allowed to reach
//! the process exit code.

use crate::pipeline::ContentRecord;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the corpus to a JSON file
pub fn write_corpus(path: &Path, records: &[ContentRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    tracing::info!("Corpus with {} records saved to {}", records.len(), path.display());
    Ok(())
}
