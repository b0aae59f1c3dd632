//! Plain-text dump of scraped records
//!
//! One `Debug` line per record. Meant for eyeballing a crawl, not for
//! reading back.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::extractors::BookRecord;
use crate::Result;

/// Write `records` to `path`, replacing any existing file.
/// Missing parent directories are created.
pub fn save_records(path: &Path, records: &[BookRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        // Debug escapes embedded newlines, so each record stays on one line
        writeln!(writer, "{:?}", record)?;
    }
    writer.flush()?;

    Ok(())
}
