//! CSV report emitter

use log::{error, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ReportRow;
use crate::error::{OctoError, Result};

/// What one emitted file ended up holding
#[derive(Debug, Clone, PartialEq)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub rows_written: usize,
    pub rows_failed: usize,
}

/// Write the header and every row to `writer`
///
/// A row that cannot be written is logged and counted; the rows after it are
/// still written and the writer is always flushed. Returns
/// `(rows_written, rows_failed)`.
pub fn write_rows<W: Write, R: ReportRow>(writer: W, rows: &[R]) -> Result<(usize, usize)> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(R::HEADER)?;

    let mut written = 0;
    let mut failed = 0;
    for (i, row) in rows.iter().enumerate() {
        let record = row.record();
        if record.len() != R::HEADER.len() {
            error!(
                "Error writing row {}: expected {} fields, got {}",
                i + 1,
                R::HEADER.len(),
                record.len()
            );
            failed += 1;
            continue;
        }
        match wtr.write_record(&record) {
            Ok(()) => written += 1,
            Err(e) => {
                error!("Error writing row {}: {}", i + 1, e);
                failed += 1;
            }
        }
    }

    wtr.flush()?;
    Ok((written, failed))
}

/// Create `dir/file_name` and write a complete report into it
pub fn write_report<R: ReportRow>(dir: &Path, file_name: &str, rows: &[R]) -> Result<EmitSummary> {
    fs::create_dir_all(dir).map_err(|e| {
        OctoError::Output(format!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(file_name);
    let file = fs::File::create(&path).map_err(|e| {
        OctoError::Output(format!("Failed to create '{}': {}", path.display(), e))
    })?;

    let (rows_written, rows_failed) = write_rows(file, rows)?;
    info!("Wrote {} records to {}", rows_written, path.display());

    Ok(EmitSummary {
        path,
        rows_written,
        rows_failed,
    })
}
