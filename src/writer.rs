//! CSV dataset writer: creates, appends to, or skips per-table output
//! files based on header compatibility.

use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

use crate::error::ScrapeError;
use crate::extract::ExtractedTable;

/// How a table's write against the output directory resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WriteOutcome {
    /// The CSV did not exist and was created with a header row
    Created,

    /// The CSV existed with an identical header; records were appended
    Appended,

    /// The CSV existed with a different header; nothing was written
    SkippedMismatch,
}

/// Writes one normalized table to `<dir>/<stem>.csv`.
///
/// Appending happens only when the existing header row matches the
/// table's headers exactly, in content and order. A mismatch skips the
/// write entirely and leaves the file untouched; it is reported through
/// the returned outcome, not as an error.
pub fn write_table(dir: &Path, table: &ExtractedTable) -> Result<WriteOutcome, ScrapeError> {
    let filename = format!("{}.csv", table.file_stem);
    let path = dir.join(&filename);

    if path.exists() {
        let existing = read_header(&path)?;
        if existing != table.headers {
            ::log::warn!(
                "Columns do not match for {}. New table will not be appended.",
                filename
            );
            return Ok(WriteOutcome::SkippedMismatch);
        }

        append_records(&path, table)?;
        ::log::info!("Appended to {}.", filename);
        return Ok(WriteOutcome::Appended);
    }

    create_with_header(&path, table)?;
    ::log::info!("Saved {}.", filename);
    Ok(WriteOutcome::Created)
}

/// Reads the header row of an existing CSV file
fn read_header(path: &Path) -> Result<Vec<String>, ScrapeError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Appends records to an existing file without rewriting the header
fn append_records(path: &Path, table: &ExtractedTable) -> Result<(), ScrapeError> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Creates a new file with a header row followed by all records
fn create_with_header(path: &Path, table: &ExtractedTable) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
