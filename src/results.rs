use serde::Serialize;

use crate::writer::WriteOutcome;

/// Outcome of processing one table from the page
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Title derived for the table
    pub title: String,

    /// CSV filename the table was written (or matched) against
    pub filename: String,

    /// Number of columns after normalization
    pub columns: usize,

    /// Number of data rows after normalization
    pub rows: usize,

    /// How the write against the output directory resolved
    pub outcome: WriteOutcome,
}

/// Summary of one full scrape run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// URL the tables were scraped from
    pub url: String,

    /// Distinct tables found on the page (duplicates excluded)
    pub tables_found: usize,

    /// Tables skipped because they duplicated an earlier table exactly
    pub duplicates_skipped: usize,

    /// CSV files created fresh
    pub files_created: usize,

    /// CSV files appended to
    pub files_appended: usize,

    /// Writes skipped because the existing header did not match
    pub files_skipped: usize,

    /// Per-table outcomes in document order
    pub tables: Vec<TableReport>,
}

impl RunSummary {
    /// Create an empty summary for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Record the outcome of one table
    pub fn record(&mut self, report: TableReport) {
        match report.outcome {
            WriteOutcome::Created => self.files_created += 1,
            WriteOutcome::Appended => self.files_appended += 1,
            WriteOutcome::SkippedMismatch => self.files_skipped += 1,
        }
        self.tables.push(report);
    }
}
