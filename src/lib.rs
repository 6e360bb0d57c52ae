// Re-export modules
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod results;
pub mod sanitize;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::ScrapeError;
pub use results::RunSummary;

use std::fs;
use std::path::Path;

use config::ScrapeConfig;
use results::TableReport;

/// Builder for scraping the tables of one web page into CSV files
pub struct Tables {
    config: ScrapeConfig,
}

impl Tables {
    /// Create a new Tables builder for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            config: ScrapeConfig::new(url),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ScrapeError> {
        self.config = ScrapeConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, ScrapeError> {
        self.config = ScrapeConfig::from_json(json)?;
        Ok(self)
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: &str) -> Self {
        self.config.output_dir = dir.to_string();
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Override the start URL
    pub fn with_start_url(mut self, url: &str) -> Self {
        self.config.start_url = url.to_string();
        self
    }

    /// Override strict row handling
    pub fn with_strict_rows(mut self, strict: bool) -> Self {
        self.config.strict_rows = strict;
        self
    }

    /// Returns a reference to the underlying configuration
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetch the page, extract its tables, and write one CSV per
    /// distinct table title.
    ///
    /// Tables are processed strictly in document order. A network
    /// failure aborts the whole run; a header mismatch against an
    /// existing file only skips that one file.
    pub fn run(self) -> Result<RunSummary, ScrapeError> {
        let page = fetch::fetch_page(&self.config)?;
        let extracted = extract::extract_tables(&page.html, self.config.strict_rows);

        ::log::info!(
            "Found {} distinct tables in {} ({} duplicates skipped)",
            extracted.tables.len(),
            page.url,
            extracted.duplicates_skipped
        );

        let out_dir = Path::new(&self.config.output_dir);
        fs::create_dir_all(out_dir)?;

        let mut summary = RunSummary::new(&page.url);
        summary.tables_found = extracted.tables.len();
        summary.duplicates_skipped = extracted.duplicates_skipped;

        for table in &extracted.tables {
            if table.headers.is_empty() {
                ::log::debug!("Table '{}' produced no columns, skipping", table.title);
                continue;
            }

            let outcome = writer::write_table(out_dir, table)?;
            summary.record(TableReport {
                title: table.title.clone(),
                filename: format!("{}.csv", table.file_stem),
                columns: table.headers.len(),
                rows: table.rows.len(),
                outcome,
            });
        }

        Ok(summary)
    }
}
