use thiserror::Error;

/// Errors that abort a scrape run.
///
/// A header mismatch on append is deliberately not represented here: it is
/// recovered locally by the writer (the one file is skipped) and the run
/// continues for the remaining tables.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure while fetching the page
    #[error("network error fetching page: {0}")]
    Network(#[from] reqwest::Error),

    /// The start URL could not be parsed as an absolute URL
    #[error("invalid start URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Filesystem failure creating the output directory or opening a file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reading or writing a CSV file
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed configuration file or string
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
