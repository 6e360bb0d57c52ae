use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ScrapeError;

/// Configuration for a single-page table scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Absolute URL of the page to scrape
    pub start_url: String,

    /// Directory the CSV files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Truncate over-long rows instead of retroactively extending the schema
    #[serde(default)]
    pub strict_rows: bool,
}

/// Default output directory
fn default_output_dir() -> String {
    "output_tables".to_string()
}

/// Default User-Agent header
fn default_user_agent() -> String {
    concat!("yield-tables/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ScrapeConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
            strict_rows: false,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = ScrapeConfig::from_json(r#"{"start_url": "https://example.com"}"#).unwrap();
        assert_eq!(config.start_url, "https://example.com");
        assert_eq!(config.output_dir, "output_tables");
        assert!(!config.strict_rows);
        assert!(config.user_agent.starts_with("yield-tables/"));
    }

    #[test]
    fn test_explicit_values() {
        let config = ScrapeConfig::from_json(
            r#"{"start_url": "https://example.com", "output_dir": "out", "strict_rows": true}"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, "out");
        assert!(config.strict_rows);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ScrapeConfig::from_json("{not json").is_err());
    }
}
