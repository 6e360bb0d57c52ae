use url::Url;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

/// A fetched page: raw markup plus the URL it came from
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the markup was fetched from
    pub url: String,

    /// Raw response body
    pub html: String,
}

/// Fetches the raw markup for the configured start URL.
///
/// One blocking GET, no retries. Non-2xx statuses are not inspected
/// separately; whatever body the transport returned is handed back.
pub fn fetch_page(config: &ScrapeConfig) -> Result<Page, ScrapeError> {
    let url = Url::parse(&config.start_url)?;

    ::log::info!("Fetching page: {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;
    let html = client.get(url.clone()).send()?.text()?;

    ::log::debug!("Fetched {} bytes from {}", html.len(), url);

    Ok(Page {
        url: url.to_string(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        let config = ScrapeConfig::new("not a url");
        let result = fetch_page(&config);
        assert!(matches!(result, Err(ScrapeError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_relative_url() {
        let config = ScrapeConfig::new("/relative/path");
        assert!(fetch_page(&config).is_err());
    }
}
