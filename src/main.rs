use clap::Parser;
use yield_tables::{ScrapeError, Tables};
use yield_tables::results::RunSummary;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting table scrape for URL: {}", args.url);

    let tables = match build_tables(&args) {
        Ok(tables) => tables,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    match tables.run() {
        Ok(summary) => report(&summary),
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the Tables pipeline from command-line arguments
fn build_tables(args: &Args) -> Result<Tables, ScrapeError> {
    let mut tables = Tables::new(&args.url)
        .with_output_dir(&args.output_dir)
        .with_strict_rows(args.strict);

    if let Some(path) = &args.config {
        // The positional URL still wins over the file's start_url
        tables = tables.with_config_file(path)?.with_start_url(&args.url);
    }

    Ok(tables)
}

/// Print the run summary
fn report(summary: &RunSummary) {
    ::log::info!(
        "Run complete: {} tables found, {} duplicates skipped, {} files created, {} appended, {} skipped",
        summary.tables_found,
        summary.duplicates_skipped,
        summary.files_created,
        summary.files_appended,
        summary.files_skipped
    );

    println!("All tables have been extracted and saved as CSV files.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_url_wins_over_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"start_url": "https://from-file.example", "output_dir": "elsewhere"}}"#
        )
        .unwrap();

        let args = Args {
            url: "https://from-cli.example".to_string(),
            output_dir: "output_tables".to_string(),
            config: Some(file.path().to_string_lossy().into_owned()),
            strict: false,
        };

        let tables = build_tables(&args).unwrap();
        // The file's other settings apply, but the positional URL is kept
        assert_eq!(tables.config().start_url, "https://from-cli.example");
        assert_eq!(tables.config().output_dir, "elsewhere");
    }

    #[test]
    fn test_args_apply_without_config_file() {
        let args = Args {
            url: "https://example.com".to_string(),
            output_dir: "out".to_string(),
            config: None,
            strict: true,
        };

        let tables = build_tables(&args).unwrap();
        assert_eq!(tables.config().start_url, "https://example.com");
        assert_eq!(tables.config().output_dir, "out");
        assert!(tables.config().strict_rows);
    }
}
