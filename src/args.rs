use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "yield-tables")]
#[command(about = "Scrapes the HTML tables of a web page into CSV files")]
#[command(version)]
pub struct Args {
    /// Absolute URL of the page to scrape
    pub url: String,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = "output_tables")]
    pub output_dir: String,

    /// JSON configuration file (replaces the other options; the
    /// positional URL still applies)
    #[arg(long)]
    pub config: Option<String>,

    /// Truncate over-long rows instead of retroactively extending the schema
    #[arg(long)]
    pub strict: bool,
}
