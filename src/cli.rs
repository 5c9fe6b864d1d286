//! Command-line interface for the scrape runner.
//!
//! The binary is what the daily cron job (or an operator reproducing a
//! run by hand) invokes; all options have defaults so a bare `kysd_news`
//! does a full scrape into the working directory.

use clap::Parser;

/// Command-line arguments for the KYSD news scrape runner.
///
/// # Examples
///
/// ```sh
/// # Full daily run with defaults
/// kysd_news
///
/// # Custom store and uploads location
/// kysd_news -s /var/lib/kysd/articles.json -u /var/www/uploads/news
///
/// # Refresh a single configured source
/// kysd_news --source "Turizm Güncel"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the JSON article store file
    #[arg(short, long, env = "KYSD_STORE", default_value = "articles.json")]
    pub store: String,

    /// Directory where downloaded article images are saved
    #[arg(short, long, env = "KYSD_UPLOADS_DIR", default_value = "uploads/news")]
    pub uploads_dir: String,

    /// Only scrape the configured source with this exact name
    #[arg(long)]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kysd_news"]);
        assert_eq!(cli.store, "articles.json");
        assert_eq!(cli.uploads_dir, "uploads/news");
        assert!(cli.source.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["kysd_news", "-s", "/tmp/a.json", "-u", "/tmp/uploads"]);
        assert_eq!(cli.store, "/tmp/a.json");
        assert_eq!(cli.uploads_dir, "/tmp/uploads");
    }

    #[test]
    fn test_cli_source_filter() {
        let cli = Cli::parse_from(["kysd_news", "--source", "Turizm Güncel"]);
        assert_eq!(cli.source.as_deref(), Some("Turizm Güncel"));
    }
}
