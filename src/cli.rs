//! Command-line interface definitions for page_harvest.
//!
//! Both positionals have defaults, so running the binary bare scrapes the
//! quotes site into `./data`. Tuning options can also come from environment
//! variables.

use clap::Parser;

use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::outputs::json::DEFAULT_OUTPUT_DIR;

/// Command-line arguments for page_harvest.
///
/// # Examples
///
/// ```sh
/// # Scrape quotes.toscrape.com into ./data
/// page_harvest
///
/// # Start from a later page with a smaller page budget
/// page_harvest quotes https://quotes.toscrape.com/page/7/ --max-pages 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Registered site identifier
    #[arg(default_value = "quotes")]
    pub site: String,

    /// URL to start scraping from
    #[arg(default_value = "https://quotes.toscrape.com/")]
    pub url: String,

    /// Directory for JSON snapshots
    #[arg(short, long, env = "PAGE_HARVEST_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Maximum number of listing pages to follow
    #[arg(long, env = "PAGE_HARVEST_MAX_PAGES", default_value_t = 100)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "PAGE_HARVEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["page_harvest"]);

        assert_eq!(cli.site, "quotes");
        assert_eq!(cli.url, "https://quotes.toscrape.com/");
        assert_eq!(cli.max_pages, 100);
        assert_eq!(cli.timeout_secs, 10);
    }

    #[test]
    fn test_cli_positionals_and_flags() {
        let cli = Cli::parse_from([
            "page_harvest",
            "quotes",
            "https://quotes.toscrape.com/page/7/",
            "-o",
            "/tmp/snapshots",
            "--max-pages",
            "3",
        ]);

        assert_eq!(cli.url, "https://quotes.toscrape.com/page/7/");
        assert_eq!(cli.output_dir, "/tmp/snapshots");
        assert_eq!(cli.max_pages, 3);
    }
}
