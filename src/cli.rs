//! Command-line interface definitions for the importer.
//!
//! Two subcommands: `import` runs one full crawl-and-replace cycle, `list`
//! reads the stored articles back with a normalized sort. Connection and
//! site settings can come from flags or environment variables.

use clap::{Parser, Subcommand};

/// Command-line arguments for the webmagic blog importer.
///
/// # Examples
///
/// ```sh
/// # One full import run against the default site
/// webmagic_import import
///
/// # Import with a page safety cap and explicit database
/// webmagic_import --database-url sqlite://articles.db import --max-pages 50
///
/// # List stored articles, newest first
/// webmagic_import list --sort-by published_at --direction desc
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Database URL for the article store
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://articles.db")]
    pub database_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl the blog listing and replace the stored article set
    Import {
        /// Base URL of the source site (the listing lives at {base}/blog)
        #[arg(long, env = "BLOG_BASE_URL", default_value = "https://webmagic.agency")]
        base_url: String,

        /// Safety cap on listing pages fetched; unlimited when omitted
        #[arg(long)]
        max_pages: Option<u32>,
    },
    /// Print the stored articles as JSON
    List {
        /// Sort column; anything other than `published_at` sorts by title
        #[arg(long, default_value = "title")]
        sort_by: String,

        /// Sort direction; anything other than `desc` sorts ascending
        #[arg(long, default_value = "asc")]
        direction: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_import_defaults() {
        let cli = Cli::parse_from(["webmagic_import", "import"]);
        assert_eq!(cli.database_url, "sqlite://articles.db");
        match cli.command {
            Command::Import {
                base_url,
                max_pages,
            } => {
                assert_eq!(base_url, "https://webmagic.agency");
                assert_eq!(max_pages, None);
            }
            _ => panic!("expected import subcommand"),
        }
    }

    #[test]
    fn test_cli_import_with_cap() {
        let cli = Cli::parse_from(["webmagic_import", "import", "--max-pages", "50"]);
        match cli.command {
            Command::Import { max_pages, .. } => assert_eq!(max_pages, Some(50)),
            _ => panic!("expected import subcommand"),
        }
    }

    #[test]
    fn test_cli_list_args() {
        let cli = Cli::parse_from([
            "webmagic_import",
            "--database-url",
            "sqlite::memory:",
            "list",
            "--sort-by",
            "published_at",
            "--direction",
            "desc",
        ]);
        assert_eq!(cli.database_url, "sqlite::memory:");
        match cli.command {
            Command::List { sort_by, direction } => {
                assert_eq!(sort_by, "published_at");
                assert_eq!(direction, "desc");
            }
            _ => panic!("expected list subcommand"),
        }
    }

    #[test]
    fn test_cli_list_defaults() {
        let cli = Cli::parse_from(["webmagic_import", "list"]);
        match cli.command {
            Command::List { sort_by, direction } => {
                assert_eq!(sort_by, "title");
                assert_eq!(direction, "asc");
            }
            _ => panic!("expected list subcommand"),
        }
    }
}
