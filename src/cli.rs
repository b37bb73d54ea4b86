use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gutenctl::{CopyrightFilter, SortOrder};

#[derive(Parser)]
#[command(name = "gutenctl")]
#[command(about = "Search and inspect the Project Gutenberg catalog via Gutendex")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of ~/.config/gutenctl/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by author, title, topic and other filters
    Search {
        /// Words to match against author names and titles
        query: Option<String>,

        /// Language code filter (repeatable, e.g. -l en -l fr)
        #[arg(short, long = "language")]
        languages: Vec<String>,

        /// Match bookshelves or subjects containing this phrase
        #[arg(long)]
        topic: Option<String>,

        /// Result ordering
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Only authors alive on or after this year
        #[arg(long, allow_hyphen_values = true)]
        author_year_start: Option<i32>,

        /// Only authors alive on or before this year
        #[arg(long, allow_hyphen_values = true)]
        author_year_end: Option<i32>,

        /// Copyright status filter
        #[arg(long, value_enum)]
        copyright: Option<CopyrightFilter>,

        /// Result page to fetch (starting at 1)
        #[arg(long)]
        page: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single catalog record by id
    Show {
        /// Gutenberg book id
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show only a specific field
        #[arg(long)]
        field: Option<String>,
    },

    /// Create a config file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
