//! Search command - query the remote catalog

use anyhow::{Context, Result};
use colored::Colorize;

use gutenctl::{Book, CatalogClient, CopyrightFilter, SearchParams, SearchResult, SortOrder};

use crate::config::Config;

/// Flags collected from the command line
pub struct SearchArgs {
    pub query: Option<String>,
    pub languages: Vec<String>,
    pub topic: Option<String>,
    pub sort: Option<SortOrder>,
    pub author_year_start: Option<i32>,
    pub author_year_end: Option<i32>,
    pub copyright: Option<CopyrightFilter>,
    pub page: Option<u32>,
}

/// Merge CLI flags with config defaults
pub fn build_params(args: SearchArgs, config: &Config) -> SearchParams {
    let languages = config.languages(&args.languages);

    SearchParams {
        search: args.query,
        languages: (!languages.is_empty()).then_some(languages),
        topic: args.topic,
        sort: config.sort(args.sort),
        author_year_start: args.author_year_start,
        author_year_end: args.author_year_end,
        copyright: args.copyright,
        page: args.page,
    }
}

/// Run the search command
pub fn run(args: SearchArgs, config: &Config, json: bool, quiet: bool) -> Result<()> {
    let params = build_params(args, config);
    let client =
        CatalogClient::new(config.client_config()).context("Failed to create catalog client")?;

    let result = super::block_on(client.search_with_pagination(&params))?
        .context("Failed to search catalog")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_results(&result, quiet);
    }

    Ok(())
}

fn print_results(result: &SearchResult, quiet: bool) {
    if result.books.is_empty() {
        println!("No books found.");
        return;
    }

    for book in &result.books {
        print_book_line(book);
    }

    if quiet {
        return;
    }

    println!();
    if let Some(next) = &result.next_page {
        println!("{} {}", "Next:".cyan(), next);
    }
    if let Some(previous) = &result.previous_page {
        println!("{} {}", "Previous:".cyan(), previous);
    }
}

fn print_book_line(book: &Book) {
    let authors = book.author_names();
    let authors = if authors.is_empty() {
        "Unknown".to_string()
    } else {
        authors.join("; ")
    };

    println!(
        "{:>6}  {} {} {}",
        book.id.to_string().bold(),
        book.title,
        format!("by {}", authors).dimmed(),
        format!("({} downloads)", book.download_count).dimmed()
    );
}
