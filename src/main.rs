mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::search::SearchArgs;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            languages,
            topic,
            sort,
            author_year_start,
            author_year_end,
            copyright,
            page,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let args = SearchArgs {
                query,
                languages,
                topic,
                sort,
                author_year_start,
                author_year_end,
                copyright,
                page,
            };
            commands::search::run(args, &config, json, cli.quiet)?;
        }
        Commands::Show { id, json, field } => {
            let config = Config::load(cli.config.as_deref())?;
            commands::show::run(id, &config, json, field.as_deref(), cli.quiet)?;
        }
        Commands::Init { force } => {
            commands::init::run(cli.config.as_deref(), force)?;
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG takes precedence over --verbose
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gutenctl=debug"
    } else {
        "gutenctl=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
