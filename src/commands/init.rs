use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use gutenctl::DEFAULT_BASE_URL;

use crate::config::Config;

/// Run the init command - write a config file with default values
pub fn run(config_override: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match config_override {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    write_default_config(&config_path, force)?;

    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("You can now use:");
    println!(
        "  {} - search the catalog",
        "gutenctl search <words>".cyan()
    );
    println!("  {} - show a single book", "gutenctl show <id>".cyan());

    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let config_content = format!(
        r#"# gutenctl configuration

[catalog]
base_url = "{}"
# user_agent = "gutenctl"
# timeout_secs = 30
# "direct" sends each filter as its own parameter, "nested" packs them into one search= value
query_encoding = "direct"

[search]
# languages = ["en"]
# sort = "popular"
"#,
        DEFAULT_BASE_URL
    );

    std::fs::write(config_path, config_content)
        .with_context(|| format!("Failed to write {:?}", config_path))
}
