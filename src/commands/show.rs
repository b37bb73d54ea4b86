use anyhow::{bail, Context, Result};
use colored::Colorize;

use gutenctl::{Author, Book, CatalogClient};

use crate::config::Config;

const FIELDS: &str = "title, authors, translators, summaries, subjects, bookshelves, languages, copyright, download_count, media_type, formats";

pub fn run(id: u64, config: &Config, json: bool, field: Option<&str>, quiet: bool) -> Result<()> {
    let client =
        CatalogClient::new(config.client_config()).context("Failed to create catalog client")?;

    let book = super::block_on(client.find_book_by_id(id))?
        .with_context(|| format!("Failed to fetch book {}", id))?;

    if let Some(field_name) = field {
        print_single_field(&book, field_name)?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_pretty(&book, quiet);
    }

    Ok(())
}

fn print_single_field(book: &Book, field: &str) -> Result<()> {
    let lines: Vec<String> = match field {
        "title" => vec![book.title.clone()],
        "authors" => book.authors.iter().map(format_author).collect(),
        "translators" => book.translators.clone().unwrap_or_default(),
        "summaries" => book.summaries.clone().unwrap_or_default(),
        "subjects" => book.subjects.clone(),
        "bookshelves" => book.bookshelves.clone(),
        "languages" => book.languages.clone(),
        "copyright" => vec![format_copyright(book.copyright).to_string()],
        "download_count" => vec![book.download_count.to_string()],
        "media_type" => vec![book.media_type.clone()],
        "formats" => book
            .formats
            .iter()
            .map(|(mime, url)| format!("{}\t{}", mime, url))
            .collect(),
        _ => bail!("Unknown field: {}. Valid fields: {}", field, FIELDS),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn print_pretty(book: &Book, quiet: bool) {
    if !quiet {
        println!("{}", format!("#{} {}", book.id, book.title).bold());
        println!("{}", "─".repeat(40));
    }

    let authors: Vec<String> = book.authors.iter().map(format_author).collect();
    print_list("Authors", &authors);
    if let Some(translators) = &book.translators {
        print_list("Translators", translators);
    }
    print_list("Languages", &book.languages);
    print_field("Copyright", format_copyright(book.copyright));
    print_field("Media type", &book.media_type);
    print_field("Downloads", &book.download_count.to_string());
    print_list("Subjects", &book.subjects);
    print_list("Bookshelves", &book.bookshelves);

    if !book.formats.is_empty() {
        println!();
        println!("{}", "Formats:".cyan());
        for (mime, url) in &book.formats {
            println!("  {:<40} {}", mime, url);
        }
    }

    if let Some(summaries) = &book.summaries {
        for summary in summaries {
            println!();
            println!("{}", "Summary:".cyan());
            for line in textwrap_simple(summary, 80) {
                println!("  {}", line);
            }
        }
    }
}

fn format_author(author: &Author) -> String {
    match (author.birth_year, author.death_year) {
        (None, None) => author.name.clone(),
        (birth, death) => format!(
            "{} ({}-{})",
            author.name,
            birth.map(|y| y.to_string()).unwrap_or_default(),
            death.map(|y| y.to_string()).unwrap_or_default()
        ),
    }
}

fn format_copyright(copyright: Option<bool>) -> &'static str {
    match copyright {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    }
}

fn print_field(label: &str, value: &str) {
    println!("{:>12}: {}", label.cyan(), value);
}

fn print_list(label: &str, values: &[String]) {
    if !values.is_empty() {
        print_field(label, &values.join("; "));
    }
}

/// Simple text wrapping without external dependency
fn textwrap_simple(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}
