use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use books_scraper::{init_logging, scrape_books, CatalogueConfig, HttpFetcher};

/// Scrape every book from the catalogue
#[derive(Parser, Debug)]
#[command(name = "books_scraper", version, about, long_about = None)]
struct Args {
    /// Write the scraped books to the output file
    #[arg(short, long)]
    save: bool,

    /// Output file, overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging("info");
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CatalogueConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CatalogueConfig::default(),
    };
    if let Some(output) = args.output {
        config = config.with_output_path(output);
    }

    let fetcher = HttpFetcher::new(&config).context("building HTTP client")?;
    let books = scrape_books(&fetcher, &config, args.save)
        .with_context(|| format!("saving to {}", config.output_path.display()))?;

    info!("Done: {} books", books.len());
    println!("{}", books.len());
    Ok(())
}
