//! Catalogue crawl: paginate listing pages, then fetch every item page
//!
//! Both loops are sequential. Failures never escape the crawl: a failed
//! listing page ends pagination, a failed item page is logged and skipped.

use tracing::{debug, info, warn};

use crate::extractors::{extract_book, extract_listing, BookRecord};
use crate::{save_records, CatalogueConfig, HttpFetcher, PageSource, Result};

/// Collect relative item links from every listing page.
///
/// Pagination starts at page 1 and stops on the first 404, the first other
/// fetch failure, the first page with no item summaries, or when the next
/// page maps to the same URL as the last one. Links gathered before the stop
/// are returned; duplicates are kept.
pub fn list_book_links<S: PageSource + ?Sized>(source: &S, config: &CatalogueConfig) -> Vec<String> {
    let mut links = Vec::new();
    let mut page: u32 = 1;
    let mut previous_url: Option<String> = None;

    loop {
        let url = config.listing_url(page);
        if previous_url.as_deref() == Some(url.as_str()) {
            warn!("Listing page {} resolves to the same URL as page {}, stopping pagination", page, page - 1);
            break;
        }

        let html = match source.fetch(&url) {
            Ok(html) => html,
            Err(e) if e.is_not_found() => {
                debug!("Listing page {} not found, pagination finished", page);
                break;
            }
            Err(e) => {
                warn!("Failed to fetch listing page {}: {}", page, e);
                break;
            }
        };

        let listing = extract_listing(&html);
        if listing.is_empty() {
            warn!("Listing page {} has no items, stopping pagination", page);
            break;
        }

        debug!(
            "Listing page {}: {} items, {} links",
            page,
            listing.item_count,
            listing.links.len()
        );
        links.extend(listing.links);
        previous_url = Some(url);
        page += 1;
    }

    info!("Collected {} item links from {} listing pages", links.len(), page - 1);
    links
}

/// Fetch one item page and extract its record
pub fn get_book_data<S: PageSource + ?Sized>(source: &S, book_url: &str) -> Result<BookRecord> {
    let html = source.fetch(book_url)?;
    Ok(extract_book(&html))
}

/// Run the full crawl and optionally dump the records to `config.output_path`.
///
/// Only an invalid config or a failure to write the dump is returned as an
/// error; fetch and extraction failures are logged.
pub fn scrape_books<S: PageSource + ?Sized>(
    source: &S,
    config: &CatalogueConfig,
    save: bool,
) -> Result<Vec<BookRecord>> {
    config.validate()?;
    let links = list_book_links(source, config);

    let mut books = Vec::with_capacity(links.len());
    for link in &links {
        let book_url = config.item_url(link);
        match get_book_data(source, &book_url) {
            Ok(book) => books.push(book),
            Err(e) => warn!("Skipping {}: {}", book_url, e),
        }
    }

    info!("Scraped {} of {} books", books.len(), links.len());

    if save {
        save_records(&config.output_path, &books)?;
        info!("Saved {} books to {}", books.len(), config.output_path.display());
    }

    Ok(books)
}

/// Crawl the default catalogue over HTTP
pub fn scrape_catalogue(save: bool) -> Result<Vec<BookRecord>> {
    let config = CatalogueConfig::default();
    let fetcher = HttpFetcher::new(&config)?;
    scrape_books(&fetcher, &config, save)
}
