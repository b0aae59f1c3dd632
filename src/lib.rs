//! Scraper for the books.toscrape.com catalogue
//!
//! Walks the paginated listing, fetches every item page and extracts:
//! - name, price, star rating
//! - quantity in stock
//! - description
//! - the product information table as key/value pairs

pub mod config;
pub mod crawler;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod logging;
pub mod output;

pub use config::*;
pub use crawler::*;
pub use error::*;
pub use extractors::*;
pub use fetch::*;
pub use logging::*;
pub use output::*;
