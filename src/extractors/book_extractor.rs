//! Item page extraction
//!
//! Each field is looked up independently; a missing anchor element leaves
//! that field `None` without affecting the others.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use tracing::debug;

use super::{
    element_text, first_text, next_sibling_named, select_first, select_first_within, BookRecord,
};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract a `BookRecord` from an item page
pub fn extract_book(html: &str) -> BookRecord {
    let document = Html::parse_document(html);

    BookRecord {
        name: first_text(&document, "h1").map(|t| t.trim().to_string()),
        price: first_text(&document, "p.price_color"),
        rating: extract_rating(&document),
        quantity_in_stock: extract_quantity(&document),
        description: extract_description(&document),
        extra_feature: extract_features(&document),
    }
}

fn extract_rating(document: &Html) -> Option<String> {
    let element = select_first(document, "p.star-rating")?;
    element
        .value()
        .attr("class")?
        .split_whitespace()
        .last()
        .map(String::from)
}

/// Present but digit-less availability text yields `None`
fn extract_quantity(document: &Html) -> Option<String> {
    let text = first_text(document, "p.instock.availability")?;
    let quantity = first_number(&text);
    if quantity.is_none() {
        debug!("Availability text without a count: {:?}", text.trim());
    }
    quantity
}

/// First run of ASCII digits in `text`
pub fn first_number(text: &str) -> Option<String> {
    DIGITS.find(text).map(|m| m.as_str().to_string())
}

fn extract_description(document: &Html) -> Option<String> {
    let header = select_first(document, "div#product_description")?;
    next_sibling_named(header, "p").map(element_text)
}

/// Specification table rows. A page without the table gives an empty map,
/// a row without a header cell is skipped, a row without a value cell maps
/// to `None`.
fn extract_features(document: &Html) -> BTreeMap<String, Option<String>> {
    let mut features = BTreeMap::new();

    let table = match select_first(document, "table.table") {
        Some(t) => t,
        None => {
            debug!("No specification table on page");
            return features;
        }
    };
    let row_selector = match Selector::parse("tr") {
        Ok(s) => s,
        Err(_) => return features,
    };

    for row in table.select(&row_selector) {
        let header = match select_first_within(row, "th") {
            Some(th) => element_text(th).trim().to_lowercase(),
            None => continue,
        };
        let value = select_first_within(row, "td").map(|td| element_text(td).trim().to_string());
        features.insert(header, value);
    }

    features
}
