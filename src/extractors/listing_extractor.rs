//! Listing page extraction

use scraper::Html;

use super::{non_empty_attr, select_all, select_first_within};

/// Items on one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Number of item summaries found, including ones without a usable link
    pub item_count: usize,
    /// Relative item links in document order
    pub links: Vec<String>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Collect item links from a listing page.
///
/// Each `article.product_pod` contributes the `href` of its first anchor;
/// summaries without an anchor or with an empty `href` are skipped.
pub fn extract_listing(html: &str) -> ListingPage {
    let document = Html::parse_document(html);
    let items = select_all(&document, "article.product_pod");

    let links = items
        .iter()
        .filter_map(|item| select_first_within(*item, "a"))
        .filter_map(|anchor| non_empty_attr(anchor, "href"))
        .collect();

    ListingPage {
        item_count: items.len(),
        links,
    }
}
