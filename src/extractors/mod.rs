//! HTML extraction modules
//!
//! Listing pages yield relative item links, item pages yield a `BookRecord`.

mod book_extractor;
mod css_extractor;
mod listing_extractor;

pub use book_extractor::*;
pub use css_extractor::*;
pub use listing_extractor::*;

use std::collections::BTreeMap;

/// Fields scraped from one item page.
///
/// Every field except `extra_feature` is `None` when its anchor element is
/// missing from the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookRecord {
    pub name: Option<String>,
    /// Raw display text, currency symbol included
    pub price: Option<String>,
    /// Last class token of the rating element, not validated
    pub rating: Option<String>,
    pub quantity_in_stock: Option<String>,
    pub description: Option<String>,
    /// Specification table: lowercased header -> value
    pub extra_feature: BTreeMap<String, Option<String>>,
}

impl BookRecord {
    /// The rating token parsed into the five-star vocabulary, if it is one
    pub fn star_rating(&self) -> Option<Rating> {
        self.rating.as_deref().and_then(Rating::parse)
    }
}

/// Star rating vocabulary used by the catalogue's class names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "One" => Some(Rating::One),
            "Two" => Some(Rating::Two),
            "Three" => Some(Rating::Three),
            "Four" => Some(Rating::Four),
            "Five" => Some(Rating::Five),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }
}
