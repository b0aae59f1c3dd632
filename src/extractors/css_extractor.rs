//! CSS selector helpers over a parsed document
//!
//! Uses the scraper crate to select elements by CSS selectors. An invalid
//! selector behaves like a selector that matches nothing.

use scraper::{ElementRef, Html, Selector};

/// First element in the document matching `selector_str`
pub fn select_first<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next()
}

/// First descendant of `element` matching `selector_str`
pub fn select_first_within<'a>(element: ElementRef<'a>, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    element.select(&selector).next()
}

/// All elements in the document matching `selector_str`
pub fn select_all<'a>(document: &'a Html, selector_str: &str) -> Vec<ElementRef<'a>> {
    let selector = match Selector::parse(selector_str) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document.select(&selector).collect()
}

/// Concatenated text of an element and its descendants, untrimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// First matching element's text, untrimmed
pub fn first_text(document: &Html, selector_str: &str) -> Option<String> {
    select_first(document, selector_str).map(element_text)
}

/// Attribute of an element, `None` when missing or empty
pub fn non_empty_attr(element: ElementRef<'_>, attr_name: &str) -> Option<String> {
    element
        .value()
        .attr(attr_name)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// First following sibling element with the given tag name
pub fn next_sibling_named<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}
