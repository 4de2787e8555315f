// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Normalize a category for comparison against a filter key:
/// lowercase, each whitespace run collapsed to a single hyphen.
/// "Fresh Produce" -> "fresh-produce".
pub fn category_slug(category: &str) -> String {
    let mut out = String::with_capacity(category.len());
    let mut prev_ws = false;
    for c in category.chars() {
        if c.is_whitespace() {
            if !prev_ws {
                out.push('-');
            }
            prev_ws = true;
        } else {
            out.extend(c.to_lowercase());
            prev_ws = false;
        }
    }
    out
}

/// Whether one listing is visible under the given search term and
/// category filter ("all" disables the category check).
pub fn matches(listing: &Listing, term: &str, filter: &str) -> bool {
    let matches_search = term.is_empty() || {
        let needle = term.to_lowercase();
        listing.food_name.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle)
    };

    let matches_filter = filter == "all" || category_slug(&listing.category) == filter;

    matches_search && matches_filter
}

/// Reduce a listing sequence by search term and category filter.
/// Order of the input is preserved.
pub fn filter_listings<'a>(listings: &'a [Listing], term: &str, filter: &str) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(l, term, filter)).collect()
}
