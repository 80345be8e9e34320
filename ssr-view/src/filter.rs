//! Resort list filters.
//!
//! All filters return a subsequence of the input, in input order.

use ssr_resort::{Resort, ResortId};

/// Resorts whose name contains `query`, ignoring case. An empty query matches all.
pub fn filter_by_name<'a>(resorts: &'a [Resort], query: &str) -> Vec<&'a Resort> {
    let needle = query.to_lowercase();
    resorts
        .iter()
        .filter(|resort| resort.name.to_lowercase().contains(&needle))
        .collect()
}

/// Resorts whose id is among `favorites`.
pub fn filter_favorites<'a>(resorts: &'a [Resort], favorites: &[ResortId]) -> Vec<&'a Resort> {
    resorts
        .iter()
        .filter(|resort| favorites.contains(&resort.id))
        .collect()
}

/// Name matches that are not already favorites, for the add-favorite search.
pub fn search_excluding_favorites<'a>(
    resorts: &'a [Resort],
    favorites: &[ResortId],
    query: &str,
) -> Vec<&'a Resort> {
    filter_by_name(resorts, query)
        .into_iter()
        .filter(|resort| !favorites.contains(&resort.id))
        .collect()
}
