//! Case-insensitive name filtering.
//!
//! # Responsibility
//! - Narrow in-memory collections by a type-as-you-search query.
//!
//! # Invariants
//! - An empty query returns the full collection in original order.
//! - Matching is substring containment on the display name only.
//! - Result order is the input order; there is no ranking.

use crate::model::person::Person;
use crate::model::quick_link::QuickLink;

/// Anything with a display name that search can match against.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for QuickLink {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Person {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn display_name(&self) -> &str {
        self.as_str()
    }
}

impl Named for &str {
    fn display_name(&self) -> &str {
        self
    }
}

/// Returns whether `name` contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Returns the items whose display name contains `query`, ignoring case.
pub fn filter_by_name<T: Named + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Filters an injected read-only reference list (e.g. country names).
///
/// Entries are lower-cased before matching and returned lower-cased, which
/// is how the search screen renders them.
pub fn filter_reference_list(list: &[String], query: &str) -> Vec<String> {
    let lowered = list
        .iter()
        .map(|entry| entry.to_lowercase())
        .collect::<Vec<_>>();
    filter_by_name(&lowered, query)
}
