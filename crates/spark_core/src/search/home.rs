//! Home-screen shaping over loaded quick links.
//!
//! # Responsibility
//! - Partition links into category grids (favorites).
//! - Cap the "all links" grid to a preview until the user expands it.
//! - Run one query against links and people for the unified search view.

use super::filter::filter_by_name;
use crate::model::category::LinkCategory;
use crate::model::person::Person;
use crate::model::quick_link::QuickLink;

/// Number of links shown in the "all links" grid before "Show All".
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Preview slice of the "all links" grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPreview {
    pub links: Vec<QuickLink>,
    /// `true` when links were cut off and a "Show All" control applies.
    pub has_more: bool,
}

/// Unified search result over both record kinds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectorySearch {
    pub links: Vec<QuickLink>,
    pub people: Vec<Person>,
}

impl DirectorySearch {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.people.is_empty()
    }

    pub fn total(&self) -> usize {
        self.links.len() + self.people.len()
    }
}

/// Returns links of one category, in load order.
pub fn links_in_category(links: &[QuickLink], category: &LinkCategory) -> Vec<QuickLink> {
    links
        .iter()
        .filter(|link| &link.category() == category)
        .cloned()
        .collect()
}

/// Returns the first `limit` links unless `show_all` is set.
pub fn preview_links(links: &[QuickLink], limit: usize, show_all: bool) -> LinkPreview {
    if show_all || links.len() <= limit {
        return LinkPreview {
            links: links.to_vec(),
            has_more: false,
        };
    }

    LinkPreview {
        links: links[..limit].to_vec(),
        has_more: true,
    }
}

/// Applies the same name filter to both collections.
pub fn search_directory(links: &[QuickLink], people: &[Person], query: &str) -> DirectorySearch {
    DirectorySearch {
        links: filter_by_name(links, query),
        people: filter_by_name(people, query),
    }
}
