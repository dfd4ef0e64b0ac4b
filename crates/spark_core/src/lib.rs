//! Core data layer for the Spark directory/portal app.
//! Loads bundled quick links and directory people, and serves filtered views
//! to the presentation layer.

pub mod bundle;
pub mod dispatch;
pub mod loader;
pub mod logging;
pub mod model;
pub mod search;

pub use bundle::{BundleConfig, BundleError, BundleResult};
pub use dispatch::link_action::{
    is_valid_address, resolve_link_action, LinkAction, PromptKind, Tint, TINT_OPACITY,
};
pub use loader::people::{load_people, parse_people, try_load_people};
pub use loader::quick_links::{
    load_quick_links, parse_quick_link_rows, parse_quick_links, quick_links_to_json,
    try_load_quick_links, QuickLinkParse,
};
pub use loader::{LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::category::LinkCategory;
pub use model::person::Person;
pub use model::quick_link::QuickLink;
pub use model::RecordId;
pub use search::filter::{filter_by_name, filter_reference_list, name_matches, Named};
pub use search::home::{
    links_in_category, preview_links, search_directory, DirectorySearch, LinkPreview,
    DEFAULT_PREVIEW_LIMIT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
