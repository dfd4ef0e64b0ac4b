//! Quick-link loader for the bundled tabular resource.
//!
//! # Responsibility
//! - Parse header-first, comma-separated rows into `QuickLink` records.
//! - Render loaded links back to pretty JSON for export.
//!
//! # Invariants
//! - Lines break on every Unicode newline class, not only LF/CR.
//! - The first line is always treated as the header and discarded.
//! - A row is accepted only with exactly 4 fields. The format has no
//!   quoting, so a comma inside a field drops that row and nothing else.
//! - Empty `url`/`description` fields decode to `None`.
//! - Output order equals source row order.

use log::{debug, info, warn};

use super::{read_resource, LoadError, LoadResult};
use crate::bundle::BundleConfig;
use crate::model::quick_link::QuickLink;

const FIELD_DELIMITER: char = ',';
// LF, CR, VT, FF, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
const LINE_BREAKS: [char; 7] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}',
];
const FIELDS_PER_ROW: usize = 4;

/// Outcome of parsing tabular quick-link text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLinkParse {
    pub links: Vec<QuickLink>,
    /// Non-blank data rows rejected for having the wrong field count.
    pub dropped_rows: usize,
}

/// Parses tabular quick-link text and reports how many rows were dropped.
pub fn parse_quick_link_rows(text: &str) -> QuickLinkParse {
    let mut links = Vec::new();
    let mut dropped_rows = 0;

    for line in text.split(LINE_BREAKS).skip(1) {
        let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();
        if fields.len() != FIELDS_PER_ROW {
            if !line.trim().is_empty() {
                dropped_rows += 1;
            }
            continue;
        }

        links.push(QuickLink::new(
            fields[0],
            fields[1],
            optional_field(fields[2]),
            optional_field(fields[3]),
        ));
    }

    QuickLinkParse {
        links,
        dropped_rows,
    }
}

/// Parses tabular quick-link text, silently dropping malformed rows.
pub fn parse_quick_links(text: &str) -> Vec<QuickLink> {
    parse_quick_link_rows(text).links
}

/// Loads quick links from the bundle, exposing lookup/read failures.
///
/// Malformed rows are still dropped per-row; they never fail the load.
///
/// # Errors
/// - `ResourceNotFound` when the tabular resource is missing.
/// - `Read` when it cannot be read as UTF-8 text.
pub fn try_load_quick_links(bundle: &BundleConfig) -> LoadResult<Vec<QuickLink>> {
    let path = bundle.quick_links_path();
    let text = read_resource(&path)?;
    let parsed = parse_quick_link_rows(&text);

    if parsed.dropped_rows > 0 {
        debug!(
            "event=quick_links_rows_dropped module=loader status=partial dropped={} path={}",
            parsed.dropped_rows,
            path.display()
        );
    }
    info!(
        "event=quick_links_load module=loader status=ok count={}",
        parsed.links.len()
    );

    Ok(parsed.links)
}

/// Loads quick links from the bundle, degrading every failure to an empty list.
pub fn load_quick_links(bundle: &BundleConfig) -> Vec<QuickLink> {
    match try_load_quick_links(bundle) {
        Ok(links) => links,
        Err(err) => {
            warn!(
                "event=quick_links_load module=loader status=error kind={} error={}",
                err.kind_label(),
                err
            );
            Vec::new()
        }
    }
}

/// Renders links as a pretty-printed JSON array.
pub fn quick_links_to_json(links: &[QuickLink]) -> LoadResult<String> {
    serde_json::to_string_pretty(links).map_err(LoadError::Encode)
}

fn optional_field(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
