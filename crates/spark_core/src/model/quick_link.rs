//! Quick-link record.
//!
//! # Responsibility
//! - Define the named shortcut shown on the home screen grids.
//! - Links are only built from tabular rows; JSON is export-only.
//!
//! # Invariants
//! - `url` and `description` are `None` rather than empty strings.
//! - `kind` keeps the raw tag; `category()` is the typed view of it.

use serde::Serialize;

use super::category::LinkCategory;
use super::{new_record_id, stable_id_for, RecordId};

/// Named shortcut entry with a category tag controlling its icon and action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    /// Generated at load time; never present in source data.
    pub id: RecordId,
    /// Display label.
    pub name: String,
    /// Serialized as `type` to match the bundled resource naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl QuickLink {
    /// Creates a link with a generated per-load ID.
    ///
    /// Empty `url`/`description` values are normalized to `None`.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        url: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            kind: kind.into(),
            url: url.filter(|value| !value.is_empty()),
            description: description.filter(|value| !value.is_empty()),
        }
    }

    /// Returns the typed category for this link's tag.
    pub fn category(&self) -> LinkCategory {
        LinkCategory::from_tag(&self.kind)
    }

    /// Returns an ID derived from `name` that is equal across reloads.
    pub fn stable_id(&self) -> RecordId {
        stable_id_for(&self.name)
    }
}
