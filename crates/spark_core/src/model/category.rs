//! Quick-link category tags.
//!
//! # Invariants
//! - Parsing is exact and case-sensitive; any other tag becomes `Unknown`
//!   with the raw value preserved.
//! - `as_tag()` returns the original wire value for every variant.

use std::fmt::{Display, Formatter};

/// Wire tag for dashboard links.
pub const TAG_DASHBOARD: &str = "Dashboard";
/// Wire tag for external URL links.
pub const TAG_URL: &str = "URL";
/// Wire tag for links that need access approval.
pub const TAG_ACCESS_REQUIRED: &str = "Access Required";

/// Category parsed from a quick-link `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    /// Viewable dashboard example; tapping shows a prompt.
    Dashboard,
    /// External address; tapping opens it.
    Url,
    /// Gated resource; tapping shows a prompt.
    AccessRequired,
    /// Unrecognized tag, kept verbatim.
    Unknown(String),
}

impl LinkCategory {
    /// Parses a raw `type` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            TAG_DASHBOARD => Self::Dashboard,
            TAG_URL => Self::Url,
            TAG_ACCESS_REQUIRED => Self::AccessRequired,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the wire tag for this category.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Dashboard => TAG_DASHBOARD,
            Self::Url => TAG_URL,
            Self::AccessRequired => TAG_ACCESS_REQUIRED,
            Self::Unknown(tag) => tag.as_str(),
        }
    }

    /// Returns whether this tag was not recognized.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl Display for LinkCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
