//! Category-to-behavior dispatch for quick links.
//!
//! # Invariants
//! - Every `LinkCategory` variant maps to exactly one icon, tint and action.
//! - Unknown categories resolve to `LinkAction::UnknownCategory`, never to a
//!   silent default.
//! - A URL link with a missing or malformed address resolves to
//!   `LinkAction::Ignore`.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::category::LinkCategory;
use crate::model::quick_link::QuickLink;

/// Background opacity applied to every category tint.
pub const TINT_OPACITY: f32 = 0.1;

// RFC 3986 scheme, then a non-empty, whitespace-free rest. A bare `//` with
// nothing after it (`https://`) is not an address.
static ABSOLUTE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:(?://\S+|/?[^/\s]\S*)$")
        .expect("valid absolute url regex")
});

/// Display tint for a link tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Green,
    Gray,
    Secondary,
}

/// Which informational prompt to show instead of navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Dashboard,
    AccessRequired,
}

/// Resolved tap behavior for one quick link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Show an informational prompt; no navigation.
    ShowPrompt { kind: PromptKind, name: String },
    /// Open the address as an external navigation target.
    OpenUrl(String),
    /// URL link without a usable address.
    Ignore,
    /// Tag was not recognized.
    UnknownCategory { tag: String, name: String },
}

impl LinkCategory {
    /// SF Symbol name rendered for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "chart.bar",
            Self::Url => "link",
            Self::AccessRequired => "lock",
            Self::Unknown(_) => "questionmark.circle",
        }
    }

    pub fn tint(&self) -> Tint {
        match self {
            Self::Dashboard => Tint::Blue,
            Self::Url => Tint::Green,
            Self::AccessRequired => Tint::Gray,
            Self::Unknown(_) => Tint::Secondary,
        }
    }
}

/// Returns whether `raw` is an absolute `scheme:...` address, e.g.
/// `https://host`, `mailto:user@host`, `tel:+1...` or `file:///path`.
pub fn is_valid_address(raw: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(raw)
}

/// Resolves what tapping `link` should do.
pub fn resolve_link_action(link: &QuickLink) -> LinkAction {
    match link.category() {
        LinkCategory::Dashboard => LinkAction::ShowPrompt {
            kind: PromptKind::Dashboard,
            name: link.name.clone(),
        },
        LinkCategory::AccessRequired => LinkAction::ShowPrompt {
            kind: PromptKind::AccessRequired,
            name: link.name.clone(),
        },
        LinkCategory::Url => match link.url.as_deref() {
            Some(address) if is_valid_address(address) => LinkAction::OpenUrl(address.to_string()),
            _ => LinkAction::Ignore,
        },
        LinkCategory::Unknown(tag) => {
            warn!("event=link_dispatch module=dispatch status=unknown_category tag={tag}");
            LinkAction::UnknownCategory {
                tag,
                name: link.name.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_address, resolve_link_action, LinkAction, PromptKind, Tint};
    use crate::model::category::LinkCategory;
    use crate::model::quick_link::QuickLink;

    fn link(kind: &str, url: Option<&str>) -> QuickLink {
        QuickLink::new("Tile", kind, url.map(str::to_string), None)
    }

    #[test]
    fn dashboard_and_access_show_prompts() {
        assert_eq!(
            resolve_link_action(&link("Dashboard", Some("https://x.example.com"))),
            LinkAction::ShowPrompt {
                kind: PromptKind::Dashboard,
                name: "Tile".to_string(),
            }
        );
        assert_eq!(
            resolve_link_action(&link("Access Required", None)),
            LinkAction::ShowPrompt {
                kind: PromptKind::AccessRequired,
                name: "Tile".to_string(),
            }
        );
    }

    #[test]
    fn url_opens_valid_address() {
        assert_eq!(
            resolve_link_action(&link("URL", Some("https://mail.example.com/inbox"))),
            LinkAction::OpenUrl("https://mail.example.com/inbox".to_string())
        );
    }

    #[test]
    fn url_opens_mail_and_phone_addresses() {
        assert_eq!(
            resolve_link_action(&link("URL", Some("mailto:help@example.com"))),
            LinkAction::OpenUrl("mailto:help@example.com".to_string())
        );
        assert_eq!(
            resolve_link_action(&link("URL", Some("tel:+15125550100"))),
            LinkAction::OpenUrl("tel:+15125550100".to_string())
        );
    }

    #[test]
    fn url_ignores_missing_or_malformed_address() {
        assert_eq!(resolve_link_action(&link("URL", None)), LinkAction::Ignore);
        assert_eq!(
            resolve_link_action(&link("URL", Some("not a url"))),
            LinkAction::Ignore
        );
    }

    #[test]
    fn unknown_tag_is_explicit() {
        assert_eq!(
            resolve_link_action(&link("Wiki", None)),
            LinkAction::UnknownCategory {
                tag: "Wiki".to_string(),
                name: "Tile".to_string(),
            }
        );
    }

    #[test]
    fn icons_and_tints_cover_every_category() {
        let cases = [
            (LinkCategory::Dashboard, "chart.bar", Tint::Blue),
            (LinkCategory::Url, "link", Tint::Green),
            (LinkCategory::AccessRequired, "lock", Tint::Gray),
            (
                LinkCategory::Unknown("x".to_string()),
                "questionmark.circle",
                Tint::Secondary,
            ),
        ];
        for (category, icon, tint) in cases {
            assert_eq!(category.icon(), icon);
            assert_eq!(category.tint(), tint);
        }
    }

    #[test]
    fn address_validation() {
        assert!(is_valid_address("https://example.com"));
        assert!(is_valid_address("mailto+x://host/path?q=1"));
        assert!(is_valid_address("mailto:help@example.com"));
        assert!(is_valid_address("tel:+1-512-555-0100"));
        assert!(is_valid_address("file:///tmp/x"));
        assert!(!is_valid_address("example.com"));
        assert!(!is_valid_address("https://"));
        assert!(!is_valid_address("https://exa mple.com"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("mailto:"));
        assert!(!is_valid_address("tel:+1 512"));
    }
}
