//! FFI use-case API for the Flutter directory/portal UI.
//!
//! # Responsibility
//! - Expose load, search, home-grid and tap-dispatch calls to Dart via FRB.
//! - Flatten core records into plain string envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Load failures surface as empty lists plus a diagnostic `message`, never
//!   as an error the UI has to present.
//! - Dart holds loaded items for the view lifetime and passes them back for
//!   filtering; core keeps no per-view state.

use log::warn;
use spark_core::model::new_record_id;
use spark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, links_in_category,
    ping as ping_inner, preview_links, quick_links_to_json, resolve_link_action,
    search_directory as search_directory_inner, try_load_people, try_load_quick_links,
    BundleConfig, LinkAction, LinkCategory, Person, PromptKind, QuickLink, Tint,
    DEFAULT_PREVIEW_LIMIT,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const BUNDLE_DIR_ENV: &str = "SPARK_BUNDLE_DIR";
const DEFAULT_BUNDLE_DIR: &str = "bundle";
static DEFAULT_BUNDLE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Quick link as rendered by the home grids.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickLinkItem {
    pub id: String,
    pub name: String,
    /// Raw category tag (`Dashboard|URL|Access Required|...`).
    pub kind: String,
    pub url: Option<String>,
    pub description: Option<String>,
    /// SF Symbol name for the tile.
    pub icon: String,
    /// Tile tint (`blue|green|gray|secondary`), drawn at `tint_opacity`.
    pub tint: String,
    pub tint_opacity: f32,
}

/// Directory person as rendered by the people list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonItem {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub image_url: String,
    pub url: String,
    pub location: String,
    pub v_card: Option<String>,
}

/// Load response envelope for quick links.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickLinksResponse {
    pub items: Vec<QuickLinkItem>,
    /// Human-readable diagnostic; never shown as an alert.
    pub message: String,
    /// Failure label (`resource_not_found|read_failed|decode_failed|bundle_invalid`).
    pub error_kind: Option<String>,
}

/// Load response envelope for people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleResponse {
    pub items: Vec<PersonItem>,
    pub message: String,
    pub error_kind: Option<String>,
}

/// Unified search response.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySearchResponse {
    pub links: Vec<QuickLinkItem>,
    pub people: Vec<PersonItem>,
    pub message: String,
}

/// Home screen grids derived from loaded links.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeLinksResponse {
    /// "Viewable Examples" favorites grid.
    pub dashboards: Vec<QuickLinkItem>,
    /// "URL Redirects" favorites grid.
    pub url_links: Vec<QuickLinkItem>,
    /// "All Links" grid, capped unless `show_all`.
    pub all_links: Vec<QuickLinkItem>,
    /// Whether a "Show All" control should be offered.
    pub has_more: bool,
}

/// Resolved tap behavior for one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkActionResponse {
    /// One of `dashboard_prompt|access_prompt|open_url|ignore|unknown`.
    pub action: String,
    /// Address to open when `action == "open_url"`.
    pub url: Option<String>,
    pub message: String,
}

/// JSON export envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonExportResponse {
    pub ok: bool,
    pub json: String,
    pub message: String,
}

/// Loads bundled quick links.
///
/// # FFI contract
/// - `bundle_dir = None` uses `SPARK_BUNDLE_DIR` or `./bundle`.
/// - Never panics; missing or unreadable resource yields empty `items`.
#[flutter_rust_bridge::frb(sync)]
pub fn load_quick_links(bundle_dir: Option<String>) -> QuickLinksResponse {
    let result = resolve_bundle(bundle_dir).and_then(|bundle| {
        try_load_quick_links(&bundle)
            .map_err(|err| (err.kind_label(), format!("load_quick_links failed: {err}")))
    });

    match result {
        Ok(links) => QuickLinksResponse {
            message: format!("Loaded {} link(s).", links.len()),
            items: links.iter().map(to_quick_link_item).collect(),
            error_kind: None,
        },
        Err((kind, message)) => {
            warn!("{}", load_failure_event("quick_links", kind, &message));
            QuickLinksResponse {
                items: Vec::new(),
                message,
                error_kind: Some(kind.to_string()),
            }
        }
    }
}

/// Loads bundled directory people.
///
/// # FFI contract
/// - Same bundle resolution as [`load_quick_links`].
/// - Never panics; any decode failure yields empty `items`.
#[flutter_rust_bridge::frb(sync)]
pub fn load_people(bundle_dir: Option<String>) -> PeopleResponse {
    let result = resolve_bundle(bundle_dir).and_then(|bundle| {
        try_load_people(&bundle)
            .map_err(|err| (err.kind_label(), format!("load_people failed: {err}")))
    });

    match result {
        Ok(people) => PeopleResponse {
            message: format!("Loaded {} person record(s).", people.len()),
            items: people.iter().map(to_person_item).collect(),
            error_kind: None,
        },
        Err((kind, message)) => {
            warn!("{}", load_failure_event("people", kind, &message));
            PeopleResponse {
                items: Vec::new(),
                message,
                error_kind: Some(kind.to_string()),
            }
        }
    }
}

/// Filters held items by name for the unified search view.
///
/// Items keep their IDs, so the UI can diff results against held lists.
#[flutter_rust_bridge::frb(sync)]
pub fn search_directory(
    links: Vec<QuickLinkItem>,
    people: Vec<PersonItem>,
    query: String,
) -> DirectorySearchResponse {
    let links = links.iter().map(to_core_link).collect::<Vec<_>>();
    let people = people.iter().map(to_core_person).collect::<Vec<_>>();
    let result = search_directory_inner(&links, &people, &query);

    let message = if result.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", result.total())
    };
    DirectorySearchResponse {
        links: result.links.iter().map(to_quick_link_item).collect(),
        people: result.people.iter().map(to_person_item).collect(),
        message,
    }
}

/// Shapes held links into the home screen grids.
#[flutter_rust_bridge::frb(sync)]
pub fn home_links(links: Vec<QuickLinkItem>, show_all: bool) -> HomeLinksResponse {
    let core_links = links.iter().map(to_core_link).collect::<Vec<_>>();
    let preview = preview_links(&core_links, DEFAULT_PREVIEW_LIMIT, show_all);

    HomeLinksResponse {
        dashboards: category_items(&core_links, &LinkCategory::Dashboard),
        url_links: category_items(&core_links, &LinkCategory::Url),
        all_links: preview.links.iter().map(to_quick_link_item).collect(),
        has_more: preview.has_more,
    }
}

/// Resolves what tapping `link` should do.
#[flutter_rust_bridge::frb(sync)]
pub fn link_action(link: QuickLinkItem) -> LinkActionResponse {
    match resolve_link_action(&to_core_link(&link)) {
        LinkAction::ShowPrompt {
            kind: PromptKind::Dashboard,
            name,
        } => action_response("dashboard_prompt", None, format!("Dashboard: {name}")),
        LinkAction::ShowPrompt {
            kind: PromptKind::AccessRequired,
            name,
        } => action_response("access_prompt", None, format!("Access required: {name}")),
        LinkAction::OpenUrl(url) => action_response("open_url", Some(url), String::new()),
        LinkAction::Ignore => action_response("ignore", None, String::new()),
        LinkAction::UnknownCategory { tag, name } => action_response(
            "unknown",
            None,
            format!("Unknown link type `{tag}` for {name}"),
        ),
    }
}

/// Exports bundled quick links as pretty JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn quick_links_json(bundle_dir: Option<String>) -> JsonExportResponse {
    let result = resolve_bundle(bundle_dir)
        .map_err(|(_, message)| message)
        .and_then(|bundle| try_load_quick_links(&bundle).map_err(|err| err.to_string()))
        .and_then(|links| quick_links_to_json(&links).map_err(|err| err.to_string()));

    match result {
        Ok(json) => JsonExportResponse {
            ok: true,
            json,
            message: String::new(),
        },
        Err(err) => JsonExportResponse {
            ok: false,
            json: String::new(),
            message: format!("quick_links_json failed: {err}"),
        },
    }
}

fn resolve_bundle(bundle_dir: Option<String>) -> Result<BundleConfig, (&'static str, String)> {
    let root = match bundle_dir {
        Some(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => default_bundle_path(),
    };
    BundleConfig::new(root)
        .map_err(|err| ("bundle_invalid", format!("bundle config invalid: {err}")))
}

fn load_failure_event(resource: &str, kind: &str, message: &str) -> String {
    format!("event=ffi_load module=ffi status=error resource={resource} kind={kind} error={message}")
}

fn default_bundle_path() -> PathBuf {
    DEFAULT_BUNDLE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(BUNDLE_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            PathBuf::from(DEFAULT_BUNDLE_DIR)
        })
        .clone()
}

fn category_items(links: &[QuickLink], category: &LinkCategory) -> Vec<QuickLinkItem> {
    links_in_category(links, category)
        .iter()
        .map(to_quick_link_item)
        .collect()
}

fn action_response(action: &str, url: Option<String>, message: String) -> LinkActionResponse {
    LinkActionResponse {
        action: action.to_string(),
        url,
        message,
    }
}

fn to_quick_link_item(link: &QuickLink) -> QuickLinkItem {
    let category = link.category();
    QuickLinkItem {
        id: link.id.to_string(),
        name: link.name.clone(),
        kind: link.kind.clone(),
        url: link.url.clone(),
        description: link.description.clone(),
        icon: category.icon().to_string(),
        tint: tint_label(category.tint()).to_string(),
        tint_opacity: spark_core::TINT_OPACITY,
    }
}

fn to_core_link(item: &QuickLinkItem) -> QuickLink {
    let mut link = QuickLink::new(
        item.name.clone(),
        item.kind.clone(),
        item.url.clone(),
        item.description.clone(),
    );
    if let Ok(id) = Uuid::parse_str(&item.id) {
        link.id = id;
    }
    link
}

fn to_core_person(item: &PersonItem) -> Person {
    Person {
        id: Uuid::parse_str(&item.id).unwrap_or_else(|_| new_record_id()),
        name: item.name.clone(),
        position: item.position.clone(),
        email: item.email.clone(),
        phone: item.phone.clone(),
        image_url: item.image_url.clone(),
        url: item.url.clone(),
        location: item.location.clone(),
        v_card: item.v_card.clone(),
    }
}

fn to_person_item(person: &Person) -> PersonItem {
    PersonItem {
        id: person.id.to_string(),
        name: person.name.clone(),
        position: person.position.clone(),
        email: person.email.clone(),
        phone: person.phone.clone(),
        image_url: person.image_url.clone(),
        url: person.url.clone(),
        location: person.location.clone(),
        v_card: person.v_card.clone(),
    }
}

fn tint_label(tint: Tint) -> &'static str {
    match tint {
        Tint::Blue => "blue",
        Tint::Green => "green",
        Tint::Gray => "gray",
        Tint::Secondary => "secondary",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, home_links, init_logging, link_action, load_failure_event, load_people,
        load_quick_links, ping, quick_links_json, search_directory,
    };
    use std::fs;

    const LINKS_CSV: &str = "name,type,url,description
Acme Dashboard,Dashboard,,Numbers
acme Portal,URL,https://portal.acme.example.com,
Other,Access Required,,
Wiki,Knowledge,,
Payroll,URL,https://payroll.example.com,
Benefits,URL,https://benefits.example.com,";

    fn bundle_dir() -> (tempfile::TempDir, Option<String>) {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("LinksData.csv"), LINKS_CSV).expect("write csv");
        fs::write(
            dir.path().join("people.json"),
            r#"[{"name":"Ada Acme","position":"Partner","email":"a@example.com",
                 "phone":"1","imageURL":"i","url":"u","location":"Austin"}]"#,
        )
        .expect("write json");
        let path = dir.path().to_str().map(str::to_string);
        (dir, path)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn load_quick_links_flattens_records() {
        let (_dir, bundle) = bundle_dir();
        let response = load_quick_links(bundle);
        assert_eq!(response.items.len(), 6);
        assert_eq!(response.items[0].icon, "chart.bar");
        assert_eq!(response.items[0].tint, "blue");
        assert_eq!(response.items[3].icon, "questionmark.circle");
    }

    #[test]
    fn missing_bundle_yields_empty_items_with_message() {
        let dir = tempfile::tempdir().expect("temp dir");
        let bundle = dir.path().to_str().map(str::to_string);

        let links = load_quick_links(bundle.clone());
        assert!(links.items.is_empty());
        assert!(links.message.contains("not found"));

        let people = load_people(bundle);
        assert!(people.items.is_empty());
        assert!(people.message.contains("load_people failed"));
    }

    #[test]
    fn search_filters_held_items() {
        let (_dir, bundle) = bundle_dir();
        let links = load_quick_links(bundle.clone()).items;
        let people = load_people(bundle).items;

        let response = search_directory(links.clone(), people.clone(), "ACME".to_string());
        assert_eq!(response.links.len(), 2);
        assert_eq!(response.people.len(), 1);

        assert_eq!(response.links[0].id, links[0].id);
        assert_eq!(response.people[0].id, people[0].id);
        assert_eq!(response.message, "Found 3 result(s).");

        let everything = search_directory(links.clone(), people, String::new());
        assert_eq!(everything.links, links);
    }

    #[test]
    fn search_with_no_hits_reports_no_results() {
        let (_dir, bundle) = bundle_dir();
        let links = load_quick_links(bundle.clone()).items;
        let people = load_people(bundle).items;

        let response = search_directory(links, people, "zzz".to_string());
        assert!(response.links.is_empty());
        assert!(response.people.is_empty());
        assert_eq!(response.message, "No results.");
    }

    #[test]
    fn load_failure_event_carries_error_kind() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("people.json"), "{ not json").expect("write json");
        let bundle = dir.path().to_str().map(str::to_string);

        let response = load_people(bundle.clone());
        assert!(response.items.is_empty());
        assert_eq!(response.error_kind.as_deref(), Some("decode_failed"));

        let links = load_quick_links(bundle);
        assert_eq!(links.error_kind.as_deref(), Some("resource_not_found"));

        let kind = response.error_kind.as_deref().unwrap_or_default();
        let event = load_failure_event("people", kind, &response.message);
        assert!(event.contains("status=error"));
        assert!(event.contains("resource=people"));
        assert!(event.contains("kind=decode_failed"));
        assert!(event.contains("load_people failed"));
    }

    #[test]
    fn home_links_builds_grids_and_keeps_ids() {
        let (_dir, bundle) = bundle_dir();
        let links = load_quick_links(bundle).items;

        let home = home_links(links.clone(), false);
        assert_eq!(home.dashboards.len(), 1);
        assert_eq!(home.url_links.len(), 3);
        assert_eq!(home.all_links.len(), 5);
        assert!(home.has_more);
        assert_eq!(home.all_links[0].id, links[0].id);

        let expanded = home_links(links, true);
        assert_eq!(expanded.all_links.len(), 6);
        assert!(!expanded.has_more);
    }

    #[test]
    fn link_action_maps_every_category() {
        let (_dir, bundle) = bundle_dir();
        let links = load_quick_links(bundle).items;
        let actions = links
            .into_iter()
            .map(|link| link_action(link).action)
            .collect::<Vec<_>>();
        assert_eq!(
            actions,
            vec![
                "dashboard_prompt",
                "open_url",
                "access_prompt",
                "unknown",
                "open_url",
                "open_url"
            ]
        );
    }

    #[test]
    fn quick_links_json_exports_pretty_array() {
        let (_dir, bundle) = bundle_dir();
        let response = quick_links_json(bundle);
        assert!(response.ok, "{}", response.message);
        assert!(response.json.starts_with('['));
        assert!(response.json.contains("\"type\": \"Dashboard\""));
    }
}
