//! Record shapes served to the directory/portal UI.
//!
//! # Responsibility
//! - Define quick-link and directory-person records decoded from bundled
//!   resources.
//! - Define the closed category enumeration behind a quick-link `type` tag.
//!
//! # Invariants
//! - Records are read-only snapshots; nothing in core mutates them after load.
//! - `RecordId` is generated per load and is not stable across reloads.
//!   Use `stable_id()` when identity must survive a reload.

pub mod category;
pub mod person;
pub mod quick_link;

use uuid::Uuid;

/// Per-load identifier attached to every record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Generates a fresh per-load record identifier.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4()
}

/// Derives an identifier from a record name that stays equal across reloads.
pub fn stable_id_for(name: &str) -> RecordId {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}
