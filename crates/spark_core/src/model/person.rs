//! Directory-person record.
//!
//! # Invariants
//! - Every field except `v_card` is required when decoding.
//! - Unknown keys in source objects are ignored.

use serde::{Deserialize, Serialize};

use super::{new_record_id, stable_id_for, RecordId};

/// Static contact entry rendered in the people list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Generated at load time; never present in source data.
    #[serde(skip_deserializing, default = "new_record_id")]
    pub id: RecordId,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub url: String,
    pub location: String,
    /// Raw vCard payload, when the directory provides one.
    #[serde(rename = "vCard", default)]
    pub v_card: Option<String>,
}

impl Person {
    /// Returns an ID derived from `name` that is equal across reloads.
    pub fn stable_id(&self) -> RecordId {
        stable_id_for(&self.name)
    }
}
