//! Person loader for the bundled structured resource.
//!
//! # Invariants
//! - The whole array decodes in one shot; one bad element fails the set.
//! - Output order equals array order.

use log::{info, warn};

use super::{read_resource, LoadResult};
use crate::bundle::BundleConfig;
use crate::model::person::Person;

/// Decodes a JSON array of person records.
///
/// # Errors
/// - `Decode` when the text is not an array of valid person objects.
pub fn parse_people(text: &str) -> LoadResult<Vec<Person>> {
    Ok(serde_json::from_str::<Vec<Person>>(text)?)
}

/// Loads people from the bundle, exposing the typed failure.
pub fn try_load_people(bundle: &BundleConfig) -> LoadResult<Vec<Person>> {
    let path = bundle.people_path();
    let text = read_resource(&path)?;
    let people = parse_people(&text).map_err(|err| err.with_path(&path))?;

    info!(
        "event=people_load module=loader status=ok count={}",
        people.len()
    );
    Ok(people)
}

/// Loads people from the bundle; any failure yields an empty list.
pub fn load_people(bundle: &BundleConfig) -> Vec<Person> {
    try_load_people(bundle).unwrap_or_else(|err| {
        warn!(
            "event=people_load module=loader status=error kind={} error={}",
            err.kind_label(),
            err
        );
        Vec::new()
    })
}
