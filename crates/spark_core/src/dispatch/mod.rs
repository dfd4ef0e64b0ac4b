//! Quick-link tap dispatch.
//!
//! # Responsibility
//! - Map a link category to its icon, tint and tap action.
//! - Leave rendering and navigation to the UI; core only decides.

pub mod link_action;
