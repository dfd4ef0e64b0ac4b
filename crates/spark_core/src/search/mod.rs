//! In-memory search over loaded records.
//!
//! # Responsibility
//! - Serve filtered views of quick links, people and reference lists.
//! - Keep home-screen shaping (category grids, preview cap) inside core.

pub mod filter;
pub mod home;
