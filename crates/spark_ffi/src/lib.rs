//! Flutter-facing bindings for `spark_core`.

pub mod api;
