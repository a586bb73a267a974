//! Step log export.

pub mod json;

pub use json::JsonExporter;
