//! img3-core
//!
//! Core library for inspecting Apple IMG3 firmware containers.
//!
//! This crate defines the container decoder (header decode plus the guarded
//! section-chain walk) and the report formatting used by frontends.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, other tooling, etc.).

pub mod img3;
pub mod report;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
