//! img3info
//!
//! Thin CLI frontend around `img3-core` (exposed in code as `img3_core`).
//! File acquisition, output streaming and exit-status mapping live here; all
//! decoding lives in the core crate.

pub mod commands;

/// Name used in the usage line.
pub const PROGRAM_NAME: &str = "img3info";
