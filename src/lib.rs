//! Trylint core library.
//!
//! This crate exposes programmatic APIs for trialing a candidate set of
//! ESLint rules against a codebase and rendering the aggregated per-rule
//! impact.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `rules`: Candidate rules file loading (JSON/JSONC).
//! - `lint`: Lint execution adapter and the engine seam.
//! - `aggregate`: Folding raw findings into per-rule summaries.
//! - `models`: Data models for the run and both reports.
//! - `output`: Console report rendering and sort modes.
//! - `report`: Standalone HTML report rendering.
//! - `utils`: Console prefixes and color gating.
pub mod aggregate;
pub mod cli;
pub mod lint;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod utils;
