//! oaslint core library.
//!
//! This crate exposes programmatic APIs for linting OpenAPI 3.x documents
//! decoded from JSON.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `document`: Loading, load errors, and shape helpers.
//! - `checks`: Rule registry and the individual rule checkers.
//! - `lint`: Runs rules, applies strict mode, and summarizes.
//! - `models`: Findings, severities, and summary structs.
//! - `output`: Text/JSON printers.
//! - `utils`: Stderr prefixes and logging setup.
pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod lint;
pub mod models;
pub mod output;
pub mod utils;
