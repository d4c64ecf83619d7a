//! inclint core library.
//!
//! This crate exposes programmatic APIs for checking that `#include` blocks
//! in C sources and headers are alphabetical.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `include`: Include directive recognition.
//! - `order`: Block ordering rules, including the `sys/types.h` exception.
//! - `scan`: Per-file block accumulation and validation.
//! - `filter`: Path exclusion policies.
//! - `lint`: Driver over a list of files.
//! - `models`: Violation and summary records.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod include;
pub mod lint;
pub mod models;
pub mod order;
pub mod output;
pub mod scan;
pub mod utils;

pub use error::LintError;
pub use filter::PathFilter;
pub use models::{LintResult, Violation};
