//! CLI command handlers

pub mod commands;

pub use commands::{extract, rearrange, to_excel};
