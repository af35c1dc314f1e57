//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each scrambler command,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod check;
pub mod list;
pub mod run;

pub use check::check_operation;
pub use list::list_operation;
pub use run::{scramble_operation, unscramble_operation};

use crate::program::Program;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and parse an operations file
pub fn load_program(path: &Path) -> Result<Program> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read operations file: {}", path.display()))?;
    Program::parse(&text)
        .with_context(|| format!("Failed to parse operations file: {}", path.display()))
}
