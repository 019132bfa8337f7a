//! Configuration type definitions.

use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from a configuration file. Command line flags win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roots to scan instead of the interpreter search path.
    pub paths: Vec<PathBuf>,
    /// Interpreter whose `sys.path` is scanned.
    pub python: Option<String>,
    /// Output format: "terminal" or "json".
    pub format: Option<OutputFormat>,
    /// Sort files by name within each directory.
    pub sorted: bool,
    /// Colored kind labels in terminal output.
    pub color: Option<bool>,
}
