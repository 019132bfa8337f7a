//! Resolution of the root directories to scan.

use crate::config::Config;
use crate::discovery::existing_directories;
use crate::error::{Result, WhatProvidesError};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

pub const DEFAULT_INTERPRETER: &str = "python3";

/// Prints one `sys.path` entry per line.
const PRINT_SYS_PATH: &str = "import sys\nfor entry in sys.path:\n    print(entry)";

/// Asks `interpreter` for its module search path.
pub fn interpreter_search_path(interpreter: &str) -> Result<Vec<PathBuf>> {
    debug!(interpreter, "Querying interpreter search path");
    let output = Command::new(interpreter)
        .args(["-c", PRINT_SYS_PATH])
        .output()
        .map_err(|e| WhatProvidesError::Interpreter {
            interpreter: interpreter.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(WhatProvidesError::InterpreterStatus {
            interpreter: interpreter.to_string(),
            status: output.status.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(PathBuf::from)
        .collect())
}

/// Entries of the `PYTHONPATH` environment variable.
pub fn env_search_path() -> Vec<PathBuf> {
    env::var_os("PYTHONPATH")
        .map(|value| env::split_paths(&value).collect())
        .unwrap_or_default()
}

/// Where the roots of a scan come from.
#[derive(Debug, Clone, Default)]
pub struct RootSources {
    /// Explicit roots from the command line.
    pub paths: Vec<PathBuf>,
    /// Interpreter from the command line.
    pub python: Option<String>,
}

impl RootSources {
    /// Candidate roots, before dropping non-directories.
    ///
    /// Explicit paths win over configured paths, which win over the
    /// interpreter search path. `PYTHONPATH` is the last resort when the
    /// interpreter cannot be run.
    pub fn candidates(&self, config: &Config) -> Vec<PathBuf> {
        if !self.paths.is_empty() {
            return self.paths.clone();
        }
        if !config.paths.is_empty() {
            return config.paths.clone();
        }

        let interpreter = self
            .python
            .as_deref()
            .or(config.python.as_deref())
            .unwrap_or(DEFAULT_INTERPRETER);

        match interpreter_search_path(interpreter) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(error = %e, "Falling back to PYTHONPATH");
                env_search_path()
            }
        }
    }

    /// Existing root directories, in search path order.
    pub fn resolve(&self, config: &Config) -> Vec<PathBuf> {
        let roots: Vec<_> = existing_directories(self.candidates(config)).collect();
        info!(roots = roots.len(), "Resolved search roots");
        roots
    }
}
