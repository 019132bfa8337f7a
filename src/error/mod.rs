//! Error types for whatprovides.
//!
//! Every fatal condition of a scan is a `WhatProvidesError`. A line or a name
//! that matches nothing is not an error and never shows up here.

mod context;

pub use context::IoOperation;

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhatProvidesError {
    /// A declaration type pattern without the `name` capture group.
    #[error("Pattern `{pattern}` of declaration type `{kind}` does not contain the `name` group")]
    MissingNameGroup { kind: String, pattern: String },

    #[error("Regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run Python interpreter `{interpreter}`: {source}")]
    Interpreter {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Python interpreter `{interpreter}` exited with {status}")]
    InterpreterStatus { interpreter: String, status: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WhatProvidesError {
    pub fn io(path: impl Into<PathBuf>, operation: IoOperation, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// True for errors caused by how the tool was set up rather than by the
    /// files it scanned.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingNameGroup { .. } | Self::RegexError(_) | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WhatProvidesError>;
