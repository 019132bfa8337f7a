//! Search the Python module search path for top-level declarations.
//!
//! Source files are streamed through a lazy pipeline:
//! discovery -> line reader -> declaration extractor -> filters -> reporter.

pub mod cli;
pub mod config;
pub mod declaration;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod reader;
pub mod reporter;
pub mod scan;
pub mod search_path;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError};
pub use declaration::{Declaration, DeclarationType, FileLine, Registry, extract};
pub use discovery::{SourceWalker, WalkConfig, existing_directories};
pub use error::{IoOperation, Result, WhatProvidesError};
pub use filter::{AsDeclaration, KindFilter, NameFilter};
pub use reader::{FileLines, SourcePath, read_lines};
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use scan::Scan;
pub use search_path::RootSources;
