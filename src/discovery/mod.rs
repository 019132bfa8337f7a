//! Source file discovery.
//!
//! This module handles:
//! - Filtering candidate roots down to existing directories
//! - Recursive traversal of each root, skipping byte-code caches
//! - Source suffix matching

pub mod walker;

pub use walker::{CACHE_DIR, SOURCE_SUFFIX, SourceWalker, WalkConfig, existing_directories};
