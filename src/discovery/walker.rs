//! Directory walking for source file discovery.

use crate::error::{IoOperation, Result, WhatProvidesError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Suffix of Python source files, compared case-insensitively.
pub const SOURCE_SUFFIX: &str = ".py";

/// Byte-code cache directory that is never descended into.
pub const CACHE_DIR: &str = "__pycache__";

/// Configuration for directory walking.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// File name suffix to include, case-insensitive.
    pub suffix: String,
    /// Directory name to skip, case-insensitive.
    pub skip_dir: String,
    /// Sort entries by file name within each directory.
    pub sorted: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            suffix: SOURCE_SUFFIX.to_string(),
            skip_dir: CACHE_DIR.to_string(),
            sorted: false,
        }
    }
}

impl WalkConfig {
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Recursively enumerates source files below a set of roots.
#[derive(Debug, Clone, Default)]
pub struct SourceWalker {
    config: WalkConfig,
}

impl SourceWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Lazily yields source files below each root, one root after another.
    ///
    /// Symbolic links are followed. Dangling links and links looping back to
    /// an ancestor are skipped. Any other directory that cannot be listed
    /// yields an error.
    pub fn walk<I>(self, roots: I) -> impl Iterator<Item = Result<PathBuf>>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        roots.into_iter().flat_map(move |root| {
            let mut walk = WalkDir::new(root.as_ref()).follow_links(true);
            if self.config.sorted {
                walk = walk.sort_by_file_name();
            }

            let skip_dir = self.config.skip_dir.clone();
            let suffix = self.config.suffix.to_lowercase();

            walk.into_iter()
                .filter_entry(move |e| !is_skipped_dir(e, &skip_dir))
                .filter_map(move |entry| match entry {
                    Ok(e) if e.file_type().is_file() && has_suffix(&e, &suffix) => {
                        trace!(file = %e.path().display(), "Discovered source file");
                        Some(Ok(e.into_path()))
                    }
                    Ok(_) => None,
                    Err(e) => walk_error(e).map(Err),
                })
        })
    }
}

/// Turns a traversal failure into a scan error, or `None` when the entry is
/// simply not there.
fn walk_error(err: walkdir::Error) -> Option<WhatProvidesError> {
    if let Some(ancestor) = err.loop_ancestor() {
        warn!(
            path = ?err.path(),
            ancestor = %ancestor.display(),
            "Skipping symlink loop"
        );
        return None;
    }

    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.into_io_error() {
        Some(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Skipping missing entry");
            None
        }
        Some(e) => Some(WhatProvidesError::io(path, IoOperation::Read, e)),
        None => None,
    }
}

fn is_skipped_dir(entry: &DirEntry, skip_dir: &str) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(skip_dir)
}

fn has_suffix(entry: &DirEntry, suffix: &str) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(suffix)
}

/// Keeps only the paths that are existing directories, in input order.
pub fn existing_directories<I>(paths: I) -> impl Iterator<Item = PathBuf>
where
    I: IntoIterator,
    I::Item: Into<PathBuf>,
{
    paths.into_iter().map(Into::into).filter(|path| path.is_dir())
}
