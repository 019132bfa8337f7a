//! Composition of the scan pipeline.
//!
//! roots -> source files -> numbered lines -> declarations -> name filter ->
//! kind filter. Every stage pulls from the previous one on demand.

use crate::declaration::{Declaration, Registry, extract};
use crate::discovery::SourceWalker;
use crate::error::Result;
use crate::filter::{KindFilter, NameFilter};
use crate::reader::read_lines;
use std::path::PathBuf;
use tracing::debug;

pub struct Scan<'r> {
    registry: &'r Registry,
    walker: SourceWalker,
    name_filter: NameFilter,
    kind_filter: KindFilter<'r>,
}

impl<'r> Scan<'r> {
    /// A scan reporting every declaration below the roots.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            walker: SourceWalker::default(),
            name_filter: NameFilter::substring(""),
            kind_filter: KindFilter::default(),
        }
    }

    pub fn with_walker(mut self, walker: SourceWalker) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_name_filter(mut self, filter: NameFilter) -> Self {
        self.name_filter = filter;
        self
    }

    pub fn with_kind_filter(mut self, filter: KindFilter<'r>) -> Self {
        self.kind_filter = filter;
        self
    }

    /// Lazily scans `roots`.
    ///
    /// The first I/O error is yielded and ends the stream.
    pub fn run<I>(self, roots: I) -> impl Iterator<Item = Result<Declaration<'r>>> + 'r
    where
        I: IntoIterator<Item = PathBuf> + 'r,
    {
        debug!(
            name_filter = ?self.name_filter,
            kinds_filtered = !self.kind_filter.is_passthrough(),
            "Starting scan"
        );
        let files = self.walker.walk(roots);
        let declarations = extract(self.registry, read_lines(files));
        self.kind_filter
            .apply(self.name_filter.apply(declarations))
    }
}
