//! Name and kind filters over declaration streams.
//!
//! Every filter is lazy and order-preserving. Filters accept either plain
//! declarations or the `Result` items of a scan; errors always pass through so
//! that a failing scan still surfaces its error.

use crate::declaration::{CLASS, DEF, Declaration, DeclarationType, Registry, VAR};
use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// Anything a filter can look at.
pub trait AsDeclaration<'r> {
    /// The declaration, or `None` for items that must pass untouched.
    fn as_declaration(&self) -> Option<&Declaration<'r>>;
}

impl<'r> AsDeclaration<'r> for Declaration<'r> {
    fn as_declaration(&self) -> Option<&Declaration<'r>> {
        Some(self)
    }
}

impl<'r, E> AsDeclaration<'r> for std::result::Result<Declaration<'r>, E> {
    fn as_declaration(&self) -> Option<&Declaration<'r>> {
        self.as_ref().ok()
    }
}

/// How a search term is compared against declaration names.
#[derive(Debug, Clone)]
pub enum NameFilter {
    /// Exact-case substring.
    Substring(String),
    /// Substring after lower-casing both sides. Holds the lower-cased term.
    IgnoreCase(String),
    /// Unanchored regular expression.
    Pattern(Regex),
}

impl NameFilter {
    pub fn substring(term: impl Into<String>) -> Self {
        Self::Substring(term.into())
    }

    pub fn ignore_case(term: &str) -> Self {
        Self::IgnoreCase(term.to_lowercase())
    }

    pub fn pattern(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }

    /// Picks the strategy from the command line switches.
    ///
    /// With both switches set the pattern is compiled case-insensitively.
    pub fn from_options(term: &str, regex: bool, ignore_case: bool) -> Result<Self> {
        let filter = match (regex, ignore_case) {
            (true, ignore_case) => Self::Pattern(
                RegexBuilder::new(term)
                    .case_insensitive(ignore_case)
                    .build()?,
            ),
            (false, true) => Self::ignore_case(term),
            (false, false) => Self::substring(term),
        };
        Ok(filter)
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Substring(term) => name.contains(term.as_str()),
            Self::IgnoreCase(term) => name.to_lowercase().contains(term.as_str()),
            Self::Pattern(pattern) => pattern.is_match(name),
        }
    }

    /// Keeps the declarations whose name matches.
    pub fn apply<'r, I>(self, declarations: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: AsDeclaration<'r>,
    {
        declarations.into_iter().filter(move |item| {
            item.as_declaration()
                .is_none_or(|declaration| self.matches(&declaration.name))
        })
    }
}

/// Restricts a stream to a set of declaration kinds, compared by identity.
///
/// An empty set lets everything through.
#[derive(Debug, Clone, Default)]
pub struct KindFilter<'r> {
    kinds: Vec<&'r DeclarationType>,
}

impl<'r> KindFilter<'r> {
    pub fn new(kinds: Vec<&'r DeclarationType>) -> Self {
        Self { kinds }
    }

    /// Builds the filter from the variables / functions / classes switches.
    ///
    /// No switch and every switch both mean "all kinds". Every selected kind
    /// must be registered, otherwise the filter would silently widen to a
    /// passthrough.
    pub fn from_flags(registry: &'r Registry, variables: bool, functions: bool, classes: bool) -> Self {
        if variables && functions && classes {
            return Self::default();
        }

        let selected: Vec<_> = [(variables, VAR), (functions, DEF), (classes, CLASS)]
            .into_iter()
            .filter(|(selected, _)| *selected)
            .map(|(_, kind)| kind)
            .collect();
        let kinds: Vec<_> = selected.iter().filter_map(|kind| registry.get(kind)).collect();
        debug_assert_eq!(
            kinds.len(),
            selected.len(),
            "registry lacks a selected kind: {selected:?}"
        );
        Self::new(kinds)
    }

    pub fn is_passthrough(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn matches(&self, declaration_type: &DeclarationType) -> bool {
        self.is_passthrough() || self.kinds.iter().any(|kept| kept.is(declaration_type))
    }

    /// Keeps the declarations of the selected kinds.
    pub fn apply<I>(self, declarations: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: AsDeclaration<'r>,
    {
        declarations.into_iter().filter(move |item| {
            item.as_declaration()
                .is_none_or(|declaration| self.matches(declaration.declaration_type))
        })
    }
}
