use crate::error::{Result, WhatProvidesError};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Capture group every declaration pattern must define.
pub const NAME_GROUP: &str = "name";

/// A kind of top-level declaration and the pattern recognizing it.
///
/// Types are compared by identity, never by value: a declaration belongs to a
/// kind only if it borrows that exact instance from the registry.
#[derive(Debug)]
pub struct DeclarationType {
    kind: String,
    pattern: Regex,
}

impl DeclarationType {
    /// Creates a declaration type, failing if `pattern` has no `name` group.
    pub fn new(kind: impl Into<String>, pattern: Regex) -> Result<Self> {
        let kind = kind.into();
        if !pattern.capture_names().flatten().any(|n| n == NAME_GROUP) {
            return Err(WhatProvidesError::MissingNameGroup {
                kind,
                pattern: pattern.as_str().to_string(),
            });
        }
        Ok(Self { kind, pattern })
    }

    /// Compiles `pattern` and creates a declaration type from it.
    pub fn from_pattern(kind: impl Into<String>, pattern: &str) -> Result<Self> {
        Self::new(kind, Regex::new(pattern)?)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the declared name if `line` matches, `None` otherwise.
    ///
    /// An empty capture counts as no match.
    pub fn search<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.name(NAME_GROUP))
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Identity comparison against another registry instance.
    pub fn is(&self, other: &DeclarationType) -> bool {
        std::ptr::eq(self, other)
    }
}

impl std::fmt::Display for DeclarationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind)
    }
}

/// One line of a source file.
#[derive(Debug, Clone)]
pub struct FileLine {
    pub path: Arc<Path>,
    /// Zero-based, reset for every file.
    pub line_number: usize,
    /// Raw text including the line terminator.
    pub text: String,
}

impl FileLine {
    pub fn new(path: impl Into<Arc<Path>>, line_number: usize, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line_number,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for FileLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.line_number,
            self.path.display(),
            self.text.trim_end()
        )
    }
}

/// A declaration found in a source file.
#[derive(Debug, Clone)]
pub struct Declaration<'r> {
    pub declaration_type: &'r DeclarationType,
    pub name: String,
    pub path: Arc<Path>,
    pub line_number: usize,
}

impl<'r> Declaration<'r> {
    pub fn new(
        declaration_type: &'r DeclarationType,
        name: impl Into<String>,
        path: impl Into<Arc<Path>>,
        line_number: usize,
    ) -> Self {
        Self {
            declaration_type,
            name: name.into(),
            path: path.into(),
            line_number,
        }
    }

    pub fn kind(&self) -> &str {
        self.declaration_type.kind()
    }

    /// Serializable view used by machine-readable output.
    pub fn record(&self) -> DeclarationRecord<'_> {
        DeclarationRecord {
            kind: self.kind(),
            name: &self.name,
            path: self.path.display().to_string(),
            line: self.line_number,
        }
    }
}

impl std::fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.kind(), self.name, self.path.display())
    }
}

#[derive(Debug, Serialize)]
pub struct DeclarationRecord<'a> {
    pub kind: &'a str,
    pub name: &'a str,
    pub path: String,
    pub line: usize,
}
