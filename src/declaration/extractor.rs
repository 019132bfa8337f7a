use crate::declaration::registry::Registry;
use crate::declaration::types::{Declaration, FileLine};
use crate::error::Result;
use tracing::trace;

impl Registry {
    /// Classifies a single line, producing at most one declaration.
    pub fn declaration_of(&self, line: &FileLine) -> Option<Declaration<'_>> {
        self.classify(&line.text).map(|(declaration_type, name)| {
            trace!(
                file = %line.path.display(),
                line = line.line_number,
                kind = declaration_type.kind(),
                name,
                "Declaration found"
            );
            Declaration::new(
                declaration_type,
                name,
                line.path.clone(),
                line.line_number,
            )
        })
    }
}

/// Turns a stream of lines into a stream of declarations.
///
/// Lines that match no declaration type are dropped. Errors are passed
/// through untouched so that the consumer sees them in order.
pub fn extract<'r, I>(
    registry: &'r Registry,
    lines: I,
) -> impl Iterator<Item = Result<Declaration<'r>>> + 'r
where
    I: IntoIterator<Item = Result<FileLine>>,
    I::IntoIter: 'r,
{
    lines
        .into_iter()
        .filter_map(move |line| match line {
            Ok(line) => registry.declaration_of(&line).map(Ok),
            Err(e) => Some(Err(e)),
        })
}
