pub mod json;
pub mod terminal;

use crate::declaration::Declaration;

/// Formats one declaration as one output line, without the newline.
pub trait Reporter {
    fn report(&self, declaration: &Declaration<'_>) -> String;
}
