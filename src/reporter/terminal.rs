use crate::declaration::{CLASS, DEF, Declaration, VAR};
use crate::reporter::Reporter;
use colored::Colorize;

/// `<kind>: <name>: <path>` lines.
pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn kind_label(&self, kind: &str) -> String {
        if !self.color {
            return kind.to_string();
        }
        match kind {
            VAR => kind.green().to_string(),
            DEF => kind.cyan().to_string(),
            CLASS => kind.yellow().bold().to_string(),
            _ => kind.normal().to_string(),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, declaration: &Declaration<'_>) -> String {
        format!(
            "{}: {}: {}",
            self.kind_label(declaration.kind()),
            declaration.name,
            declaration.path.display()
        )
    }
}
