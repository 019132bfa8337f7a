use crate::declaration::Declaration;
use crate::reporter::Reporter;

/// One JSON object per declaration (JSON Lines).
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, declaration: &Declaration<'_>) -> String {
        serde_json::to_string(&declaration.record())
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize declaration: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{DEF, Registry};
    use std::path::Path;

    #[test]
    fn test_json_output_structure() {
        let registry = Registry::python().unwrap();
        let declaration = Declaration::new(
            registry.get(DEF).unwrap(),
            "some_function",
            Path::new("/lib/module.py"),
            12,
        );

        let output = JsonReporter::new().report(&declaration);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["kind"], "def");
        assert_eq!(parsed["name"], "some_function");
        assert_eq!(parsed["path"], "/lib/module.py");
        assert_eq!(parsed["line"], 12);
    }

    #[test]
    fn test_json_output_is_single_line() {
        let registry = Registry::python().unwrap();
        let declaration = Declaration::new(registry.get(DEF).unwrap(), "f", Path::new("a.py"), 0);

        let output = JsonReporter::default().report(&declaration);
        assert!(!output.contains('\n'));
    }
}
