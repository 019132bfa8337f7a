//! The priority-ordered list of declaration types checked against each line.

use crate::declaration::types::DeclarationType;
use crate::error::Result;
use tracing::debug;

pub const VAR: &str = "var";
pub const DEF: &str = "def";
pub const CLASS: &str = "class";

/// `name = value`. Only a literal `==` right after the spaces is excluded.
const VAR_PATTERN: &str = r"^(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s+=[^=]";
/// `def name(` or `def name ...`
const DEF_PATTERN: &str = r"^def\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)[\s(]";
/// `class Name:`, `class Name(` or `class Name ...`
const CLASS_PATTERN: &str = r"^class\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)[\s:(]";

/// Immutable, ordered set of declaration types. Earlier types win.
#[derive(Debug)]
pub struct Registry {
    types: Vec<DeclarationType>,
}

impl Registry {
    pub fn new(types: Vec<DeclarationType>) -> Self {
        Self { types }
    }

    /// The Python registry: `var`, `def`, `class`, in that order.
    ///
    /// All patterns anchor at the start of the line, so indented (nested)
    /// declarations are never reported.
    pub fn python() -> Result<Self> {
        let registry = Self::new(vec![
            DeclarationType::from_pattern(VAR, VAR_PATTERN)?,
            DeclarationType::from_pattern(DEF, DEF_PATTERN)?,
            DeclarationType::from_pattern(CLASS, CLASS_PATTERN)?,
        ]);
        debug!(types = registry.len(), "Declaration registry ready");
        Ok(registry)
    }

    /// Canonical instance for a kind name.
    pub fn get(&self, kind: &str) -> Option<&DeclarationType> {
        self.types.iter().find(|t| t.kind() == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeclarationType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// First type with a non-empty match on `line`, with the matched name.
    pub fn classify<'l>(&self, line: &'l str) -> Option<(&DeclarationType, &'l str)> {
        self.types
            .iter()
            .find_map(|t| t.search(line).map(|name| (t, name)))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DeclarationType;
    type IntoIter = std::slice::Iter<'a, DeclarationType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::python().unwrap()
    }

    fn kind_of(registry: &Registry, line: &str) -> Option<String> {
        registry.classify(line).map(|(t, _)| t.kind().to_string())
    }

    #[test]
    fn test_python_registry_order() {
        let registry = registry();
        let kinds: Vec<_> = registry.iter().map(|t| t.kind()).collect();
        assert_eq!(kinds, vec!["var", "def", "class"]);
    }

    #[test]
    fn test_get_returns_canonical_instance() {
        let registry = registry();
        let first = registry.get(VAR).unwrap();
        let second = registry.get(VAR).unwrap();
        assert!(first.is(second));
        assert!(registry.get("lambda").is_none());
    }

    #[test]
    fn test_var_search() {
        let registry = registry();
        let var = registry.get(VAR).unwrap();
        assert_eq!(var.search("some_var = \"some value\""), Some("some_var"));
        assert_eq!(
            var.search("variable_name = \"variable value\""),
            Some("variable_name")
        );
        assert_eq!(var.search("x = 1\n"), Some("x"));
    }

    #[test]
    fn test_var_excludes_comparison() {
        let var = registry();
        let var = var.get(VAR).unwrap();
        assert_eq!(var.search("x == 1"), None);
        assert_eq!(var.search("x==1"), None);
        // No whitespace before `=`.
        assert_eq!(var.search("x=1"), None);
    }

    #[test]
    fn test_var_pattern_quirks_are_kept() {
        let registry = registry();
        let var = registry.get(VAR).unwrap();
        // `=` must follow the whitespace directly.
        assert_eq!(var.search("total += 1"), None);
        // Anything but `=` may follow.
        assert_eq!(var.search("flag = =x"), Some("flag"));
        assert_eq!(var.search("flag =+1"), Some("flag"));
    }

    #[test]
    fn test_def_search() {
        let registry = registry();
        let def = registry.get(DEF).unwrap();
        assert_eq!(
            def.search("def function_name(*args, **kwargs):"),
            Some("function_name")
        );
        assert_eq!(def.search("def spaced (x):"), Some("spaced"));
        assert_eq!(def.search("define = 1"), None);
    }

    #[test]
    fn test_class_search() {
        let registry = registry();
        let class = registry.get(CLASS).unwrap();
        assert_eq!(
            class.search("class ClassName(ParentClass):"),
            Some("ClassName")
        );
        assert_eq!(class.search("class Plain:"), Some("Plain"));
        assert_eq!(class.search("class Spaced :"), Some("Spaced"));
        assert_eq!(class.search("classify(x)"), None);
    }

    #[test]
    fn test_indented_declarations_never_match() {
        let registry = registry();
        for line in [
            "    class Meta:",
            "\tdef method(self):",
            "  value = 1",
            " class Nested(Base):",
        ] {
            assert!(registry.classify(line).is_none(), "matched {line:?}");
        }
    }

    #[test]
    fn test_priority_var_before_def_and_class() {
        let registry = registry();
        // Surface form of a var and a def at once.
        assert_eq!(kind_of(&registry, "def = (lambda: 1)").as_deref(), Some("var"));
        assert_eq!(kind_of(&registry, "class = 1").as_deref(), Some("var"));
        assert_eq!(kind_of(&registry, "def run():").as_deref(), Some("def"));
        assert_eq!(kind_of(&registry, "class Run:").as_deref(), Some("class"));
    }

    #[test]
    fn test_comments_do_not_match() {
        let registry = registry();
        assert!(registry.classify("# def filtered_function():").is_none());
        assert!(registry.classify("# some comment").is_none());
    }
}
