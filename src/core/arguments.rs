//! Argument normalization for function-like markers
//!
//! After substitution a function marker such as `\sqrt` may be followed by
//! its argument in one of two shapes:
//!
//! - parenthesized: `\sqrt(x+1)`, `\sqrt (x)`
//! - bare: `\sqrt x`, `\sqrt \pi`
//!
//! Both are rewritten to the braced form `\sqrt{x+1}`. The parenthesized
//! rule always runs first, since its argument may hold characters the bare
//! rule would stop at.
//!
//! The parenthesized argument ends at the first `)`; nested parentheses are
//! not balanced, so `\sqrt((a)+b)` becomes `\sqrt{(a}+b)`.

use regex::{Captures, Regex};

use crate::core::table::SymbolTable;
use crate::utils::error::TableError;

/// The two rewrite rules for a single marker
#[derive(Debug, Clone)]
struct MarkerRules {
    marker: String,
    parenthesized: Regex,
    bare: Regex,
}

impl MarkerRules {
    fn new(marker: &str) -> Result<Self, TableError> {
        let escaped = regex::escape(marker);
        let parenthesized = Regex::new(&format!(r"{}\s*\(\s*([^)]+)\s*\)", escaped))?;
        let bare = Regex::new(&format!(r"{}\s+([A-Za-z0-9{{}}\\]+)", escaped))?;
        Ok(Self {
            marker: marker.to_string(),
            parenthesized,
            bare,
        })
    }

    fn apply(&self, input: &str) -> String {
        let wrap = |caps: &Captures| format!("{}{{{}}}", self.marker, &caps[1]);
        let step = self.parenthesized.replace_all(input, wrap);
        self.bare.replace_all(&step, wrap).into_owned()
    }
}

/// Second pipeline stage: canonical braced arguments
#[derive(Debug, Clone)]
pub struct ArgumentNormalizer {
    rules: Vec<MarkerRules>,
}

impl ArgumentNormalizer {
    /// Compile rewrite rules for every function entry of `table`, in table order
    pub fn new(table: &SymbolTable) -> Result<Self, TableError> {
        let rules = table
            .functions()
            .map(|entry| MarkerRules::new(&entry.markup))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rewrite function calls to braced form and trim the result.
    ///
    /// Markers without a recognizable argument are left as they are. Passes
    /// repeat until nothing changes, so a call left inside another call's
    /// argument (`\sqrt(\sqrt(x))`) is rewritten too. Every rewrite consumes
    /// the `(` or whitespace after a marker, so the loop terminates.
    pub fn normalize(&self, input: &str) -> String {
        let mut result = input.to_string();
        loop {
            let next = self.apply_once(&result);
            if next == result {
                break;
            }
            result = next;
        }
        result.trim().to_string()
    }

    fn apply_once(&self, input: &str) -> String {
        let mut result = input.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }

    /// Markers this normalizer rewrites
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.marker.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::SymbolEntry;
    use pretty_assertions::assert_eq;

    fn norm(input: &str) -> String {
        ArgumentNormalizer::new(&SymbolTable::standard())
            .unwrap()
            .normalize(input)
    }

    #[test]
    fn test_parenthesized_form() {
        assert_eq!(norm(r"\sqrt(x+1)"), r"\sqrt{x+1}");
        assert_eq!(norm(r"\sqrt (x)"), r"\sqrt{x}");
        assert_eq!(norm(r"\sqrt( x )"), r"\sqrt{x }");
        assert_eq!(norm(r"\sqrt(a, b) + 1"), r"\sqrt{a, b} + 1");
    }

    #[test]
    fn test_bare_form() {
        assert_eq!(norm(r"\sqrt x"), r"\sqrt{x}");
        assert_eq!(norm(r"\sqrt   \pi + 1"), r"\sqrt{\pi} + 1");
        assert_eq!(norm(r"\sqrt 2x y"), r"\sqrt{2x} y");
    }

    #[test]
    fn test_both_forms_agree() {
        assert_eq!(norm(r"\sqrt(x)"), norm(r"\sqrt x"));
    }

    #[test]
    fn test_missing_argument_left_alone() {
        assert_eq!(norm(r"\sqrt"), r"\sqrt");
        assert_eq!(norm(r"\sqrt()"), r"\sqrt()");
        assert_eq!(norm(r"1 + \sqrt "), r"1 + \sqrt");
    }

    #[test]
    fn test_first_closing_paren_ends_argument() {
        assert_eq!(norm(r"\sqrt((a)+b)"), r"\sqrt{(a}+b)");
    }

    #[test]
    fn test_nested_calls_rewritten() {
        assert_eq!(norm(r"\sqrt(\sqrt(x))"), r"\sqrt{\sqrt{x}}");
        assert_eq!(norm(r"\sqrt(1 + \sqrt(2))"), r"\sqrt{1 + \sqrt{2}}");
        assert_eq!(norm(r"\sqrt(\sqrt x)"), r"\sqrt{\sqrt{x}}");
    }

    #[test]
    fn test_braced_form_is_stable() {
        assert_eq!(norm(r"\sqrt{x+1}"), r"\sqrt{x+1}");
    }

    #[test]
    fn test_multiple_calls() {
        assert_eq!(norm(r"\sqrt(a) + \sqrt b"), r"\sqrt{a} + \sqrt{b}");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(norm("  x + y \n"), "x + y");
    }

    #[test]
    fn test_additional_markers() {
        let table = SymbolTable::new([
            SymbolEntry::function("sqrt", r"\sqrt"),
            SymbolEntry::function("hat", r"\hat"),
        ])
        .unwrap();
        let normalizer = ArgumentNormalizer::new(&table).unwrap();
        assert_eq!(normalizer.markers().collect::<Vec<_>>(), vec![r"\sqrt", r"\hat"]);
        assert_eq!(normalizer.normalize(r"\hat(x) + \sqrt y"), r"\hat{x} + \sqrt{y}");
    }
}
