//! Standard shorthand symbol set
//!
//! The shorthands a user can type and the LaTeX markup each one stands for.
//! `SymbolTable::standard()` is built from this list in declaration order.

use crate::core::table::SymbolKind;

/// Shorthand, markup and kind of every built-in symbol
pub static STANDARD_SYMBOLS: &[(&str, &str, SymbolKind)] = &[
    ("prime", "'", SymbolKind::Symbol),
    ("sqrt", r"\sqrt", SymbolKind::Function),
    // Arrows
    ("->", r"\to", SymbolKind::Symbol),
    ("<-", r"\leftarrow", SymbolKind::Symbol),
    // Big operators
    ("inf", r"\infty", SymbolKind::Symbol),
    ("sum", r"\sum", SymbolKind::Symbol),
    ("int", r"\int", SymbolKind::Symbol),
    // Greek letters
    ("alpha", r"\alpha", SymbolKind::Symbol),
    ("beta", r"\beta", SymbolKind::Symbol),
    ("theta", r"\theta", SymbolKind::Symbol),
    // Relations
    ("neq", r"\neq", SymbolKind::Symbol),
    ("leq", r"\leq", SymbolKind::Symbol),
    ("geq", r"\geq", SymbolKind::Symbol),
    ("pi", r"\pi", SymbolKind::Symbol),
];

/// Quick-insert entries offered next to the input field, in display order.
///
/// Function-like entries carry an empty call so the cursor lands right
/// after the parentheses.
pub static PALETTE: &[&str] = &[
    "sqrt()", "pi", "alpha", "beta", "theta", "sum", "int", "->", "<-", "inf", "prime",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shorthands_are_unique() {
        let mut seen = HashSet::new();
        for (shorthand, _, _) in STANDARD_SYMBOLS {
            assert!(seen.insert(*shorthand), "duplicate shorthand {}", shorthand);
        }
    }

    #[test]
    fn test_only_sqrt_is_function() {
        let functions: Vec<_> = STANDARD_SYMBOLS
            .iter()
            .filter(|(_, _, kind)| *kind == SymbolKind::Function)
            .map(|(s, _, _)| *s)
            .collect();
        assert_eq!(functions, vec!["sqrt"]);
    }

    #[test]
    fn test_palette_entries_are_known_shorthands() {
        for entry in PALETTE {
            let name = entry.trim_end_matches("()");
            assert!(
                STANDARD_SYMBOLS.iter().any(|(s, _, _)| *s == name),
                "palette entry '{}' has no symbol",
                entry
            );
        }
    }
}
