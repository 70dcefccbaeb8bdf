//! Symbol table
//!
//! An ordered, immutable mapping from shorthand tokens to LaTeX markup.
//! Tables are validated once at construction and passed by reference into
//! both pipeline stages.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::data::STANDARD_SYMBOLS;
use crate::utils::error::TableError;

lazy_static! {
    /// A LaTeX control word such as `\sqrt`
    static ref CONTROL_WORD: Regex = Regex::new(r"^\\[A-Za-z]+$").unwrap();
}

/// How a symbol behaves after substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Plain replacement
    Symbol,
    /// Function-like marker that takes one braced argument
    Function,
}

/// A single shorthand → markup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub shorthand: String,
    pub markup: String,
    pub kind: SymbolKind,
}

impl SymbolEntry {
    pub fn symbol(shorthand: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            shorthand: shorthand.into(),
            markup: markup.into(),
            kind: SymbolKind::Symbol,
        }
    }

    pub fn function(shorthand: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            shorthand: shorthand.into(),
            markup: markup.into(),
            kind: SymbolKind::Function,
        }
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }
}

/// Ordered shorthand table
///
/// Entries keep their declaration order; lookups by shorthand are O(1).
/// A second index lists the entries by descending shorthand length, which is
/// the order substitution must try them in.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolEntry>,
    longest_first: Vec<usize>,
}

impl SymbolTable {
    /// Build a table, rejecting duplicate or empty shorthands and function
    /// entries whose markup is not a control word.
    pub fn new<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = SymbolEntry>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            if entry.shorthand.is_empty() {
                return Err(TableError::EmptyShorthand {
                    markup: entry.markup,
                });
            }
            if entry.is_function() && !CONTROL_WORD.is_match(&entry.markup) {
                return Err(TableError::InvalidFunctionMarker {
                    shorthand: entry.shorthand,
                    markup: entry.markup,
                });
            }
            if map.contains_key(&entry.shorthand) {
                return Err(TableError::DuplicateShorthand {
                    shorthand: entry.shorthand,
                });
            }
            map.insert(entry.shorthand.clone(), entry);
        }
        Ok(Self::assemble(map))
    }

    /// Build a table of plain symbols from `(shorthand, markup)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, TableError> {
        Self::new(
            pairs
                .iter()
                .map(|(shorthand, markup)| SymbolEntry::symbol(*shorthand, *markup)),
        )
    }

    /// The built-in table
    pub fn standard() -> Self {
        let map = STANDARD_SYMBOLS
            .iter()
            .map(|(shorthand, markup, kind)| {
                (
                    shorthand.to_string(),
                    SymbolEntry {
                        shorthand: shorthand.to_string(),
                        markup: markup.to_string(),
                        kind: *kind,
                    },
                )
            })
            .collect();
        Self::assemble(map)
    }

    fn assemble(entries: IndexMap<String, SymbolEntry>) -> Self {
        let mut longest_first: Vec<usize> = (0..entries.len()).collect();
        // Stable sort: equal lengths keep declaration order
        longest_first.sort_by_key(|&i| std::cmp::Reverse(entries[i].shorthand.len()));
        Self {
            entries,
            longest_first,
        }
    }

    pub fn get(&self, shorthand: &str) -> Option<&SymbolEntry> {
        self.entries.get(shorthand)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values()
    }

    /// Entries ordered by descending shorthand length
    pub fn longest_first(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.longest_first.iter().map(move |&i| &self.entries[i])
    }

    /// Function-like entries in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.iter().filter(|e| e.is_function())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
