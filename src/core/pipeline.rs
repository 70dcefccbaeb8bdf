//! Normalization pipeline
//!
//! Raw input → [`SymbolSubstitutor`] → [`ArgumentNormalizer`] → markup.
//! The pipeline is a pure function of its input and table; a [`Normalizer`]
//! can be shared freely between threads.

use crate::core::arguments::ArgumentNormalizer;
use crate::core::substitute::SymbolSubstitutor;
use crate::core::table::SymbolTable;
use crate::utils::error::TableError;

/// Both pipeline stages bound to one table
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    substitutor: SymbolSubstitutor<'a>,
    arguments: ArgumentNormalizer,
}

impl<'a> Normalizer<'a> {
    pub fn new(table: &'a SymbolTable) -> Result<Self, TableError> {
        Ok(Self {
            substitutor: SymbolSubstitutor::new(table),
            arguments: ArgumentNormalizer::new(table)?,
        })
    }

    /// Normalize shorthand input to markup
    pub fn normalize(&self, expression: &str) -> String {
        let substituted = self.substitutor.substitute(expression);
        let markup = self.arguments.normalize(&substituted);
        log::debug!("normalized {:?} -> {:?}", expression, markup);
        markup
    }
}

/// Normalize `expression` against `table`.
///
/// Never fails: unknown tokens pass through and malformed calls are left
/// unnormalized.
pub fn normalize(expression: &str, table: &SymbolTable) -> String {
    match Normalizer::new(table) {
        Ok(normalizer) => normalizer.normalize(expression),
        Err(err) => {
            log::warn!("argument rules unavailable, substituting only: {}", err);
            SymbolSubstitutor::new(table)
                .substitute(expression)
                .trim()
                .to_string()
        }
    }
}

/// Normalize `expression` against the built-in table
pub fn normalize_standard(expression: &str) -> String {
    normalize(expression, &SymbolTable::standard())
}

/// Wrap markup as inline math, the form handed to the typesetting engine
pub fn to_mathtext(markup: &str) -> String {
    format!("${}$", markup)
}
