//! Core normalization modules
//!
//! This module contains the shorthand → markup pipeline:
//! - `table`: the immutable symbol table
//! - `substitute`: whole-token symbol substitution
//! - `arguments`: braced-argument rewriting for function-like markers
//! - `pipeline`: both stages combined

pub mod arguments;
pub mod pipeline;
pub mod substitute;
pub mod table;

// Re-export main types and functions
pub use arguments::ArgumentNormalizer;
pub use pipeline::{normalize, normalize_standard, to_mathtext, Normalizer};
pub use substitute::SymbolSubstitutor;
pub use table::{SymbolEntry, SymbolKind, SymbolTable};
