//! # mathwriter
//!
//! Shorthand math notation to LaTeX markup, written in Rust.
//!
//! ## Features
//!
//! - **Shorthand Symbols**: `pi`, `alpha`, `->`, `inf`, `neq` and friends become LaTeX commands
//! - **Whole-token Matching**: `int` is replaced, `print` is not
//! - **Function Calls**: `sqrt(x+1)` and `sqrt x` both become `\sqrt{...}`
//! - **Rendering Boundary**: hand the markup to any typesetting engine
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use mathwriter::{normalize, SymbolTable};
//!
//! let table = SymbolTable::standard();
//! assert_eq!(normalize("sqrt(x+1)", &table), r"\sqrt{x+1}");
//! assert_eq!(normalize("sqrt x", &table), r"\sqrt{x}");
//! assert_eq!(normalize("a -> b", &table), r"a \to b");
//! assert_eq!(normalize("  pi  ", &table), r"\pi");
//! ```
//!
//! A [`Normalizer`] compiles the argument rules once and can be reused for
//! every keystroke:
//!
//! ```rust
//! use mathwriter::{Normalizer, SymbolTable};
//!
//! let table = SymbolTable::standard();
//! let normalizer = Normalizer::new(&table).unwrap();
//! assert_eq!(normalizer.normalize("sum x neq inf"), r"\sum x \neq \infty");
//! ```

/// Core normalization modules
pub mod core;

/// Data layer - static symbol data
pub mod data;

/// Feature modules - front-end support
pub mod features;

/// Rendering boundary
pub mod render;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core pipeline
pub use crate::core::{
    normalize, normalize_standard, to_mathtext, ArgumentNormalizer, Normalizer, SymbolEntry,
    SymbolKind, SymbolSubstitutor, SymbolTable,
};

// Re-export symbol data
pub use data::{PALETTE, STANDARD_SYMBOLS};

// Re-export features
pub use features::ExpressionBuffer;

// Re-export rendering
pub use render::{
    render_expression, OutputTarget, RenderOutcome, RenderProfile, RenderRequest,
    TexSourceEngine, TypesettingEngine,
};

// Re-export utilities
pub use utils::error::{RenderError, RenderResult, TableError};
