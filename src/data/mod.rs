//! Data layer - Static symbol data
//!
//! This module contains the built-in shorthand symbols and the quick-insert
//! palette shown next to the input field.

pub mod symbols;

// Re-export commonly used items
pub use symbols::{PALETTE, STANDARD_SYMBOLS};
