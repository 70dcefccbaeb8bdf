//! WASM bindings for mathwriter
//!
//! This module provides JavaScript-accessible functions for shorthand
//! normalization.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use lazy_static::lazy_static;

#[cfg(feature = "wasm")]
use crate::core::{to_mathtext, Normalizer, SymbolTable};

#[cfg(feature = "wasm")]
lazy_static! {
    /// Built once; every binding below reads from it
    static ref TABLE: SymbolTable = SymbolTable::standard();
    static ref NORMALIZER: Option<Normalizer<'static>> = Normalizer::new(&TABLE).ok();
}

/// Normalize against the cached built-in table
#[cfg(feature = "wasm")]
fn normalize_cached(input: &str) -> String {
    match NORMALIZER.as_ref() {
        Some(normalizer) => normalizer.normalize(input),
        None => crate::normalize(input, &TABLE),
    }
}

/// Normalization result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct NormalizeResult {
    /// The normalized markup
    pub markup: String,
    /// The markup wrapped for an inline math renderer
    pub mathtext: String,
    /// Whether the input was blank
    pub empty: bool,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Normalize shorthand input to LaTeX markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalize")]
pub fn normalize_wasm(input: &str) -> String {
    normalize_cached(input)
}

/// Normalize shorthand input and wrap it as inline math (`$...$`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toMathtext")]
pub fn to_mathtext_wasm(input: &str) -> String {
    to_mathtext(&normalize_cached(input))
}

/// Normalize and return markup, mathtext and blank flag as one object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeDetailed")]
pub fn normalize_detailed_wasm(input: &str) -> JsValue {
    let markup = normalize_cached(input);
    let result = NormalizeResult {
        mathtext: to_mathtext(&markup),
        empty: input.trim().is_empty(),
        markup,
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// The built-in symbol table as an array of `{ shorthand, markup, kind }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "symbolTable")]
pub fn symbol_table_wasm() -> JsValue {
    let entries: Vec<_> = TABLE.iter().cloned().collect();
    serde_wasm_bindgen::to_value(&entries).unwrap_or(JsValue::NULL)
}

/// The quick-insert palette entries
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "palette")]
pub fn palette_wasm() -> Vec<String> {
    crate::PALETTE.iter().map(|s| s.to_string()).collect()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
