//! Standalone LaTeX source engine
//!
//! Writes each request as a compilable `standalone` document. Rasterizing
//! that document is left to an external TeX toolchain; the requested
//! resolution is recorded in a header comment for it to pick up.

use std::fs;

use super::{RenderRequest, TypesettingEngine};
use crate::utils::error::RenderError;

/// Border around the formula in points (0.05in)
const BORDER_PT: f32 = 3.6;

/// Baseline skip relative to font size
const BASELINE_RATIO: f32 = 1.2;

/// Engine that emits LaTeX source to the output target
#[derive(Debug, Clone, Copy, Default)]
pub struct TexSourceEngine;

impl TexSourceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the document for `request`
    pub fn document(&self, request: &RenderRequest) -> String {
        let mut doc = String::new();
        doc.push_str(&format!(
            "% mathwriter: {}pt at {} dpi\n",
            request.font_size, request.dpi
        ));
        doc.push_str(&format!(
            "\\documentclass[border={}pt]{{standalone}}\n",
            BORDER_PT
        ));
        doc.push_str("\\usepackage{amsmath}\n");
        doc.push_str("\\usepackage{amssymb}\n");
        doc.push_str("\\begin{document}\n");
        doc.push_str(&format!(
            "\\fontsize{{{}}}{{{}}}\\selectfont\n",
            request.font_size,
            request.font_size * BASELINE_RATIO
        ));
        doc.push_str(&request.markup);
        doc.push('\n');
        doc.push_str("\\end{document}\n");
        doc
    }
}

impl TypesettingEngine for TexSourceEngine {
    fn render(&self, request: &RenderRequest) -> Result<(), RenderError> {
        let doc = self.document(request);
        fs::write(request.target.path(), doc)?;
        log::info!("wrote {}", request.target);
        Ok(())
    }
}
