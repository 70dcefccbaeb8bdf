//! Rendering boundary
//!
//! The crate stops at markup: turning markup into pixels is the job of an
//! external typesetting engine behind [`TypesettingEngine`]. This module
//! builds the [`RenderRequest`] for an expression and surfaces whatever the
//! engine reports.
//!
//! ## Example
//!
//! ```rust
//! use mathwriter::render::{render_expression, OutputTarget, RenderOutcome, RenderProfile, RenderRequest, TypesettingEngine};
//! use mathwriter::{Normalizer, RenderError, SymbolTable};
//!
//! struct Discard;
//!
//! impl TypesettingEngine for Discard {
//!     fn render(&self, _request: &RenderRequest) -> Result<(), RenderError> {
//!         Ok(())
//!     }
//! }
//!
//! let table = SymbolTable::standard();
//! let normalizer = Normalizer::new(&table).unwrap();
//! let outcome = render_expression(
//!     "sqrt(x+1)",
//!     &normalizer,
//!     &Discard,
//!     OutputTarget::new("preview.tex"),
//!     &RenderProfile::preview(),
//! )
//! .unwrap();
//! assert_eq!(outcome, RenderOutcome::Rendered { markup: r"\sqrt{x+1}".to_string() });
//! ```

pub mod tex;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::pipeline::{to_mathtext, Normalizer};
use crate::utils::error::{RenderError, RenderResult};

pub use tex::TexSourceEngine;

/// Font size and resolution used for one kind of render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderProfile {
    /// Font size in points
    pub font_size: f32,
    /// Resolution in dots per inch
    pub dpi: f32,
}

impl RenderProfile {
    /// Low-fidelity settings for the live preview
    pub fn preview() -> Self {
        Self {
            font_size: 28.0,
            dpi: 200.0,
        }
    }

    /// High-fidelity settings for an explicit save
    pub fn save() -> Self {
        Self {
            font_size: 42.0,
            dpi: 300.0,
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::preview()
    }
}

/// Where the engine writes its image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget(PathBuf);

impl OutputTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Everything a typesetting engine needs for one image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Math-mode markup, delimiters included
    pub markup: String,
    pub target: OutputTarget,
    pub font_size: f32,
    pub dpi: f32,
}

impl RenderRequest {
    /// Build a request, rejecting non-positive font sizes and resolutions
    pub fn new(
        markup: impl Into<String>,
        target: OutputTarget,
        profile: &RenderProfile,
    ) -> RenderResult<Self> {
        check_positive("font size", profile.font_size)?;
        check_positive("dpi", profile.dpi)?;
        Ok(Self {
            markup: markup.into(),
            target,
            font_size: profile.font_size,
            dpi: profile.dpi,
        })
    }
}

fn check_positive(name: &'static str, value: f32) -> RenderResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidParameter { name, value })
    }
}

/// An external rasterizer.
///
/// Implementations write to `request.target`. Callers issuing concurrent
/// requests must give each one its own target or serialize the writes.
pub trait TypesettingEngine {
    fn render(&self, request: &RenderRequest) -> Result<(), RenderError>;
}

/// Result of rendering an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Input was blank; the engine was not called
    Empty,
    /// The engine accepted the markup
    Rendered { markup: String },
}

/// Normalize `expression` and hand it to `engine`.
///
/// Blank input short-circuits to [`RenderOutcome::Empty`]. Engine errors are
/// returned unchanged; nothing is retried.
pub fn render_expression(
    expression: &str,
    normalizer: &Normalizer<'_>,
    engine: &dyn TypesettingEngine,
    target: OutputTarget,
    profile: &RenderProfile,
) -> RenderResult<RenderOutcome> {
    if expression.trim().is_empty() {
        return Ok(RenderOutcome::Empty);
    }

    let markup = normalizer.normalize(expression);
    let request = RenderRequest::new(to_mathtext(&markup), target, profile)?;
    log::debug!(
        "rendering {:?} to {} ({}pt, {} dpi)",
        request.markup,
        request.target,
        request.font_size,
        request.dpi
    );
    engine.render(&request)?;
    Ok(RenderOutcome::Rendered { markup })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::SymbolTable;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingEngine {
        requests: Mutex<Vec<RenderRequest>>,
    }

    impl TypesettingEngine for RecordingEngine {
        fn render(&self, request: &RenderRequest) -> Result<(), RenderError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    struct FailingEngine;

    impl TypesettingEngine for FailingEngine {
        fn render(&self, _request: &RenderRequest) -> Result<(), RenderError> {
            Err(RenderError::engine("Expected '}', found end of input"))
        }
    }

    #[test]
    fn test_profiles() {
        let preview = RenderProfile::preview();
        let save = RenderProfile::save();
        assert!(save.font_size > preview.font_size);
        assert!(save.dpi > preview.dpi);
        assert_eq!(RenderProfile::default(), preview);
    }

    #[test]
    fn test_request_rejects_bad_parameters() {
        let target = OutputTarget::new("out.png");
        let bad_size = RenderProfile {
            font_size: 0.0,
            dpi: 100.0,
        };
        assert!(matches!(
            RenderRequest::new("$x$", target.clone(), &bad_size),
            Err(RenderError::InvalidParameter { name: "font size", .. })
        ));

        let bad_dpi = RenderProfile {
            font_size: 12.0,
            dpi: f32::NAN,
        };
        assert!(matches!(
            RenderRequest::new("$x$", target, &bad_dpi),
            Err(RenderError::InvalidParameter { name: "dpi", .. })
        ));
    }

    #[test]
    fn test_render_builds_mathtext_request() {
        let table = SymbolTable::standard();
        let normalizer = Normalizer::new(&table).unwrap();
        let engine = RecordingEngine::default();

        let outcome = render_expression(
            "sqrt x",
            &normalizer,
            &engine,
            OutputTarget::new("preview.png"),
            &RenderProfile::save(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            RenderOutcome::Rendered {
                markup: r"\sqrt{x}".to_string()
            }
        );
        let requests = engine.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].markup, r"$\sqrt{x}$");
        assert_eq!(requests[0].font_size, 42.0);
        assert_eq!(requests[0].dpi, 300.0);
        assert_eq!(requests[0].target.path(), Path::new("preview.png"));
    }

    #[test]
    fn test_blank_input_skips_engine() {
        let table = SymbolTable::standard();
        let normalizer = Normalizer::new(&table).unwrap();
        let engine = RecordingEngine::default();

        let outcome = render_expression(
            "   ",
            &normalizer,
            &engine,
            OutputTarget::new("preview.png"),
            &RenderProfile::preview(),
        )
        .unwrap();

        assert_eq!(outcome, RenderOutcome::Empty);
        assert!(engine.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_engine_error_propagated() {
        let table = SymbolTable::standard();
        let normalizer = Normalizer::new(&table).unwrap();

        let err = render_expression(
            "sqrt(",
            &normalizer,
            &FailingEngine,
            OutputTarget::new("preview.png"),
            &RenderProfile::preview(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Expected '}', found end of input");
    }
}
