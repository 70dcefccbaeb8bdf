//! Error handling for Mathwriter
//!
//! Normalization itself never fails. Errors only come from building a symbol
//! table and from the typesetting engine at the rendering boundary.

/// Error building a symbol table or its argument rules
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two entries share a shorthand
    #[error("duplicate shorthand '{shorthand}'")]
    DuplicateShorthand { shorthand: String },
    /// An entry has an empty shorthand
    #[error("empty shorthand for markup '{markup}'")]
    EmptyShorthand { markup: String },
    /// A function entry's markup is not a control word like `\sqrt`
    #[error("function '{shorthand}' needs a control word marker, got '{markup}'")]
    InvalidFunctionMarker { shorthand: String, markup: String },
    /// An argument rule failed to compile
    #[error("invalid argument pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Error reported at the rendering boundary
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The typesetting engine rejected the request; the message is the engine's own
    #[error("{message}")]
    Engine { message: String },
    /// A rendering parameter is out of range
    #[error("invalid {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f32 },
    /// IO error while writing the output target
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn engine(message: impl Into<String>) -> Self {
        RenderError::Engine {
            message: message.into(),
        }
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_message_verbatim() {
        let err = RenderError::engine("Unknown symbol: \\foo");
        assert_eq!(err.to_string(), "Unknown symbol: \\foo");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RenderError::InvalidParameter {
            name: "dpi",
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("dpi"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = TableError::DuplicateShorthand {
            shorthand: "pi".to_string(),
        };
        assert!(err.to_string().contains("'pi'"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
