//! Error types for layout and rendering.

use thiserror::Error;

use crate::style::SchemeError;

/// Errors produced while laying out or rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A node kind appeared somewhere layout has no rule for, such as an
    /// inline node at block position or a non-item child of a list.
    #[error("unrecognized construct: {0}")]
    UnrecognizedConstruct(String),

    /// A color scheme could not be loaded or is missing a style.
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// A serialized document tree could not be decoded.
    #[error("invalid document tree: {0}")]
    Ast(#[from] serde_json::Error),
}

impl RenderError {
    pub(crate) fn unrecognized(what: impl Into<String>) -> Self {
        RenderError::UnrecognizedConstruct(what.into())
    }
}

/// Result type for layout and rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_display() {
        let err = RenderError::unrecognized("text at block position");
        assert_eq!(
            err.to_string(),
            "unrecognized construct: text at block position"
        );
    }

    #[test]
    fn test_scheme_error_is_transparent() {
        let err: RenderError = SchemeError::UnknownKey {
            key: "sidebar".to_string(),
            path: None,
        }
        .into();
        assert!(err.to_string().contains("sidebar"));
    }
}
