//! Errors for color scheme loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

fn location(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p: &Path| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Error type for color scheme parsing and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// YAML parse error.
    #[error("failed to parse color scheme{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A color value that is not a name, hex string, or packed integer.
    #[error("invalid color '{value}' for style '{style}'{}", location(.path))]
    InvalidColor {
        style: String,
        value: String,
        path: Option<PathBuf>,
    },

    /// A top-level key that is neither a style key nor a chrome key.
    #[error("unknown style key '{key}'{}", location(.path))]
    UnknownKey { key: String, path: Option<PathBuf> },

    /// An attribute other than `fg`, `bg`, `bold`, `italic`, `underline`.
    #[error("unknown attribute '{attribute}' in style '{style}'{}", location(.path))]
    UnknownAttribute {
        style: String,
        attribute: String,
        path: Option<PathBuf>,
    },

    /// A style entry with the wrong shape, such as a list instead of a map.
    #[error("invalid definition for style '{style}'{}: {message}", location(.path))]
    InvalidDefinition {
        style: String,
        message: String,
        path: Option<PathBuf>,
    },

    /// The scheme has no entry for a resolved style key.
    #[error("color scheme '{scheme}' has no style for '{key}'")]
    MissingStyle { scheme: String, key: String },

    /// File loading error.
    #[error("failed to load color scheme: {message}")]
    Load { message: String },
}

impl SchemeError {
    /// Attaches a source path to errors that carry one.
    pub fn with_path(self, source: &Path) -> Self {
        let at = Some(source.to_path_buf());
        match self {
            SchemeError::Parse { message, .. } => SchemeError::Parse { path: at, message },
            SchemeError::InvalidColor { style, value, .. } => SchemeError::InvalidColor {
                style,
                value,
                path: at,
            },
            SchemeError::UnknownKey { key, .. } => SchemeError::UnknownKey { key, path: at },
            SchemeError::UnknownAttribute {
                style, attribute, ..
            } => SchemeError::UnknownAttribute {
                style,
                attribute,
                path: at,
            },
            SchemeError::InvalidDefinition { style, message, .. } => {
                SchemeError::InvalidDefinition {
                    style,
                    message,
                    path: at,
                }
            }
            other => other,
        }
    }
}
