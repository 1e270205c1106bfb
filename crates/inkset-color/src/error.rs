//! Error types for color parsing.

use thiserror::Error;

/// Errors produced when a color value cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex string that is not exactly six hex digits (after an optional `#`).
    #[error("invalid hex color '{0}' (expected 6 hex digits)")]
    InvalidHex(String),

    /// A name that is not in the CSS color table.
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    /// A packed integer outside `0x000000..=0xffffff`.
    #[error("color value {0:#x} out of range (0x000000-0xffffff)")]
    OutOfRange(u64),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
