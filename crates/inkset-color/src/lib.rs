//! # Inkset Color - Terminal Palette Quantization
//!
//! `inkset-color` maps arbitrary RGB colors onto what a terminal can show:
//! the 16 base ANSI colors, the xterm 256-color palette, or 24-bit color.
//!
//! ## Core Concepts
//!
//! - [`Rgb`]: a normalized color, built from a CSS name, a packed integer, or hex
//! - [`ansi16`], [`cube`], [`gray`], [`quantize256`]: nearest-match palette search
//! - [`ColorDepth`]: picks the escape encoding for a color at render time
//!
//! ## Quick Start
//!
//! ```rust
//! use inkset_color::{ColorDepth, Rgb, CLEAR};
//!
//! let blue: Rgb = "#569cd6".parse().unwrap();
//!
//! let line = format!("{}hello{}", ColorDepth::Ansi256.fg(blue), CLEAR);
//! assert_eq!(line, "\x1b[38;5;74mhello\x1b[0m");
//! ```
//!
//! ## Palette Search
//!
//! All three palette regions snap channels with the same rule
//! ([`nearest_boundary`]): zero maps to the first boundary, and a value
//! exactly halfway between two boundaries rounds down. The 256-color search
//! then keeps whichever region's candidate renders closest to the input.

mod error;
pub mod escape;
pub mod names;
pub mod quantize;
mod rgb;

pub use error::{ColorError, Result};
pub use escape::{bg_indexed, fg_indexed, palette_chart, ColorDepth, BOLD, CLEAR, ITALIC, UNDERLINE};
pub use quantize::{ansi16, ansi256, cube, gray, nearest_boundary, quantize256, Quantized};
pub use rgb::Rgb;
