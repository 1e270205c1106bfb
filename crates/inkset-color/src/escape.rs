//! ANSI escape sequences for the three terminal color depths.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::quantize::{ansi16, ansi256};
use crate::{ColorError, Rgb};

/// Resets all attributes.
pub const CLEAR: &str = "\x1b[0m";
/// Bold text.
pub const BOLD: &str = "\x1b[1m";
/// Italic text.
pub const ITALIC: &str = "\x1b[3m";
/// Underlined text.
pub const UNDERLINE: &str = "\x1b[4m";

/// How many colors the target terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorDepth {
    /// The 16 base ANSI colors (`30–37`, `90–97`).
    Ansi16,
    /// The xterm 256-color palette (`38;5;n`).
    Ansi256,
    /// 24-bit RGB (`38;2;r;g;b`).
    #[default]
    TrueColor,
}

impl ColorDepth {
    /// Foreground escape for `rgb` at this depth.
    pub fn fg(self, rgb: Rgb) -> String {
        match self {
            ColorDepth::Ansi16 => {
                let index = ansi16(rgb).index;
                if index >= 8 {
                    format!("\x1b[{}m", 90 + (index - 8) as u16)
                } else {
                    format!("\x1b[{}m", 30 + index as u16)
                }
            }
            ColorDepth::Ansi256 => fg_indexed(ansi256(rgb)),
            ColorDepth::TrueColor => format!("\x1b[38;2;{};{};{}m", rgb.0, rgb.1, rgb.2),
        }
    }

    /// Background escape for `rgb` at this depth.
    pub fn bg(self, rgb: Rgb) -> String {
        match self {
            ColorDepth::Ansi16 => {
                let index = ansi16(rgb).index;
                if index >= 8 {
                    format!("\x1b[{}m", 100 + (index - 8) as u16)
                } else {
                    format!("\x1b[{}m", 40 + index as u16)
                }
            }
            ColorDepth::Ansi256 => bg_indexed(ansi256(rgb)),
            ColorDepth::TrueColor => format!("\x1b[48;2;{};{};{}m", rgb.0, rgb.1, rgb.2),
        }
    }
}

impl FromStr for ColorDepth {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16" | "ansi16" => Ok(ColorDepth::Ansi16),
            "256" | "ansi256" => Ok(ColorDepth::Ansi256),
            "24bit" | "truecolor" | "rgb" => Ok(ColorDepth::TrueColor),
            other => Err(ColorError::UnknownName(other.to_string())),
        }
    }
}

/// Foreground escape for a raw 256-color palette index.
pub fn fg_indexed(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}

/// Background escape for a raw 256-color palette index.
pub fn bg_indexed(index: u8) -> String {
    format!("\x1b[48;5;{}m", index)
}

/// A printable chart of the 256-color palette.
///
/// Each entry shows its index twice: white on the color, then the color on
/// black. Rows follow the palette's natural groups (8 base colors, then
/// cube rows of 6).
pub fn palette_chart() -> String {
    let mut out = String::new();
    for i in 0..=255u8 {
        let _ = write!(
            out,
            "{}{} {:03} {}{} {:03} ",
            fg_indexed(15),
            bg_indexed(i),
            i,
            bg_indexed(0),
            fg_indexed(i),
            i
        );
        if (i < 16 && i % 8 == 7) || (i > 16 && (i - 16) % 6 == 5) {
            out.push_str(CLEAR);
            out.push('\n');
        }
        if i >= 15 && (i - 15) % 36 == 0 {
            out.push('\n');
        }
    }
    out.push_str(CLEAR);
    out
}
