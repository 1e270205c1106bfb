//! The normalized RGB color value.
//!
//! A color can be built from three forms:
//!
//! - A CSS color name: `"cornflowerblue"` (case-insensitive)
//! - A packed integer: `0x569cd6`
//! - A six-digit hex string: `"569cd6"` or `"#569cd6"`
//!
//! ```rust
//! use inkset_color::Rgb;
//!
//! let blue: Rgb = "#569cd6".parse().unwrap();
//! assert_eq!(blue, Rgb::from_packed(0x569cd6));
//! assert_eq!(Rgb::from_name("navy"), Some(Rgb(0, 0, 128)));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::names;

/// A 24-bit RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Unpacks a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Rgb(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }

    /// Unpacks an integer, rejecting values that do not fit in 24 bits.
    pub fn try_from_packed(packed: u64) -> Result<Self> {
        if packed > 0xff_ffff {
            return Err(ColorError::OutOfRange(packed));
        }
        Ok(Self::from_packed(packed as u32))
    }

    /// Packs this color back into a `0xRRGGBB` integer.
    pub const fn to_packed(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    /// Looks up a CSS color name.
    pub fn from_name(name: &str) -> Option<Self> {
        names::lookup(name)
    }

    /// Parses six hex digits, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
        Ok(Self::from_packed(packed))
    }

    /// Euclidean distance to another point in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.0 as f64 - other.0 as f64;
        let dg = self.1 as f64 - other.1 as f64;
        let db = self.2 as f64 - other.2 as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Standard HSV hue in degrees, in `[0, 360)`.
    ///
    /// Grays (no chroma) report a hue of `0`. Only used for ordering and
    /// display; quantization never looks at hue.
    pub fn hue(self) -> f64 {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        if chroma == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.0, rgb.1, rgb.2)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts a CSS name first, then a hex string.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rgb) = Self::from_name(s) {
            return Ok(rgb);
        }
        if s.starts_with('#') || (s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())) {
            return Self::from_hex(s);
        }
        Err(ColorError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
