//! Color value parsing for scheme files.
//!
//! A color in a scheme can be written three ways:
//!
//! - CSS name: `dodgerblue`
//! - RGB hex: `"#569cd6"` (the `#` is optional)
//! - Packed integer: `0x569cd6` or `5676246`
//!
//! ```rust
//! use inkset_color::Rgb;
//! use inkset_render::style::parse_color;
//!
//! let named = parse_color(&serde_yaml::Value::String("navy".into())).unwrap();
//! assert_eq!(named, Rgb(0, 0, 128));
//!
//! let packed = parse_color(&serde_yaml::Value::Number(0xff0000.into())).unwrap();
//! assert_eq!(packed, Rgb(255, 0, 0));
//! ```

use inkset_color::Rgb;

/// Parses a color from a YAML value.
pub fn parse_color(value: &serde_yaml::Value) -> Result<Rgb, String> {
    match value {
        serde_yaml::Value::String(s) => parse_color_str(s),
        serde_yaml::Value::Number(n) => {
            let packed = n
                .as_u64()
                .ok_or_else(|| format!("invalid color value: {}", n))?;
            Rgb::try_from_packed(packed).map_err(|e| e.to_string())
        }
        _ => Err(format!("invalid color value: {:?}", value)),
    }
}

/// Parses a color from a string: a CSS name, hex digits, or `0x`-prefixed integer.
pub fn parse_color_str(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let packed = u64::from_str_radix(hex, 16).map_err(|_| format!("invalid hex: {}", s))?;
        return Rgb::try_from_packed(packed).map_err(|e| e.to_string());
    }
    s.parse::<Rgb>().map_err(|e| e.to_string())
}
