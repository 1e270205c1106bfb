//! Style resolution and color schemes.
//!
//! - [`StyleKey`] and [`StyleKey::resolve`]: map a span's tag stack to a style class
//! - [`ColorScheme`]: assigns a [`Style`] to every class, built in or loaded from YAML
//! - [`parse_color`]: the color value syntax scheme files accept

mod color;
mod error;
mod key;
mod scheme;

pub use color::{parse_color, parse_color_str};
pub use error::SchemeError;
pub use key::StyleKey;
pub use scheme::{ColorScheme, Style, StyleRecord, CHROME_KEYS};
