//! Color schemes: the styles assigned to each [`StyleKey`].
//!
//! A scheme holds a `default` baseline plus one [`StyleRecord`] per style
//! key. A record only lists the attributes it changes; looking a key up
//! merges its record over the baseline to get a complete [`Style`].
//!
//! Schemes can also carry "chrome" entries (`header`, `footer`, `toc`,
//! `treeline`, `treetext`) used by outer surfaces such as an editor's
//! outline pane. Layout never resolves to these.
//!
//! # YAML Format
//!
//! ```yaml
//! default:
//!   fg: "#d4d4d4"
//!   bg: "#1e1e1e"
//! heading1:
//!   fg: white
//!   bg: 0xf44747
//!   bold: true
//! emph:
//!   underline: true
//! ```
//!
//! Keys missing from the file fall back to the baseline.
//!
//! ```rust
//! use inkset_color::Rgb;
//! use inkset_render::style::{ColorScheme, StyleKey};
//!
//! let scheme = ColorScheme::from_yaml("mine", "strong:\n  fg: red\n  bold: true\n").unwrap();
//! let strong = scheme.style(StyleKey::Strong).unwrap();
//! assert_eq!(strong.fg, Some(Rgb(255, 0, 0)));
//! assert!(strong.bold);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use inkset_color::Rgb;
use once_cell::sync::Lazy;

use super::color::parse_color;
use super::error::SchemeError;
use super::key::StyleKey;

/// Names of the non-layout entries a scheme may define.
pub const CHROME_KEYS: [&str; 5] = ["header", "footer", "toc", "treeline", "treetext"];

/// A fully resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// True when the style sets no color and no attribute.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// A partial style; unset attributes inherit from the scheme baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleRecord {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, rgb: Rgb) -> Self {
        self.fg = Some(rgb);
        self
    }

    pub fn bg(mut self, rgb: Rgb) -> Self {
        self.bg = Some(rgb);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    /// Overlays this record on `base`.
    pub fn apply_to(&self, base: Style) -> Style {
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            bold: self.bold.unwrap_or(base.bold),
            italic: self.italic.unwrap_or(base.italic),
            underline: self.underline.unwrap_or(base.underline),
        }
    }
}

/// A named set of styles, one per [`StyleKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    name: String,
    default: Style,
    styles: HashMap<StyleKey, StyleRecord>,
    chrome: BTreeMap<String, StyleRecord>,
}

mod vcdark {
    use inkset_color::Rgb;

    pub const BG: Rgb = Rgb::from_packed(0x1e1e1e);
    pub const GRAY: Rgb = Rgb::from_packed(0x808080);
    pub const FG: Rgb = Rgb::from_packed(0xd4d4d4);
    pub const LIGHTBLUE: Rgb = Rgb::from_packed(0x9cdcfe);
    pub const BLUE: Rgb = Rgb::from_packed(0x569cd6);
    pub const BLUEGREEN: Rgb = Rgb::from_packed(0x4ec9b0);
    pub const LIGHTGREEN: Rgb = Rgb::from_packed(0xb5cea8);
    pub const YELLOW: Rgb = Rgb::from_packed(0xdcdcaa);
    pub const ORANGE: Rgb = Rgb::from_packed(0xce9178);
    pub const RED: Rgb = Rgb::from_packed(0xf44747);
    pub const WHITE: Rgb = Rgb::from_packed(0xffffff);
}

static VCDARK: Lazy<ColorScheme> = Lazy::new(|| {
    use vcdark::*;

    let default = Style {
        fg: Some(FG),
        bg: Some(BG),
        bold: false,
        italic: false,
        underline: false,
    };
    ColorScheme::new("vcdark", default)
        .with_style(StyleKey::Body, StyleRecord::new())
        .with_style(
            StyleKey::Heading1,
            StyleRecord::new().fg(WHITE).bg(RED).bold(true),
        )
        .with_style(StyleKey::Heading, StyleRecord::new().fg(RED))
        .with_style(StyleKey::TableHeader, StyleRecord::new().fg(WHITE).bg(BLUE))
        .with_style(StyleKey::LatexInline, StyleRecord::new().fg(LIGHTGREEN))
        .with_style(StyleKey::LatexBlock, StyleRecord::new().fg(LIGHTGREEN))
        .with_style(StyleKey::Strikethrough, StyleRecord::new().fg(GRAY))
        .with_style(StyleKey::Strong, StyleRecord::new().fg(WHITE).bold(true))
        .with_style(StyleKey::Emph, StyleRecord::new().underline(true))
        .with_style(StyleKey::CodeBlock, StyleRecord::new().fg(LIGHTBLUE))
        .with_style(StyleKey::Code, StyleRecord::new().fg(LIGHTBLUE))
        .with_style(StyleKey::BlockQuote, StyleRecord::new().fg(YELLOW))
        .with_style(StyleKey::Image, StyleRecord::new().fg(BLUE).underline(true))
        .with_style(StyleKey::Link, StyleRecord::new().fg(BLUE).underline(true))
        .with_chrome("header", StyleRecord::new().fg(WHITE).bg(ORANGE))
        .with_chrome("footer", StyleRecord::new().fg(WHITE).bg(ORANGE))
        .with_chrome("toc", StyleRecord::new().fg(BLUE))
        .with_chrome("treeline", StyleRecord::new().fg(BLUEGREEN))
        .with_chrome("treetext", StyleRecord::new().fg(WHITE))
});

impl ColorScheme {
    /// Creates a scheme with a baseline and no style entries.
    pub fn new(name: impl Into<String>, default: Style) -> Self {
        Self {
            name: name.into(),
            default,
            styles: HashMap::new(),
            chrome: BTreeMap::new(),
        }
    }

    /// The built-in dark scheme used when none is configured.
    pub fn vcdark() -> Self {
        VCDARK.clone()
    }

    /// Looks up a built-in scheme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "vcdark" => Some(Self::vcdark()),
            _ => None,
        }
    }

    pub fn with_style(mut self, key: StyleKey, record: StyleRecord) -> Self {
        self.styles.insert(key, record);
        self
    }

    pub fn with_chrome(mut self, name: impl Into<String>, record: StyleRecord) -> Self {
        self.chrome.insert(name.into(), record);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The baseline every record is merged over.
    pub fn default_style(&self) -> Style {
        self.default
    }

    /// The complete style for `key`.
    pub fn style(&self, key: StyleKey) -> Result<Style, SchemeError> {
        self.styles
            .get(&key)
            .map(|record| record.apply_to(self.default))
            .ok_or_else(|| SchemeError::MissingStyle {
                scheme: self.name.clone(),
                key: key.as_str().to_string(),
            })
    }

    /// The complete style for a chrome entry, if the scheme defines it.
    pub fn chrome_style(&self, name: &str) -> Option<Style> {
        self.chrome
            .get(name)
            .map(|record| record.apply_to(self.default))
    }

    /// Chrome entry names, sorted.
    pub fn chrome_names(&self) -> impl Iterator<Item = &str> {
        self.chrome.keys().map(String::as_str)
    }

    /// Parses a scheme from YAML.
    ///
    /// Style keys the document omits inherit the baseline unchanged.
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self, SchemeError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| SchemeError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        let entries = match root {
            serde_yaml::Value::Mapping(map) => map,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            other => {
                return Err(SchemeError::Parse {
                    path: None,
                    message: format!("expected a mapping at the top level, got {:?}", other),
                })
            }
        };

        let mut scheme = ColorScheme::new(name, Style::default());
        let mut default = StyleRecord::new();

        for (key, value) in &entries {
            let key = key.as_str().ok_or_else(|| SchemeError::Parse {
                path: None,
                message: format!("style keys must be strings, got {:?}", key),
            })?;
            let record = parse_record(key, value)?;

            if key == "default" {
                default = record;
            } else if let Ok(style_key) = key.parse::<StyleKey>() {
                scheme.styles.insert(style_key, record);
            } else if CHROME_KEYS.contains(&key) {
                scheme.chrome.insert(key.to_string(), record);
            } else {
                return Err(SchemeError::UnknownKey {
                    key: key.to_string(),
                    path: None,
                });
            }
        }

        scheme.default = default.apply_to(Style::default());
        for key in StyleKey::ALL {
            scheme.styles.entry(key).or_default();
        }
        log::debug!(
            "loaded color scheme '{}' with {} chrome entries",
            scheme.name,
            scheme.chrome.len()
        );
        Ok(scheme)
    }

    /// Loads a scheme from a YAML file, named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemeError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("scheme")
            .to_string();
        Self::from_yaml(name, &content).map_err(|e| e.with_path(path))
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::vcdark()
    }
}

fn parse_record(style: &str, value: &serde_yaml::Value) -> Result<StyleRecord, SchemeError> {
    let map = match value {
        serde_yaml::Value::Mapping(map) => map,
        serde_yaml::Value::Null => return Ok(StyleRecord::new()),
        other => {
            return Err(SchemeError::InvalidDefinition {
                style: style.to_string(),
                message: format!("expected a mapping, got {:?}", other),
                path: None,
            })
        }
    };

    let mut record = StyleRecord::new();
    for (attr, value) in map {
        let attr = attr.as_str().unwrap_or_default();
        match attr {
            "fg" | "bg" => {
                let rgb = parse_color(value).map_err(|_| SchemeError::InvalidColor {
                    style: style.to_string(),
                    value: yaml_scalar(value),
                    path: None,
                })?;
                if attr == "fg" {
                    record.fg = Some(rgb);
                } else {
                    record.bg = Some(rgb);
                }
            }
            "bold" | "italic" | "underline" => {
                let on = value.as_bool().ok_or_else(|| SchemeError::InvalidDefinition {
                    style: style.to_string(),
                    message: format!("'{}' must be true or false", attr),
                    path: None,
                })?;
                match attr {
                    "bold" => record.bold = Some(on),
                    "italic" => record.italic = Some(on),
                    _ => record.underline = Some(on),
                }
            }
            other => {
                return Err(SchemeError::UnknownAttribute {
                    style: style.to_string(),
                    attribute: other.to_string(),
                    path: None,
                })
            }
        }
    }
    Ok(record)
}

fn yaml_scalar(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => format!("{:?}", other),
    }
}
