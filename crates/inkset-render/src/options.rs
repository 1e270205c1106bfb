//! Render configuration.

use inkset_color::ColorDepth;

use crate::layout::{Glyphs, Layout};
use crate::style::ColorScheme;

/// Column width used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Settings shared by the render entry points.
///
/// ```rust
/// use inkset_color::ColorDepth;
/// use inkset_render::layout::Glyphs;
/// use inkset_render::RenderOptions;
///
/// let opts = RenderOptions::new()
///     .with_width(60)
///     .with_glyphs(Glyphs::Ascii)
///     .with_depth(ColorDepth::Ansi256);
/// assert_eq!(opts.width, 60);
/// assert_eq!(opts.scheme.name(), "vcdark");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: usize,
    pub glyphs: Glyphs,
    pub scheme: ColorScheme,
    pub depth: ColorDepth,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            glyphs: Glyphs::default(),
            scheme: ColorScheme::vcdark(),
            depth: ColorDepth::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_depth(mut self, depth: ColorDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Uses the attached terminal's width, keeping the configured width
    /// when stdout is not a terminal.
    pub fn with_terminal_width(mut self) -> Self {
        self.width = self.detect_width();
        self
    }

    /// The attached terminal's column count, or the configured width.
    pub fn detect_width(&self) -> usize {
        match terminal_size::terminal_size() {
            Some((terminal_size::Width(w), _)) if w > 0 => w as usize,
            _ => {
                log::debug!("no terminal attached, using width {}", self.width);
                self.width
            }
        }
    }

    /// A layout engine at the configured width and glyph set.
    pub fn layout(&self) -> Layout {
        Layout::new(self.width).with_glyphs(self.glyphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.width, 80);
        assert_eq!(opts.glyphs, Glyphs::Unicode);
        assert_eq!(opts.depth, ColorDepth::TrueColor);
        assert_eq!(opts.scheme, ColorScheme::vcdark());
    }

    #[test]
    fn test_layout_carries_settings() {
        let layout = RenderOptions::new()
            .with_width(42)
            .with_glyphs(Glyphs::Ascii)
            .layout();
        assert_eq!(layout.width(), 42);
        assert_eq!(layout.glyphs(), Glyphs::Ascii);
    }

    #[test]
    fn test_detect_width_is_positive() {
        let opts = RenderOptions::new().with_width(33);
        assert!(opts.detect_width() > 0);
    }
}
