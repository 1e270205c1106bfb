//! ANSI terminal output.

use inkset_color::{ColorDepth, BOLD, CLEAR, ITALIC, UNDERLINE};

use super::SpanRenderer;
use crate::error::Result;
use crate::layout::Span;
use crate::options::RenderOptions;
use crate::style::{ColorScheme, Style};

/// Writes spans as ANSI escape sequences.
///
/// Colors are encoded at the configured [`ColorDepth`]; a style with no
/// color and no attribute leaves the text untouched.
///
/// ```rust
/// use inkset_color::ColorDepth;
/// use inkset_render::ast::Tag;
/// use inkset_render::layout::Span;
/// use inkset_render::render::{SpanRenderer, TerminalRenderer};
/// use inkset_render::style::ColorScheme;
///
/// let renderer = TerminalRenderer::new(ColorScheme::vcdark(), ColorDepth::Ansi256);
/// let out = renderer.render_span(&Span::new("x", vec![Tag::Code])).unwrap();
/// assert_eq!(out, "\x1b[38;5;153m\x1b[48;5;234mx\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalRenderer {
    scheme: ColorScheme,
    depth: ColorDepth,
}

impl TerminalRenderer {
    pub fn new(scheme: ColorScheme, depth: ColorDepth) -> Self {
        Self { scheme, depth }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.scheme.clone(), options.depth)
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Wraps `text` in the escapes for `style`, closed by a reset.
    pub fn format(&self, text: &str, style: &Style) -> String {
        let mut prefix = String::new();
        if let Some(fg) = style.fg {
            prefix.push_str(&self.depth.fg(fg));
        }
        if let Some(bg) = style.bg {
            prefix.push_str(&self.depth.bg(bg));
        }
        if style.bold {
            prefix.push_str(BOLD);
        }
        if style.italic {
            prefix.push_str(ITALIC);
        }
        if style.underline {
            prefix.push_str(UNDERLINE);
        }
        if prefix.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", prefix, text, CLEAR)
        }
    }
}

impl SpanRenderer for TerminalRenderer {
    fn render_span(&self, span: &Span) -> Result<String> {
        let style = self.scheme.style(span.style_key())?;
        Ok(self.format(&span.text, &style))
    }
}
