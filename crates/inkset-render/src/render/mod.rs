//! Render adapters: turn styled spans into backend text.
//!
//! Every adapter implements [`SpanRenderer`]. They all resolve a span's tag
//! stack the same way ([`StyleKey::resolve`](crate::style::StyleKey::resolve))
//! and differ only in how the resolved style is written out:
//!
//! - [`TerminalRenderer`]: ANSI escapes at a chosen [`ColorDepth`](inkset_color::ColorDepth)
//! - [`EditorRenderer`]: `<key>text</key>` markup plus a matching syntax script
//! - [`RtfRenderer`]: a complete rich-text document
//! - [`PlainRenderer`]: the bare text

mod editor;
mod rtf;
mod terminal;

pub use editor::{EditorRenderer, TableOfContents};
pub use rtf::{RtfRenderer, DEFAULT_RTF_WIDTH};
pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::layout::{Run, Span};

/// Formats spans for one output backend.
pub trait SpanRenderer {
    fn render_span(&self, span: &Span) -> Result<String>;

    /// Formats a whole row by concatenating its rendered spans.
    fn render_row(&self, row: &Run) -> Result<String> {
        let mut line = String::new();
        for span in row {
            line.push_str(&self.render_span(span)?);
        }
        Ok(line)
    }
}

/// Emits span text with no styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl SpanRenderer for PlainRenderer {
    fn render_span(&self, span: &Span) -> Result<String> {
        Ok(span.text.clone())
    }
}
