//! Rich-text (RTF) document output.
//!
//! The document is laid out with ASCII glyphs in a monospaced font, walked
//! section by section, and each block becomes a keep-together paragraph.
//! Section headings carry their outline number.

use std::fmt::Write as _;

use super::SpanRenderer;
use crate::ast::{Node, Tag};
use crate::document::{layout_top_level, Block};
use crate::error::Result;
use crate::layout::{Glyphs, Layout, Run, Span};
use crate::outline::Outline;

/// Width used when none is configured.
pub const DEFAULT_RTF_WIDTH: usize = 100;

const COLOR_TABLE: &str =
    "{\\colortbl ;\\red255\\green255\\blue255;\\red0\\green0\\blue0;\\red192\\green192\\blue192;}";

/// Rows at or above this count are split into kept head and tail groups.
const KEEP_LIMIT: usize = 6;
const KEEP_ROWS: usize = 3;

/// Renders a document tree as one RTF string.
///
/// ```rust
/// use inkset_render::ast::Node;
/// use inkset_render::render::RtfRenderer;
///
/// let doc = Node::document(vec![Node::paragraph(vec![Node::text("Hi {there}")])]);
/// let rtf = RtfRenderer::new().with_width(10).render(&doc).unwrap();
/// assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0\n"));
/// assert!(rtf.contains("Hi \\{there\\}"));
/// assert!(rtf.ends_with('}'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtfRenderer {
    width: usize,
    title: Option<String>,
}

impl Default for RtfRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_RTF_WIDTH,
            title: None,
        }
    }
}

impl RtfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets a title shown centered in the page header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn header(&self, out: &mut String) {
        out.push_str("{\\rtf1\\ansi\\deff0\n");
        out.push_str("{\\fonttbl {\\f0 Menlo;}}\\f0\\fs16\n");
        out.push_str(COLOR_TABLE);
        out.push_str("\\deflang1033 ");
        out.push_str("\\widowctrl ");
        match &self.title {
            None => out.push_str("\\margr720 \\margl720 \\margt720 \\margb720\n"),
            Some(title) => {
                out.push_str("\\margr720 \\margl720 \\margt0 \\margb720\n");
                let _ = writeln!(
                    out,
                    "{{\\header \\pard\\qc\\fs16\\sa180 {}\\par}}",
                    escape(title)
                );
            }
        }
    }

    /// Renders a `document` tree.
    pub fn render(&self, doc: &Node) -> Result<String> {
        let outline = Outline::from_document(doc)?;
        let layout = Layout::new(self.width).with_glyphs(Glyphs::Ascii);

        let mut out = String::new();
        self.header(&mut out);

        for section in outline.walk() {
            for (i, node) in section.blocks.iter().enumerate() {
                for (j, mut block) in layout_top_level(node, layout)?.into_iter().enumerate() {
                    let rows = block.rows().len();
                    out.push_str("{\\pard \\widctlpar \\keep");
                    if rows < KEEP_LIMIT {
                        out.push_str(" \\sa180");
                    }

                    if i == 0 && j == 0 && matches!(node, Node::Heading { .. }) {
                        out.push_str(" \\keepn\n");
                        let label = section.number_label();
                        match block.rows_mut().first_mut() {
                            Some(first) if !label.is_empty() => {
                                first.push_left(format!("{} ", label), Vec::new());
                            }
                            _ => {}
                        }
                    } else {
                        out.push('\n');
                    }

                    self.write_block(&block, &mut out)?;
                }
            }
        }

        out.push('}');
        log::debug!("rendered rtf document: {} bytes", out.len());
        Ok(out)
    }

    fn write_block(&self, block: &Block, out: &mut String) -> Result<()> {
        let rows = block.rows();
        if rows.len() < KEEP_LIMIT {
            return self.write_rows(rows, out);
        }
        self.write_rows(&rows[..KEEP_ROWS], out)?;
        if rows.len() > KEEP_LIMIT {
            out.push_str("{\\pard\n");
            self.write_rows(&rows[KEEP_ROWS..rows.len() - KEEP_ROWS], out)?;
        }
        out.push_str("{\\pard \\widctlpar \\keep \\sa180\n");
        self.write_rows(&rows[rows.len() - KEEP_ROWS..], out)
    }

    fn write_rows(&self, rows: &[Run], out: &mut String) -> Result<()> {
        for (i, row) in rows.iter().enumerate() {
            out.push_str(&self.render_row(row)?);
            if i + 1 < rows.len() {
                out.push_str("\\line\n");
            }
        }
        out.push_str("\\par}\n");
        Ok(())
    }
}

impl SpanRenderer for RtfRenderer {
    fn render_span(&self, span: &Span) -> Result<String> {
        let has = |tags: &[Tag]| tags.iter().any(|t| span.tags.contains(t));
        let code = has(&[Tag::Code, Tag::CodeBlock]);

        let mut text = escape(&span.text);
        if has(&[Tag::Strong, Tag::Heading, Tag::Heading1]) {
            text = format!("{{\\b {}}}", text);
        }
        if code {
            text = format!("{{\\i {}}}", text);
        }
        if has(&[Tag::Emph, Tag::Link, Tag::Image]) {
            text = format!("{{\\ul {}}}", text);
        }
        if has(&[Tag::Heading1]) {
            text = format!("{{\\fs28 {}}}", text);
        }
        if has(&[Tag::TableHeader]) {
            text = format!("{{\\cf1\\cb2\\highlight2 {}\\cf0\\highlight0}}", text);
        }
        if code {
            text = format!("{{\\cf2\\cb3\\highlight3 {}\\cf0\\highlight0}}", text);
        }
        Ok(text)
    }
}

/// Escapes RTF control characters; non-ASCII becomes `\uN?`.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{}?", *unit as i16);
                }
            }
        }
    }
    out
}
