//! # Inkset Render - Markdown Tree Layout and Styled Output
//!
//! `inkset-render` takes an already-parsed markdown document tree and turns
//! it into fixed-width rows of styled text, then writes those rows to a
//! terminal (ANSI escapes), a text editor (`<key>` markup plus a syntax
//! script), or a rich-text (RTF) document.
//!
//! ## Core Concepts
//!
//! - [`ast::Node`]: the document tree, built in code or decoded from JSON
//! - [`layout::Layout`]: wraps paragraphs, aligns tables and indents lists at a column width
//! - [`style::StyleKey`]: the style class a span's tag stack resolves to
//! - [`style::ColorScheme`]: colors and attributes per style key, built in or from YAML
//! - [`render::SpanRenderer`]: one implementation per output backend
//! - [`Document`]: every top-level block laid out and padded, ready to write
//! - [`Outline`]: the numbered section tree used by the editor and RTF output
//!
//! ## Quick Start
//!
//! ```rust
//! use inkset_render::ast::Node;
//! use inkset_render::{render_terminal, RenderOptions};
//!
//! let doc = Node::document(vec![
//!     Node::heading(2, vec![Node::text("Usage")]),
//!     Node::paragraph(vec![
//!         Node::text("Run "),
//!         Node::code("inkset"),
//!         Node::text(" on a file."),
//!     ]),
//! ]);
//!
//! let lines = render_terminal(&doc, &RenderOptions::new().with_width(30)).unwrap();
//! assert_eq!(lines.len(), 4);
//! assert!(lines[2].contains("inkset"));
//! ```
//!
//! ## Plain Layout
//!
//! The layout stage knows nothing about colors. Writing a [`Document`]
//! through [`render::PlainRenderer`] shows the bare grid:
//!
//! ```rust
//! use inkset_render::ast::Node;
//! use inkset_render::layout::{Glyphs, Layout};
//! use inkset_render::render::PlainRenderer;
//! use inkset_render::Document;
//!
//! let table = Node::table(vec![
//!     Node::table_row(true, vec![
//!         Node::table_cell(vec![Node::text("Name")]),
//!         Node::table_cell(vec![Node::text("Age")]),
//!     ]),
//!     Node::table_row(false, vec![
//!         Node::table_cell(vec![Node::text("Bob")]),
//!         Node::table_cell(vec![Node::text("7")]),
//!     ]),
//! ]);
//! let layout = Layout::new(8).with_glyphs(Glyphs::Ascii);
//! let doc = Document::build(&Node::document(vec![table]), layout).unwrap();
//! let lines = doc.render_lines(&PlainRenderer).unwrap();
//! assert_eq!(lines, vec!["Name|Age", "----+---", "Bob |7  ", "        "]);
//! ```
//!
//! ## Color Schemes
//!
//! ```rust
//! use inkset_render::style::{ColorScheme, StyleKey};
//!
//! let scheme = ColorScheme::from_yaml("paper", r##"
//! default:
//!   fg: black
//!   bg: "#fdf6e3"
//! heading:
//!   fg: 0x268bd2
//!   bold: true
//! "##).unwrap();
//!
//! let heading = scheme.style(StyleKey::Heading).unwrap();
//! assert!(heading.bold);
//! assert_eq!(heading.fg.unwrap().to_string(), "#268bd2");
//! ```

pub mod ast;
mod document;
mod error;
pub mod layout;
mod options;
mod outline;
pub mod render;
pub mod style;

pub use document::{layout_top_level, Block, Document};
pub use error::{RenderError, Result};
pub use options::{RenderOptions, DEFAULT_WIDTH};
pub use outline::{slug, Outline, Section};
pub use style::{ColorScheme, SchemeError, StyleKey};

pub use inkset_color::{ColorDepth, Rgb};

use ast::Node;
use render::{EditorRenderer, RtfRenderer, TerminalRenderer};

/// Lays out `doc` and renders every row as an ANSI-styled terminal line,
/// a blank spacer row after each block.
pub fn render_terminal(doc: &Node, options: &RenderOptions) -> Result<Vec<String>> {
    log::debug!(
        "render terminal: width {}, depth {:?}, scheme {}",
        options.width,
        options.depth,
        options.scheme.name()
    );
    let document = Document::build(doc, options.layout())?;
    document.render_lines(&TerminalRenderer::from_options(options))
}

/// Lays out `doc` and renders every row as `<key>text</key>` editor markup.
///
/// Pair the lines with [`EditorRenderer::syntax_script`] to conceal the
/// markers and color each region.
pub fn render_editor(doc: &Node, options: &RenderOptions) -> Result<Vec<String>> {
    log::debug!(
        "render editor: width {}, scheme {}",
        options.width,
        options.scheme.name()
    );
    let document = Document::build(doc, options.layout())?;
    document.render_lines(&EditorRenderer::from_options(options))
}

/// Renders `doc` as a complete RTF document at the configured width.
///
/// Rich text always uses ASCII glyphs; `title`, when given, is printed
/// centered in the page header.
pub fn render_rtf(doc: &Node, options: &RenderOptions, title: Option<&str>) -> Result<String> {
    log::debug!("render rtf: width {}, title {:?}", options.width, title);
    let mut renderer = RtfRenderer::new().with_width(options.width);
    if let Some(title) = title {
        renderer = renderer.with_title(title);
    }
    renderer.render(doc)
}
