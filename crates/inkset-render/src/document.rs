//! Whole-document layout and ordered output.
//!
//! A [`Document`] is the laid-out form of a document tree: one [`Block`] per
//! top-level node, every row padded to the configured width. Writing it
//! through a [`SpanRenderer`] emits each block's rows followed by one blank
//! spacer row.
//!
//! ```rust
//! use inkset_render::ast::Node;
//! use inkset_render::layout::Layout;
//! use inkset_render::render::PlainRenderer;
//! use inkset_render::Document;
//!
//! let tree = Node::document(vec![
//!     Node::paragraph(vec![Node::text("first")]),
//!     Node::paragraph(vec![Node::text("second")]),
//! ]);
//! let doc = Document::build(&tree, Layout::new(8)).unwrap();
//! let lines = doc.render_lines(&PlainRenderer).unwrap();
//! assert_eq!(lines, vec!["first   ", "        ", "second  ", "        "]);
//! ```

use std::io::Write;

use crate::ast::{Node, Tag};
use crate::error::Result;
use crate::layout::{Layout, Run};
use crate::render::SpanRenderer;

/// The rows laid out from one top-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    rows: Vec<Run>,
    width: usize,
}

impl Block {
    pub fn new(rows: Vec<Run>, width: usize) -> Self {
        Self { rows, width }
    }

    pub fn rows(&self) -> &[Run] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Run> {
        &mut self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The blank row written after the block.
    pub fn spacer(&self) -> Run {
        let width = self.rows.last().map_or(self.width, Run::width);
        Run::from_text(" ".repeat(width), Vec::new())
    }
}

/// Lays out one top-level node into blocks.
///
/// A block quote yields one block per child, each tagged `block_quote`;
/// anything else yields a single block. Rows are padded to the layout width.
pub fn layout_top_level(node: &Node, layout: Layout) -> Result<Vec<Block>> {
    let mut blocks = match node {
        Node::BlockQuote { children } => {
            let mut blocks = Vec::with_capacity(children.len());
            for child in children {
                let mut rows = layout.block(child)?;
                for row in &mut rows {
                    row.prepend_tag(Tag::BlockQuote);
                }
                blocks.push(Block::new(rows, layout.width()));
            }
            blocks
        }
        _ => vec![Block::new(layout.block(node)?, layout.width())],
    };
    for block in &mut blocks {
        for row in &mut block.rows {
            row.pad_to(layout.width());
        }
    }
    Ok(blocks)
}

/// A laid-out document, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Lays out a tree. A `document` root contributes its children as the
    /// top-level blocks; any other root is laid out as a single block.
    pub fn build(root: &Node, layout: Layout) -> Result<Self> {
        match root {
            Node::Document { children } => Self::from_blocks(children, layout),
            other => Self::from_blocks(std::slice::from_ref(other), layout),
        }
    }

    pub fn from_blocks(nodes: &[Node], layout: Layout) -> Result<Self> {
        let mut blocks = Vec::with_capacity(nodes.len());
        for node in nodes {
            blocks.extend(layout_top_level(node, layout)?);
        }
        log::debug!(
            "built document: {} blocks from {} nodes at width {}",
            blocks.len(),
            nodes.len(),
            layout.width()
        );
        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Every output row in order, spacer rows included.
    pub fn rows(&self) -> impl Iterator<Item = Run> + '_ {
        self.blocks.iter().flat_map(|block| {
            block
                .rows
                .iter()
                .cloned()
                .chain(std::iter::once(block.spacer()))
        })
    }

    /// Renders every row through `renderer` and writes one line per row.
    ///
    /// Rows are written as soon as they are rendered; if a span fails to
    /// render, the rows before it stay written.
    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        renderer: &dyn SpanRenderer,
    ) -> Result<()> {
        for row in self.rows() {
            let line = renderer.render_row(&row)?;
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Renders every row through `renderer`.
    pub fn render_lines(&self, renderer: &dyn SpanRenderer) -> Result<Vec<String>> {
        self.rows().map(|row| renderer.render_row(&row)).collect()
    }
}
