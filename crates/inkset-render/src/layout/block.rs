//! Block dispatch: one AST block in, rows of spans out.

use crate::ast::{ListKind, Node, Tag};
use crate::error::{RenderError, Result};

use super::span::{Run, Span};
use super::wrap::wrap;
use super::Glyphs;

/// Lays out blocks at a fixed column width.
///
/// ```rust
/// use inkset_render::ast::Node;
/// use inkset_render::layout::Layout;
///
/// let para = Node::paragraph(vec![Node::text("one two three")]);
/// let rows = Layout::new(7).block(&para).unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    glyphs: Glyphs,
}

impl Layout {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    fn narrower(&self, by: usize) -> Self {
        Self {
            width: self.width.saturating_sub(by).max(1),
            glyphs: self.glyphs,
        }
    }

    /// Lays out one block.
    pub fn block(&self, node: &Node) -> Result<Vec<Run>> {
        log::trace!("layout {} at width {}", node.tag(), self.width);
        match node {
            Node::Paragraph { .. } | Node::Item { .. } => {
                Ok(wrap(flatten(node, Vec::new())?, self.width))
            }
            Node::Heading { level, .. } => {
                let root = if *level == 1 {
                    vec![Tag::Heading1]
                } else {
                    Vec::new()
                };
                Ok(wrap(flatten(node, root)?, self.width))
            }
            Node::CodeBlock { text } | Node::HtmlBlock { text } | Node::LatexBlock { text } => {
                Ok(literal_rows(text, node.tag()))
            }
            Node::ThematicBreak => Ok(vec![Run::from_text(
                self.glyphs.horizontal().to_string().repeat(self.width),
                vec![Tag::ThematicBreak],
            )]),
            Node::Table { children } => self.table(children),
            Node::List {
                list_type,
                start,
                children,
                ..
            } => self.list(*list_type, *start, children),
            Node::BlockQuote { children } => {
                let mut rows = self.blocks(children)?;
                for row in &mut rows {
                    row.prepend_tag(Tag::BlockQuote);
                }
                Ok(rows)
            }
            other => Err(RenderError::unrecognized(format!(
                "{} at block position",
                other.tag()
            ))),
        }
    }

    /// Lays out a sequence of blocks, one after another.
    pub fn blocks(&self, nodes: &[Node]) -> Result<Vec<Run>> {
        let mut rows = Vec::new();
        for node in nodes {
            rows.extend(self.block(node)?);
        }
        Ok(rows)
    }

    fn table(&self, rows: &[Node]) -> Result<Vec<Run>> {
        let mut cells: Vec<Vec<Run>> = Vec::with_capacity(rows.len());
        for row in rows {
            if !matches!(row, Node::TableRow { .. }) {
                return Err(RenderError::unrecognized(format!(
                    "{} inside table",
                    row.tag()
                )));
            }
            let row_tag = row.tag();
            let mut row_cells = Vec::new();
            for cell in row.children() {
                row_cells.push(flatten(cell, vec![row_tag])?);
            }
            cells.push(row_cells);
        }

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Ok(Vec::new());
        }
        let mut widths = vec![0; columns];
        for row in &mut cells {
            row.resize_with(columns, Run::new);
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.width());
            }
        }

        let vertical = self.glyphs.vertical().to_string();
        let mut out: Vec<Run> = cells
            .into_iter()
            .map(|row| {
                let padded = row
                    .into_iter()
                    .zip(&widths)
                    .map(|(mut cell, &w)| {
                        cell.pad_to(w);
                        cell
                    })
                    .collect();
                Run::join(padded, &vertical)
            })
            .collect();

        let horizontal = self.glyphs.horizontal().to_string();
        let rule: Vec<String> = widths.iter().map(|&w| horizontal.repeat(w)).collect();
        let rule = Run::from_text(rule.join(&self.glyphs.cross().to_string()), Vec::new());
        out.insert(1, rule);
        Ok(out)
    }

    fn list(&self, kind: ListKind, start: usize, items: &[Node]) -> Result<Vec<Run>> {
        let digits = (items.len() + start).saturating_sub(1).to_string().len();
        let mut rows = Vec::new();

        for (i, item) in items.iter().enumerate() {
            let Node::Item { children } = item else {
                return Err(RenderError::unrecognized(format!(
                    "{} inside list",
                    item.tag()
                )));
            };
            let leader = match kind {
                ListKind::Bullet => self.glyphs.bullet().to_string(),
                ListKind::Ordered => format!("{:>digits$}. ", i + start),
            };
            let indent = " ".repeat(leader.len());

            let inner = self.narrower(leader.len()).blocks(children)?;
            if inner.is_empty() {
                rows.push(Run::from_text(leader, vec![Tag::List]));
                continue;
            }
            for (j, mut row) in inner.into_iter().enumerate() {
                let prefix = if j == 0 { leader.clone() } else { indent.clone() };
                row.push_left(prefix, vec![Tag::List]);
                rows.push(row);
            }
        }
        Ok(rows)
    }
}

/// Flattens a container's inline content into one run.
///
/// Every span's tags are `root`, then the container's own tag, then the tags
/// of each nested node down to the leaf. Soft breaks become a space, hard
/// breaks become the `"\n"` marker [`wrap`] splits on.
pub fn flatten(node: &Node, mut root: Vec<Tag>) -> Result<Run> {
    root.push(node.tag());
    let mut run = Run::new();
    flatten_into(node.children(), &root, &mut run)?;
    Ok(run)
}

fn flatten_into(children: &[Node], stack: &[Tag], run: &mut Run) -> Result<()> {
    for child in children {
        let mut tags = stack.to_vec();
        tags.push(child.tag());
        match child {
            Node::SoftBreak => run.push(Span::new(" ", tags)),
            Node::LineBreak => run.push(Span::new("\n", tags)),
            Node::ThematicBreak => {
                return Err(RenderError::unrecognized(
                    "thematic_break inside inline content",
                ))
            }
            _ => match child.literal() {
                // a raw newline in text would read as a hard break
                Some(text) if text.contains('\n') => {
                    run.push(Span::new(text.replace('\n', " "), tags))
                }
                Some(text) => run.push(Span::new(text, tags)),
                None => flatten_into(child.children(), &tags, run)?,
            },
        }
    }
    Ok(())
}

fn literal_rows(text: &str, tag: Tag) -> Vec<Run> {
    text.trim_end()
        .split('\n')
        .map(|line| Run::from_text(line, vec![tag]))
        .collect()
}
