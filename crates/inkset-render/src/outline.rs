//! Section tree of a document.
//!
//! The top-level blocks are split at every heading deeper than level 1.
//! Content before the first such heading forms the root section. Each
//! section nests under the nearest earlier section with a lower heading
//! level, and children are numbered from 1, so a section's number is a
//! path like `[2, 1]` (shown as `2.1`).
//!
//! ```rust
//! use inkset_render::ast::Node;
//! use inkset_render::Outline;
//!
//! let doc = Node::document(vec![
//!     Node::heading(2, vec![Node::text("Install")]),
//!     Node::heading(3, vec![Node::text("From source")]),
//!     Node::heading(2, vec![Node::text("Usage")]),
//! ]);
//! let outline = Outline::from_document(&doc).unwrap();
//! let ids: Vec<&str> = outline.walk().iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(ids, vec!["root", "install", "from-source", "usage"]);
//! ```

use std::collections::{HashSet, VecDeque};

use crate::ast::Node;
use crate::error::{RenderError, Result};

/// One section: a run of top-level blocks and the sections nested below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Slug built from the heading text, unique within the outline.
    pub id: String,
    /// Position in the tree; empty for the root.
    pub number: Vec<usize>,
    /// Heading level, or 1 for the root and for sections without a heading.
    pub level: u8,
    pub blocks: &'a [Node],
    pub children: Vec<Section<'a>>,
}

impl<'a> Section<'a> {
    /// Plain text of the section's first block.
    pub fn title(&self) -> String {
        self.blocks.first().map(Node::plain_text).unwrap_or_default()
    }

    /// True when the section starts with a heading below level 1.
    pub fn is_heading(&self) -> bool {
        matches!(self.blocks.first(), Some(Node::Heading { level, .. }) if *level > 1)
    }

    /// Number of sections nested anywhere below this one.
    pub fn descendant_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .iter()
                .map(Section::descendant_count)
                .sum::<usize>()
    }

    /// Outline number as shown in headings: `1.0` at the top level, `2.1`
    /// below it, empty for the root.
    pub fn number_label(&self) -> String {
        match self.number.as_slice() {
            [] => String::new(),
            [n] => format!("{}.0", n),
            path => path
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join("."),
        }
    }

    fn collect<'s>(&'s self, out: &mut Vec<&'s Section<'a>>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }
}

/// The section tree of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline<'a> {
    root: Section<'a>,
}

impl<'a> Outline<'a> {
    /// Builds the outline of a `document` node.
    pub fn from_document(doc: &'a Node) -> Result<Self> {
        let Node::Document { children } = doc else {
            return Err(RenderError::unrecognized(format!(
                "outline of {} (expected document)",
                doc.tag()
            )));
        };

        let chunks = split_sections(children);
        let mut assigned: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<Section<'a>> = VecDeque::with_capacity(chunks.len());

        for (i, chunk) in chunks.into_iter().enumerate() {
            let mut id = match chunk.first() {
                Some(first @ Node::Heading { .. }) => slug(&first.plain_text()),
                _ => "root".to_string(),
            };
            if assigned.contains(&id) {
                id = format!("{}--{}", id, assigned.len());
            }
            assigned.insert(id.clone());

            let level = match chunk.first() {
                Some(Node::Heading { level, .. }) if i > 0 => *level,
                _ => 1,
            };
            queue.push_back(Section {
                id,
                number: Vec::new(),
                level,
                blocks: chunk,
                children: Vec::new(),
            });
        }

        let root = match queue.pop_front() {
            Some(root) => nest(root, &mut queue),
            None => Section {
                id: "root".to_string(),
                number: Vec::new(),
                level: 1,
                blocks: &[],
                children: Vec::new(),
            },
        };
        log::debug!("outline: {} sections", root.descendant_count() + 1);
        Ok(Self { root })
    }

    pub fn root(&self) -> &Section<'a> {
        &self.root
    }

    /// Every section in document order, root first.
    pub fn walk(&self) -> Vec<&Section<'a>> {
        let mut out = Vec::new();
        self.root.collect(&mut out);
        out
    }
}

/// Splits blocks before every heading deeper than level 1. When the very
/// first block is such a heading an empty root chunk leads the list.
fn split_sections(blocks: &[Node]) -> Vec<&[Node]> {
    let starts: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, node)| matches!(node, Node::Heading { level, .. } if *level > 1))
        .map(|(i, _)| i)
        .collect();

    let mut chunks = Vec::with_capacity(starts.len() + 1);
    let mut begin = 0;
    for &start in &starts {
        chunks.push(&blocks[begin..start]);
        begin = start;
    }
    if !blocks.is_empty() {
        chunks.push(&blocks[begin..]);
    }
    chunks
}

fn nest<'a>(mut root: Section<'a>, queue: &mut VecDeque<Section<'a>>) -> Section<'a> {
    let mut counter = 1;
    while queue.front().is_some_and(|next| next.level > root.level) {
        if let Some(mut child) = queue.pop_front() {
            child.number = root.number.clone();
            child.number.push(counter);
            root.children.push(nest(child, queue));
            counter += 1;
        }
    }
    root
}

/// Lowercases `text` and replaces each run of non-word characters with `-`,
/// dropping a trailing `-`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push('-');
            in_gap = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}
