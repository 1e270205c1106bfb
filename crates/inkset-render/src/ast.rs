//! The parsed document tree consumed by layout.
//!
//! The tree is produced upstream by a markdown parser and handed over as an
//! immutable value. Every node kind is one variant of [`Node`]; leaves carry
//! their literal text and containers carry an ordered `children` list.
//!
//! Trees can be built in code with the helper constructors, or decoded from
//! JSON where each node is an object with a `kind` field:
//!
//! ```rust
//! use inkset_render::ast::Node;
//!
//! let doc = Node::from_json(r#"{
//!     "kind": "document",
//!     "children": [
//!         {"kind": "paragraph", "children": [{"kind": "text", "text": "hello"}]}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(doc, Node::document(vec![Node::paragraph(vec![Node::text("hello")])]));
//! ```

use std::fmt;

use serde::Deserialize;

use crate::error::Result;

/// Bullet or ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Ordered,
}

fn default_start() -> usize {
    1
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Document {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    Item {
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(rename = "type")]
        list_type: ListKind,
        #[serde(default = "default_start")]
        start: usize,
        #[serde(default)]
        tight: bool,
        #[serde(default)]
        children: Vec<Node>,
    },
    Table {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableRow {
        #[serde(default, alias = "isHeader")]
        is_header: bool,
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    CodeBlock {
        text: String,
    },
    HtmlBlock {
        text: String,
    },
    ThematicBreak,
    BlockQuote {
        #[serde(default)]
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
    Emph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strikethrough {
        #[serde(default)]
        children: Vec<Node>,
    },
    Code {
        text: String,
    },
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    #[serde(rename = "softbreak")]
    SoftBreak,
    #[serde(rename = "linebreak")]
    LineBreak,
    LatexInline {
        text: String,
    },
    LatexBlock {
        text: String,
    },
}

impl Node {
    /// Decodes a tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn document(children: Vec<Node>) -> Self {
        Node::Document { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading { level, children }
    }

    pub fn item(children: Vec<Node>) -> Self {
        Node::Item { children }
    }

    pub fn bullet_list(items: Vec<Node>) -> Self {
        Node::List {
            list_type: ListKind::Bullet,
            start: 1,
            tight: true,
            children: items,
        }
    }

    pub fn ordered_list(start: usize, items: Vec<Node>) -> Self {
        Node::List {
            list_type: ListKind::Ordered,
            start,
            tight: true,
            children: items,
        }
    }

    pub fn table(rows: Vec<Node>) -> Self {
        Node::Table { children: rows }
    }

    pub fn table_row(is_header: bool, cells: Vec<Node>) -> Self {
        Node::TableRow {
            is_header,
            children: cells,
        }
    }

    pub fn table_cell(children: Vec<Node>) -> Self {
        Node::TableCell { children }
    }

    pub fn code_block(text: impl Into<String>) -> Self {
        Node::CodeBlock { text: text.into() }
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::BlockQuote { children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn emph(children: Vec<Node>) -> Self {
        Node::Emph { children }
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Node::Code { text: text.into() }
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.into(),
            children,
        }
    }

    /// The tag this node contributes to the tag stack of its descendants.
    pub fn tag(&self) -> Tag {
        match self {
            Node::Document { .. } => Tag::Document,
            Node::Paragraph { .. } => Tag::Paragraph,
            Node::Heading { .. } => Tag::Heading,
            Node::Item { .. } => Tag::Item,
            Node::List { .. } => Tag::List,
            Node::Table { .. } => Tag::Table,
            Node::TableRow {
                is_header: true, ..
            } => Tag::TableHeader,
            Node::TableRow { .. } => Tag::TableRow,
            Node::TableCell { .. } => Tag::TableCell,
            Node::CodeBlock { .. } => Tag::CodeBlock,
            Node::HtmlBlock { .. } => Tag::HtmlBlock,
            Node::ThematicBreak => Tag::ThematicBreak,
            Node::BlockQuote { .. } => Tag::BlockQuote,
            Node::Text { .. } => Tag::Text,
            Node::Emph { .. } => Tag::Emph,
            Node::Strong { .. } => Tag::Strong,
            Node::Strikethrough { .. } => Tag::Strikethrough,
            Node::Code { .. } => Tag::Code,
            Node::Link { .. } => Tag::Link,
            Node::Image { .. } => Tag::Image,
            Node::SoftBreak => Tag::SoftBreak,
            Node::LineBreak => Tag::LineBreak,
            Node::LatexInline { .. } => Tag::LatexInline,
            Node::LatexBlock { .. } => Tag::LatexBlock,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Item { children }
            | Node::List { children, .. }
            | Node::Table { children }
            | Node::TableRow { children, .. }
            | Node::TableCell { children }
            | Node::BlockQuote { children }
            | Node::Emph { children }
            | Node::Strong { children }
            | Node::Strikethrough { children }
            | Node::Link { children, .. }
            | Node::Image { children, .. } => children,
            _ => &[],
        }
    }

    /// Literal text of a text-bearing leaf.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Node::CodeBlock { text }
            | Node::HtmlBlock { text }
            | Node::Text { text }
            | Node::Code { text }
            | Node::LatexInline { text }
            | Node::LatexBlock { text } => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of every leaf below this node, breaks as spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::SoftBreak | Node::LineBreak => out.push(' '),
            _ => match self.literal() {
                Some(text) => out.push_str(text),
                None => self.children().iter().for_each(|c| c.collect_text(out)),
            },
        }
    }
}

/// Identifies the node kind that encloses a span.
///
/// A span's tag stack lists these root-first. `Heading1` is never a node
/// kind of its own; layout pushes it in front of `Heading` for level-1
/// headings. `List` also marks the leader and indent spans of list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Document,
    Paragraph,
    Heading,
    Heading1,
    Item,
    List,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    CodeBlock,
    HtmlBlock,
    ThematicBreak,
    BlockQuote,
    Text,
    Emph,
    Strong,
    Strikethrough,
    Code,
    Link,
    Image,
    SoftBreak,
    LineBreak,
    LatexInline,
    LatexBlock,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Document => "document",
            Tag::Paragraph => "paragraph",
            Tag::Heading => "heading",
            Tag::Heading1 => "heading1",
            Tag::Item => "item",
            Tag::List => "list",
            Tag::Table => "table",
            Tag::TableRow => "table_row",
            Tag::TableHeader => "table_header",
            Tag::TableCell => "table_cell",
            Tag::CodeBlock => "code_block",
            Tag::HtmlBlock => "html_block",
            Tag::ThematicBreak => "thematic_break",
            Tag::BlockQuote => "block_quote",
            Tag::Text => "text",
            Tag::Emph => "emph",
            Tag::Strong => "strong",
            Tag::Strikethrough => "strikethrough",
            Tag::Code => "code",
            Tag::Link => "link",
            Tag::Image => "image",
            Tag::SoftBreak => "softbreak",
            Tag::LineBreak => "linebreak",
            Tag::LatexInline => "latex_inline",
            Tag::LatexBlock => "latex_block",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
