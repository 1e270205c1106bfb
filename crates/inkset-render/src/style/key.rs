//! Style keys and the tag-stack resolver.
//!
//! Every span carries the stack of node tags that enclose it. Resolution
//! turns that stack into one of fourteen [`StyleKey`]s in two passes:
//!
//! 1. Outer to inner, the first block-level container that has its own look
//!    wins (`code_block`, `block_quote`, `heading1`, `heading`,
//!    `table_header`, `latex_inline`, `latex_block`).
//! 2. Otherwise inner to outer, the nearest inline style wins (`emph`,
//!    `strong`, `strikethrough`, `code`, `image`, `link`).
//! 3. Otherwise `body`.
//!
//! So a link inside a heading is drawn as a heading, while a link inside
//! emphasis inside a paragraph is drawn as a link.

use std::fmt;
use std::str::FromStr;

use crate::ast::Tag;

/// The style classes a color scheme assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    Body,
    Heading1,
    Heading,
    TableHeader,
    LatexInline,
    LatexBlock,
    Strikethrough,
    Strong,
    Emph,
    CodeBlock,
    Code,
    BlockQuote,
    Image,
    Link,
}

impl StyleKey {
    pub const ALL: [StyleKey; 14] = [
        StyleKey::Body,
        StyleKey::Heading1,
        StyleKey::Heading,
        StyleKey::TableHeader,
        StyleKey::LatexInline,
        StyleKey::LatexBlock,
        StyleKey::Strikethrough,
        StyleKey::Strong,
        StyleKey::Emph,
        StyleKey::CodeBlock,
        StyleKey::Code,
        StyleKey::BlockQuote,
        StyleKey::Image,
        StyleKey::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Body => "body",
            StyleKey::Heading1 => "heading1",
            StyleKey::Heading => "heading",
            StyleKey::TableHeader => "table_header",
            StyleKey::LatexInline => "latex_inline",
            StyleKey::LatexBlock => "latex_block",
            StyleKey::Strikethrough => "strikethrough",
            StyleKey::Strong => "strong",
            StyleKey::Emph => "emph",
            StyleKey::CodeBlock => "code_block",
            StyleKey::Code => "code",
            StyleKey::BlockQuote => "block_quote",
            StyleKey::Image => "image",
            StyleKey::Link => "link",
        }
    }

    /// Resolves a root-first tag stack to the key that styles it.
    pub fn resolve(tags: &[Tag]) -> StyleKey {
        tags.iter()
            .find_map(|&tag| container_key(tag))
            .or_else(|| tags.iter().rev().find_map(|&tag| inline_key(tag)))
            .unwrap_or(StyleKey::Body)
    }
}

fn container_key(tag: Tag) -> Option<StyleKey> {
    match tag {
        Tag::CodeBlock => Some(StyleKey::CodeBlock),
        Tag::BlockQuote => Some(StyleKey::BlockQuote),
        Tag::Heading1 => Some(StyleKey::Heading1),
        Tag::Heading => Some(StyleKey::Heading),
        Tag::TableHeader => Some(StyleKey::TableHeader),
        Tag::LatexInline => Some(StyleKey::LatexInline),
        Tag::LatexBlock => Some(StyleKey::LatexBlock),
        _ => None,
    }
}

fn inline_key(tag: Tag) -> Option<StyleKey> {
    match tag {
        Tag::Emph => Some(StyleKey::Emph),
        Tag::Strong => Some(StyleKey::Strong),
        Tag::Strikethrough => Some(StyleKey::Strikethrough),
        Tag::Code => Some(StyleKey::Code),
        Tag::Image => Some(StyleKey::Image),
        Tag::Link => Some(StyleKey::Link),
        _ => None,
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown style key: {}", s))
    }
}
