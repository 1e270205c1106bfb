//! Fixed-width layout of document blocks into rows of styled spans.
//!
//! - [`Span`], [`Run`]: text tagged with its enclosing node kinds, and rows of it
//! - [`wrap`]: greedy word wrap that keeps tags attached across breaks
//! - [`Layout`]: dispatches each block kind (paragraphs, tables, lists, ...)
//! - [`Glyphs`]: box-drawing characters, Unicode or plain ASCII

mod block;
mod span;
mod wrap;

use std::str::FromStr;

pub use block::{flatten, Layout};
pub use span::{Run, Span};
pub use wrap::wrap;

/// Character set for rules, table borders, bullets and outline trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyphs {
    /// Box-drawing characters: `─ │ ┼ ├ └`.
    #[default]
    Unicode,
    /// Plain ASCII dashes, pipes and plus signs.
    Ascii,
}

impl Glyphs {
    pub fn horizontal(self) -> char {
        match self {
            Glyphs::Unicode => '─',
            Glyphs::Ascii => '-',
        }
    }

    pub fn vertical(self) -> char {
        match self {
            Glyphs::Unicode => '│',
            Glyphs::Ascii => '|',
        }
    }

    pub fn cross(self) -> char {
        match self {
            Glyphs::Unicode => '┼',
            Glyphs::Ascii => '+',
        }
    }

    /// Two-column bullet list leader.
    pub fn bullet(self) -> &'static str {
        "* "
    }

    /// Outline branch corner for a child with later siblings.
    pub fn tee(self) -> char {
        match self {
            Glyphs::Unicode => '├',
            Glyphs::Ascii => '|',
        }
    }

    /// Outline branch corner for the last child.
    pub fn elbow(self) -> char {
        match self {
            Glyphs::Unicode => '└',
            Glyphs::Ascii => '`',
        }
    }
}

impl FromStr for Glyphs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Ok(Glyphs::Unicode),
            "ascii" => Ok(Glyphs::Ascii),
            _ => Err(format!("unknown glyph set: {}", s)),
        }
    }
}
