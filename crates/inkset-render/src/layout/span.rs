//! Styled text fragments and the rows built from them.

use unicode_width::UnicodeWidthStr;

use crate::ast::Tag;
use crate::style::StyleKey;

/// A piece of text and the root-first stack of tags that enclose it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub tags: Vec<Tag>,
}

impl Span {
    pub fn new(text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// A span with no tags; styled as `body`.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// True for the marker a hard line break flattens to.
    pub fn is_hard_break(&self) -> bool {
        self.text == "\n"
    }

    pub fn style_key(&self) -> StyleKey {
        StyleKey::resolve(&self.tags)
    }
}

/// An ordered sequence of spans forming one row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    spans: Vec<Span>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A run holding one span.
    pub fn from_text(text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self::from_spans(vec![Span::new(text, tags)])
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Inserts a span at the start of the row.
    pub fn push_left(&mut self, text: impl Into<String>, tags: Vec<Tag>) {
        self.spans.insert(0, Span::new(text, tags));
    }

    pub fn extend(&mut self, other: Run) {
        self.spans.extend(other.spans);
    }

    /// Sum of the spans' display widths.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The spans' text, concatenated.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Appends an untagged run of spaces so the row is at least `width` wide.
    pub fn pad_to(&mut self, width: usize) {
        let current = self.width();
        if current < width {
            self.spans.push(Span::plain(" ".repeat(width - current)));
        }
    }

    /// Puts `tag` at the root of every span's tag stack.
    pub fn prepend_tag(&mut self, tag: Tag) {
        for span in &mut self.spans {
            span.tags.insert(0, tag);
        }
    }

    /// Concatenates runs with an untagged separator span between each pair.
    pub fn join(runs: Vec<Run>, separator: &str) -> Run {
        let mut joined = Run::new();
        for (i, run) in runs.into_iter().enumerate() {
            if i > 0 {
                joined.push(Span::plain(separator));
            }
            joined.extend(run);
        }
        joined
    }
}

impl FromIterator<Span> for Run {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::from_spans(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
