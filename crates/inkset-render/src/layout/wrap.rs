//! Tag-preserving greedy word wrap.
//!
//! [`wrap`] breaks a [`Run`] into rows no wider than a target width while
//! keeping every character attached to the tags it arrived with. Breaks
//! only happen at whitespace, and the whitespace at a break is dropped.
//! Words are found across span boundaries, so `"fox"` followed directly by
//! an emphasized `"jumps"` is one word and is never split.
//!
//! A span whose text is exactly `"\n"` is a hard break: the run is split
//! there and each side is wrapped on its own.
//!
//! A single word wider than the target width gets a row of its own and
//! overflows it; words are never split mid-character. Whitespace leading a
//! segment is kept only while it and the first word fit on the row.
//!
//! ```rust
//! use inkset_render::layout::{wrap, Run};
//!
//! let rows = wrap(Run::from_text("The quick brown fox jumps", vec![]), 10);
//! let text: Vec<String> = rows.iter().map(|r| r.text()).collect();
//! assert_eq!(text, vec!["The quick", "brown fox", "jumps"]);
//! ```

use unicode_width::UnicodeWidthStr;

use super::span::{Run, Span};

/// Wraps `run` into rows of at most `width` columns.
pub fn wrap(run: Run, width: usize) -> Vec<Run> {
    let mut rows = Vec::new();
    for segment in split_hard_breaks(run) {
        wrap_segment(segment, width, &mut rows);
    }
    rows
}

fn split_hard_breaks(run: Run) -> Vec<Vec<Span>> {
    let mut segments = vec![Vec::new()];
    for span in run.into_spans() {
        if span.is_hard_break() {
            segments.push(Vec::new());
        } else if let Some(last) = segments.last_mut() {
            last.push(span);
        }
    }
    segments
}

/// A place in a span list: the span index and a byte offset into its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Pos {
    span: usize,
    byte: usize,
}

impl Pos {
    fn end(spans: &[Span]) -> Self {
        Self {
            span: spans.len(),
            byte: 0,
        }
    }

    fn is_exhausted(self, spans: &[Span]) -> bool {
        let mut rest = spans.iter().skip(self.span);
        rest.next().map_or(true, |s| s.text.len() <= self.byte)
            && rest.all(|s| s.text.is_empty())
    }
}

/// Emits rows from a cursor moving through the segment.
///
/// Each row reads only its own text plus the chunk that ends it, and the
/// rest-fits check is a subtraction from the width consumed so far.
fn wrap_segment(spans: Vec<Span>, width: usize, rows: &mut Vec<Run>) {
    let total: usize = spans.iter().map(Span::width).sum();
    if total <= width {
        rows.push(Run::from_spans(spans));
        return;
    }

    let first_row = rows.len();
    let mut pos = Pos::default();
    let mut consumed = 0;
    while !pos.is_exhausted(&spans) {
        if total.saturating_sub(consumed) <= width {
            rows.push(slice(&spans, pos, Pos::end(&spans)));
            break;
        }
        let Some(at) = first_line_break(&spans, pos, width) else {
            rows.push(slice(&spans, pos, Pos::end(&spans)));
            break;
        };
        if at.cut > pos {
            rows.push(slice(&spans, pos, at.cut));
        }
        pos = at.resume;
        consumed += at.advance;
    }
    if rows.len() == first_row {
        rows.push(Run::new());
    }
}

/// Where the first wrapped line starting at `from` ends.
///
/// The line is `from..cut`, the next one starts at `resume`, and `advance`
/// is the display width of `from..resume`. The whitespace between `cut`
/// and `resume` is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Break {
    cut: Pos,
    resume: Pos,
    advance: usize,
}

/// Returns `None` when the text from `from` cannot be broken.
fn first_line_break(spans: &[Span], from: Pos, width: usize) -> Option<Break> {
    let mut line_width = 0;
    let mut has_word = false;
    let mut word_end = from;

    for chunk in Chunks::new(spans, from) {
        if chunk.is_space {
            if line_width + chunk.width > width {
                // leading whitespace that overflows is dropped with the break
                let cut = if has_word { chunk.start } else { from };
                return Some(Break {
                    cut,
                    resume: chunk.end,
                    advance: line_width + chunk.width,
                });
            }
            line_width += chunk.width;
        } else if line_width + chunk.width <= width || line_width == 0 {
            line_width += chunk.width;
            has_word = true;
            word_end = chunk.end;
        } else {
            // without a word yet, only leading whitespace precedes the chunk
            let cut = if has_word { word_end } else { from };
            return Some(Break {
                cut,
                resume: chunk.start,
                advance: line_width,
            });
        }
    }
    None
}

/// A maximal run of whitespace or non-whitespace, possibly crossing spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Chunk {
    start: Pos,
    end: Pos,
    width: usize,
    is_space: bool,
}

/// Lazily splits the text from a position into alternating chunks.
struct Chunks<'a> {
    spans: &'a [Span],
    pos: Pos,
}

impl<'a> Chunks<'a> {
    fn new(spans: &'a [Span], from: Pos) -> Self {
        Self { spans, pos: from }
    }
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        while let Some(span) = self.spans.get(self.pos.span) {
            if self.pos.byte < span.text.len() {
                break;
            }
            self.pos = Pos {
                span: self.pos.span + 1,
                byte: 0,
            };
        }
        let first = self.spans.get(self.pos.span)?.text[self.pos.byte..]
            .chars()
            .next()?;
        let is_space = first.is_whitespace();
        let start = self.pos;
        let mut width = 0;

        while let Some(span) = self.spans.get(self.pos.span) {
            let text = &span.text[self.pos.byte..];
            let len = text
                .find(|c: char| c.is_whitespace() != is_space)
                .unwrap_or(text.len());
            width += text[..len].width();
            if len < text.len() {
                self.pos.byte += len;
                break;
            }
            self.pos = Pos {
                span: self.pos.span + 1,
                byte: 0,
            };
        }

        Some(Chunk {
            start,
            end: self.pos,
            width,
            is_space,
        })
    }
}

/// Copies the text between two positions into a run, keeping each
/// fragment's tags and skipping empty fragments.
fn slice(spans: &[Span], from: Pos, to: Pos) -> Run {
    let mut run = Run::new();
    for (i, span) in spans.iter().enumerate().take(to.span + 1).skip(from.span) {
        let start = if i == from.span { from.byte } else { 0 };
        let end = if i == to.span { to.byte } else { span.text.len() };
        if start < end {
            run.push(Span::new(&span.text[start..end], span.tags.clone()));
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Tag;
    use std::time::{Duration, Instant};

    fn texts(rows: &[Run]) -> Vec<String> {
        rows.iter().map(Run::text).collect()
    }

    // =========================================================================
    // Basic wrapping
    // =========================================================================

    #[test]
    fn test_fits_unchanged() {
        let run = Run::from_spans(vec![
            Span::new("short", vec![Tag::Paragraph]),
            Span::new(" line", vec![Tag::Paragraph, Tag::Emph]),
        ]);
        let rows = wrap(run.clone(), 20);
        assert_eq!(rows, vec![run]);
    }

    #[test]
    fn test_exact_width_fits() {
        let rows = wrap(Run::from_text("abcde fghij", vec![]), 11);
        assert_eq!(texts(&rows), vec!["abcde fghij"]);
    }

    #[test]
    fn test_greedy_word_wrap() {
        let rows = wrap(Run::from_text("The quick brown fox jumps", vec![]), 10);
        assert_eq!(texts(&rows), vec!["The quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_break_on_overflowing_whitespace() {
        // "abcd" fills the line; the space after it is the break
        let rows = wrap(Run::from_text("abcd efgh", vec![]), 4);
        assert_eq!(texts(&rows), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_collapses_whitespace_only_at_break() {
        let rows = wrap(Run::from_text("aa  bb   cc", vec![]), 6);
        assert_eq!(texts(&rows), vec!["aa  bb", "cc"]);
    }

    #[test]
    fn test_oversized_word_gets_own_row() {
        let rows = wrap(Run::from_text("a supercalifragilistic b", vec![]), 8);
        assert_eq!(texts(&rows), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_single_oversized_word() {
        let rows = wrap(Run::from_text("antidisestablishment", vec![]), 5);
        assert_eq!(texts(&rows), vec!["antidisestablishment"]);
    }

    #[test]
    fn test_oversized_word_with_trailing_space() {
        let rows = wrap(Run::from_text("abcdefgh ", vec![]), 4);
        assert_eq!(texts(&rows), vec!["abcdefgh"]);
    }

    #[test]
    fn test_wide_characters_count_two_columns() {
        let rows = wrap(Run::from_text("日本 語語 本日", vec![]), 5);
        assert_eq!(texts(&rows), vec!["日本", "語語", "本日"]);
    }

    // =========================================================================
    // Tag attribution
    // =========================================================================

    #[test]
    fn test_tags_follow_fragments_across_break() {
        let run = Run::from_spans(vec![
            Span::new("plain text ", vec![Tag::Paragraph]),
            Span::new("bold words here", vec![Tag::Paragraph, Tag::Strong]),
        ]);
        let rows = wrap(run, 16);
        assert_eq!(texts(&rows), vec!["plain text bold", "words here"]);
        assert_eq!(rows[0].spans()[1], Span::new("bold", vec![Tag::Paragraph, Tag::Strong]));
        assert_eq!(
            rows[1].spans(),
            &[Span::new("words here", vec![Tag::Paragraph, Tag::Strong])]
        );
    }

    #[test]
    fn test_word_spanning_two_spans_is_not_split() {
        let run = Run::from_spans(vec![
            Span::new("The quick brown fox", vec![Tag::Paragraph]),
            Span::new("jumps", vec![Tag::Paragraph, Tag::Emph]),
            Span::new(" over", vec![Tag::Paragraph]),
        ]);
        let rows = wrap(run, 20);
        assert_eq!(texts(&rows), vec!["The quick brown", "foxjumps over"]);
        assert_eq!(rows[1].spans()[0].text, "fox");
        assert_eq!(rows[1].spans()[1].tags, vec![Tag::Paragraph, Tag::Emph]);
    }

    #[test]
    fn test_break_between_spans_drops_whitespace_span() {
        let run = Run::from_spans(vec![
            Span::new("one two", vec![Tag::Paragraph]),
            Span::new(" ", vec![Tag::Paragraph, Tag::SoftBreak]),
            Span::new("three", vec![Tag::Paragraph]),
        ]);
        let rows = wrap(run, 7);
        assert_eq!(texts(&rows), vec!["one two", "three"]);
        assert_eq!(rows[1].spans().len(), 1);
    }

    // =========================================================================
    // Hard breaks
    // =========================================================================

    #[test]
    fn test_hard_break_splits_and_is_dropped() {
        let run = Run::from_spans(vec![
            Span::plain("first"),
            Span::plain("\n"),
            Span::plain("second line"),
        ]);
        let rows = wrap(run, 40);
        assert_eq!(texts(&rows), vec!["first", "second line"]);
    }

    #[test]
    fn test_hard_break_sides_wrap_independently() {
        let run = Run::from_spans(vec![
            Span::plain("aaa bbb"),
            Span::plain("\n"),
            Span::plain("ccc ddd"),
        ]);
        let rows = wrap(run, 4);
        assert_eq!(texts(&rows), vec!["aaa", "bbb", "ccc", "ddd"]);
    }

    #[test]
    fn test_empty_run_is_one_empty_row() {
        let rows = wrap(Run::new(), 10);
        assert_eq!(rows, vec![Run::new()]);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    #[test]
    fn test_chunks_alternate() {
        let spans = vec![Span::plain("ab  c")];
        let c: Vec<(usize, usize, usize, bool)> = Chunks::new(&spans, Pos::default())
            .map(|c| (c.start.byte, c.end.byte, c.width, c.is_space))
            .collect();
        assert_eq!(c, vec![(0, 2, 2, false), (2, 4, 2, true), (4, 0, 1, false)]);
    }

    #[test]
    fn test_chunks_cross_span_boundaries() {
        let spans = vec![
            Span::plain("fo"),
            Span::new("", vec![Tag::Emph]),
            Span::new("x ", vec![Tag::Emph]),
            Span::plain(" dog"),
        ];
        let c: Vec<Chunk> = Chunks::new(&spans, Pos { span: 0, byte: 1 }).collect();
        assert_eq!(c.len(), 3);
        assert_eq!(c[0].start, Pos { span: 0, byte: 1 });
        assert_eq!(c[0].end, Pos { span: 2, byte: 1 });
        assert_eq!(c[0].width, 2);
        assert_eq!(c[1].end, Pos { span: 3, byte: 1 });
        assert_eq!(c[1].width, 2);
        assert_eq!(c[2].end, Pos::end(&spans));
    }

    #[test]
    fn test_first_line_break_positions() {
        let spans = vec![Span::plain("aa bb"), Span::plain(" cc dd")];
        assert_eq!(
            first_line_break(&spans, Pos::default(), 4),
            Some(Break {
                cut: Pos { span: 0, byte: 2 },
                resume: Pos { span: 0, byte: 3 },
                advance: 3,
            })
        );
        assert_eq!(
            first_line_break(&spans, Pos { span: 0, byte: 3 }, 2),
            Some(Break {
                cut: Pos { span: 1, byte: 0 },
                resume: Pos { span: 1, byte: 1 },
                advance: 3,
            })
        );
        assert_eq!(first_line_break(&spans, Pos { span: 1, byte: 4 }, 2), None);
    }

    #[test]
    fn test_slice_mid_span() {
        let spans = vec![Span::plain("ab"), Span::new("cd ef", vec![Tag::Code])];
        let head = slice(&spans, Pos::default(), Pos { span: 1, byte: 2 });
        assert_eq!(head.text(), "abcd");
        assert_eq!(head.spans()[1].tags, vec![Tag::Code]);
        let tail = slice(&spans, Pos { span: 1, byte: 3 }, Pos::end(&spans));
        assert_eq!(tail.spans(), &[Span::new("ef", vec![Tag::Code])]);
    }

    // =========================================================================
    // Leading whitespace
    // =========================================================================

    #[test]
    fn test_overflowing_leading_whitespace_is_dropped() {
        let rows = wrap(Run::from_text("      abc def", vec![]), 4);
        assert_eq!(texts(&rows), vec!["abc", "def"]);
    }

    #[test]
    fn test_leading_whitespace_yields_to_first_word() {
        let rows = wrap(Run::from_text("  abc def", vec![]), 4);
        assert_eq!(texts(&rows), vec!["abc", "def"]);
    }

    #[test]
    fn test_leading_whitespace_kept_when_it_fits() {
        let rows = wrap(Run::from_text("  ab cd", vec![]), 4);
        assert_eq!(texts(&rows), vec!["  ab", "cd"]);
    }

    #[test]
    fn test_leading_whitespace_after_hard_break() {
        let run = Run::from_spans(vec![
            Span::plain("one"),
            Span::plain("\n"),
            Span::plain("        two"),
        ]);
        let rows = wrap(run, 5);
        assert_eq!(texts(&rows), vec!["one", "two"]);
    }

    #[test]
    fn test_whitespace_only_segment_keeps_its_row() {
        let run = Run::from_spans(vec![
            Span::plain("a"),
            Span::plain("\n"),
            Span::plain("      "),
            Span::plain("\n"),
            Span::plain("b"),
        ]);
        let rows = wrap(run, 4);
        assert_eq!(texts(&rows), vec!["a", "", "b"]);
    }

    // =========================================================================
    // Long paragraphs
    // =========================================================================

    fn assert_long_wrap(run: Run, words: &[&str]) {
        let started = Instant::now();
        let rows = wrap(run, 80);
        let elapsed = started.elapsed();

        assert!(rows.len() > 1000);
        for row in &rows {
            assert!(row.width() <= 80, "row {:?} too wide", row.text());
        }
        let joined: Vec<String> = rows.iter().map(Run::text).collect();
        assert_eq!(joined.join(" "), words.join(" "));
        assert!(elapsed < Duration::from_secs(2), "wrapping took {:?}", elapsed);
    }

    #[test]
    fn test_long_single_span_paragraph() {
        let words: Vec<&str> = (0..20_000)
            .map(|i| ["word", "lorem", "ipsum", "dolor"][i % 4])
            .collect();
        assert!(words.join(" ").len() > 100_000);
        assert_long_wrap(Run::from_text(words.join(" "), vec![Tag::Paragraph]), &words);
    }

    #[test]
    fn test_long_paragraph_with_span_per_word() {
        let words: Vec<&str> = (0..20_000)
            .map(|i| ["word", "lorem", "ipsum", "dolor"][i % 4])
            .collect();
        let spans: Vec<Span> = words
            .iter()
            .enumerate()
            .flat_map(|(i, w)| {
                let tag = if i % 2 == 0 { Tag::Strong } else { Tag::Emph };
                let gap = (i > 0).then(|| Span::plain(" "));
                gap.into_iter().chain(std::iter::once(Span::new(*w, vec![tag])))
            })
            .collect();
        assert_long_wrap(Run::from_spans(spans), &words);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn words(max_word: usize) -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec(
                prop::string::string_regex(&format!("[a-z]{{1,{}}}", max_word)).unwrap(),
                0..20,
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn rows_fit_when_words_fit(ws in words(8), width in 8usize..40) {
                let run = Run::from_text(ws.join(" "), vec![Tag::Paragraph]);
                for row in wrap(run, width) {
                    prop_assert!(row.width() <= width, "row {:?} wider than {}", row.text(), width);
                }
            }

            #[test]
            fn rewrapping_is_identity(ws in words(8), width in 8usize..40, extra in 0usize..10) {
                let rows = wrap(Run::from_text(ws.join(" "), vec![]), width);
                for row in &rows {
                    prop_assert_eq!(wrap(row.clone(), width + extra), vec![row.clone()]);
                }
            }

            #[test]
            fn words_survive_in_order(ws in words(12), width in 1usize..30) {
                let rows = wrap(Run::from_text(ws.join(" "), vec![]), width);
                let rejoined: Vec<String> = rows
                    .iter()
                    .flat_map(|r| r.text().split_whitespace().map(str::to_string).collect::<Vec<_>>())
                    .collect();
                prop_assert_eq!(rejoined, ws);
            }

            #[test]
            fn span_tags_are_preserved(ws in words(6), width in 6usize..20) {
                let spans: Vec<Span> = ws
                    .iter()
                    .enumerate()
                    .map(|(i, w)| {
                        let tag = if i % 2 == 0 { Tag::Strong } else { Tag::Emph };
                        Span::new(format!("{} ", w), vec![tag])
                    })
                    .collect();
                for row in wrap(Run::from_spans(spans), width) {
                    for span in row.spans() {
                        let word = span.text.trim();
                        if word.is_empty() {
                            continue;
                        }
                        let index = ws.iter().position(|w| w == word);
                        prop_assert!(index.is_some());
                    }
                }
            }
        }
    }
}
