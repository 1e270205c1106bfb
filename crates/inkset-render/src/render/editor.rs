//! Editor markup output: `<key>text</key>` spans plus a vim syntax script
//! that conceals the markers and colors each region.

use std::fmt::Write as _;

use inkset_color::ansi256;

use super::SpanRenderer;
use crate::error::Result;
use crate::layout::{Glyphs, Span};
use crate::options::RenderOptions;
use crate::outline::{Outline, Section};
use crate::style::{ColorScheme, Style, StyleKey};

/// Outline tree lines and the fold ranges that collapse each subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOfContents {
    pub lines: Vec<String>,
    /// `(start, end)` line indices, inclusive, one per entry with children.
    pub folds: Vec<(usize, usize)>,
}

impl TableOfContents {
    /// Fold ranges shifted down by `offset` lines, for a buffer that has a
    /// header above the tree.
    pub fn folds_at(&self, offset: usize) -> Vec<(usize, usize)> {
        self.folds
            .iter()
            .map(|&(a, b)| (a + offset, b + offset))
            .collect()
    }
}

/// Wraps every span in `<key>...</key>` for the resolved style key.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRenderer {
    scheme: ColorScheme,
    glyphs: Glyphs,
}

impl EditorRenderer {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.scheme.clone()).with_glyphs(options.glyphs)
    }

    /// Region names: every style key, then the scheme's chrome entries.
    fn region_names(&self) -> Vec<String> {
        StyleKey::ALL
            .iter()
            .map(|k| k.as_str().to_string())
            .chain(self.scheme.chrome_names().map(str::to_string))
            .collect()
    }

    fn region_style(&self, name: &str) -> Result<Style> {
        match name.parse::<StyleKey>() {
            Ok(key) => Ok(self.scheme.style(key)?),
            Err(_) => Ok(self
                .scheme
                .chrome_style(name)
                .unwrap_or_else(|| self.scheme.default_style())),
        }
    }

    /// Script that conceals the markers and highlights each region.
    pub fn syntax_script(&self) -> Result<String> {
        let names = self.region_names();
        let mut out = String::new();
        out.push_str("setlocal conceallevel=2\n");
        out.push_str("setlocal concealcursor=nc\n\n");
        out.push_str(&highlight("Normal", &self.scheme.default_style()));
        for name in &names {
            let _ = writeln!(
                out,
                "syn region in{0} concealends matchgroup={0} start=\"<{0}>\" end=\"</{0}>\"",
                name
            );
        }
        out.push('\n');
        for name in names.iter().filter(|n| n.as_str() != "treeline") {
            out.push_str(&highlight(&format!("in{}", name), &self.region_style(name)?));
        }
        Ok(out)
    }

    /// Script for a window showing [`table_of_contents`](Self::table_of_contents).
    pub fn outline_script(&self) -> Result<String> {
        let tree = self
            .scheme
            .chrome_style("treeline")
            .unwrap_or_else(|| self.scheme.default_style());
        let chars: String = [
            self.glyphs.horizontal(),
            self.glyphs.vertical(),
            self.glyphs.elbow(),
            self.glyphs.tee(),
        ]
        .iter()
        .map(|c| format!("\\%u{:04x}", *c as u32))
        .collect::<Vec<_>>()
        .join("\\|");

        let mut out = String::new();
        let _ = writeln!(out, "syn match treeLine \"{}\"", chars);
        out.push_str("syn region tocHeader concealends matchgroup=tocHeader start=\"{\" end=\"$\"\n");
        out.push_str(&highlight("tocHeader", &tree));
        out.push_str(&highlight("treeLine", &tree));
        out.push_str(&highlight("Normal", &self.scheme.style(StyleKey::Strong)?));
        out.push_str("setlocal conceallevel=2\n");
        out.push_str("setlocal concealcursor=nc\n");
        Ok(out)
    }

    /// Draws the outline as a tree, one line per section below the root.
    ///
    /// `tabstop` is the column width of each nesting level (at least 1).
    pub fn table_of_contents(&self, outline: &Outline<'_>, tabstop: usize) -> TableOfContents {
        let tabstop = tabstop.max(1);
        let run = self.glyphs.horizontal().to_string().repeat(tabstop - 1);
        let pad = " ".repeat(tabstop - 1);
        let glyphs = TreeGlyphs {
            tee: format!("{}{}", self.glyphs.tee(), run),
            elbow: format!("{}{}", self.glyphs.elbow(), run),
            pipe: format!("{}{}", self.glyphs.vertical(), pad),
            space: " ".repeat(tabstop),
        };

        let mut lines = Vec::new();
        let children = &outline.root().children;
        for (i, child) in children.iter().enumerate() {
            draw(child, "", i + 1 == children.len(), &glyphs, &mut lines);
        }

        let folds = outline
            .walk()
            .iter()
            .skip(1)
            .enumerate()
            .filter_map(|(i, section)| match section.descendant_count() {
                0 => None,
                n => Some((i, i + n)),
            })
            .collect();

        TableOfContents { lines, folds }
    }
}

impl SpanRenderer for EditorRenderer {
    fn render_span(&self, span: &Span) -> Result<String> {
        let key = span.style_key();
        self.scheme.style(key)?;
        Ok(format!("<{0}>{1}</{0}>", key.as_str(), span.text))
    }
}

struct TreeGlyphs {
    tee: String,
    elbow: String,
    pipe: String,
    space: String,
}

fn draw(
    section: &Section<'_>,
    leader: &str,
    last: bool,
    glyphs: &TreeGlyphs,
    lines: &mut Vec<String>,
) {
    let branch = if last { &glyphs.elbow } else { &glyphs.tee };
    lines.push(format!("{}{}{}", leader, branch, section.title()));

    let indent = format!("{}{}", leader, if last { &glyphs.space } else { &glyphs.pipe });
    for (i, child) in section.children.iter().enumerate() {
        draw(child, &indent, i + 1 == section.children.len(), glyphs, lines);
    }
}

/// One `hi` command for a highlight group.
fn highlight(group: &str, style: &Style) -> String {
    let mut props = Vec::new();
    if let Some(fg) = style.fg {
        props.push(format!("guifg=#{:06x} ctermfg={}", fg.to_packed(), ansi256(fg)));
    }
    if let Some(bg) = style.bg {
        props.push(format!("guibg=#{:06x} ctermbg={}", bg.to_packed(), ansi256(bg)));
    }
    let attrs: Vec<&str> = [
        (style.bold, "bold"),
        (style.italic, "italic"),
        (style.underline, "underline"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| *name)
    .collect();
    if !attrs.is_empty() {
        props.push(format!("gui={0} cterm={0}", attrs.join(",")));
    }
    if props.is_empty() {
        format!("hi {}\n", group)
    } else {
        format!("hi {} {}\n", group, props.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Node, Tag};
    use crate::error::RenderError;

    fn renderer() -> EditorRenderer {
        EditorRenderer::new(ColorScheme::vcdark())
    }

    fn h(level: u8, text: &str) -> Node {
        Node::heading(level, vec![Node::text(text)])
    }

    // =========================================================================
    // Span markup
    // =========================================================================

    #[test]
    fn test_span_markup() {
        let span = Span::new("bold", vec![Tag::Paragraph, Tag::Strong, Tag::Text]);
        assert_eq!(
            renderer().render_span(&span).unwrap(),
            "<strong>bold</strong>"
        );
        assert_eq!(
            renderer().render_span(&Span::plain("  ")).unwrap(),
            "<body>  </body>"
        );
    }

    #[test]
    fn test_missing_style_is_fatal() {
        let bare = EditorRenderer::new(ColorScheme::new("bare", Style::default()));
        assert!(matches!(
            bare.render_span(&Span::plain("x")),
            Err(RenderError::Scheme(_))
        ));
    }

    // =========================================================================
    // Syntax script
    // =========================================================================

    #[test]
    fn test_syntax_script_preamble() {
        let script = renderer().syntax_script().unwrap();
        let mut lines = script.lines();
        assert_eq!(lines.next(), Some("setlocal conceallevel=2"));
        assert_eq!(lines.next(), Some("setlocal concealcursor=nc"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(
            lines.next(),
            Some("hi Normal guifg=#d4d4d4 ctermfg=188 guibg=#1e1e1e ctermbg=234")
        );
    }

    #[test]
    fn test_syntax_script_regions() {
        let script = renderer().syntax_script().unwrap();
        assert!(script.contains(
            "syn region inlink concealends matchgroup=link start=\"<link>\" end=\"</link>\"\n"
        ));
        assert!(script.contains(
            "syn region intreeline concealends matchgroup=treeline start=\"<treeline>\" end=\"</treeline>\"\n"
        ));
    }

    #[test]
    fn test_syntax_script_highlights() {
        let script = renderer().syntax_script().unwrap();
        assert!(script.contains(
            "hi inheading1 guifg=#ffffff ctermfg=231 guibg=#f44747 ctermbg=203 gui=bold cterm=bold\n"
        ));
        assert!(script.contains(
            "hi inlink guifg=#569cd6 ctermfg=74 guibg=#1e1e1e ctermbg=234 gui=underline cterm=underline\n"
        ));
        assert!(!script.contains("hi intreeline"));
        assert!(script.contains("hi intreetext "));
    }

    #[test]
    fn test_highlight_without_colors() {
        assert_eq!(highlight("inx", &Style::default()), "hi inx\n");
        let style = Style {
            italic: true,
            underline: true,
            ..Style::default()
        };
        assert_eq!(
            highlight("inx", &style),
            "hi inx gui=italic,underline cterm=italic,underline\n"
        );
    }

    #[test]
    fn test_outline_script() {
        let script = renderer().outline_script().unwrap();
        let first = script.lines().next().unwrap();
        assert_eq!(
            first,
            "syn match treeLine \"\\%u2500\\|\\%u2502\\|\\%u2514\\|\\%u251c\""
        );
        assert!(script.contains("hi treeLine guifg=#4ec9b0"));
        assert!(script.contains("hi Normal guifg=#ffffff"));
    }

    // =========================================================================
    // Table of contents
    // =========================================================================

    fn sample() -> Node {
        Node::document(vec![
            h(1, "Guide"),
            h(2, "Install"),
            h(3, "Linux"),
            h(3, "macOS"),
            h(2, "Usage"),
            h(3, "Flags"),
            h(4, "Short"),
        ])
    }

    #[test]
    fn test_toc_tree_unicode() {
        let doc = sample();
        let outline = Outline::from_document(&doc).unwrap();
        let toc = renderer().table_of_contents(&outline, 3);
        assert_eq!(
            toc.lines,
            vec![
                "├──Install",
                "│  ├──Linux",
                "│  └──macOS",
                "└──Usage",
                "   └──Flags",
                "      └──Short",
            ]
        );
    }

    #[test]
    fn test_toc_tree_ascii_tabstop() {
        let doc = sample();
        let outline = Outline::from_document(&doc).unwrap();
        let toc = renderer()
            .with_glyphs(Glyphs::Ascii)
            .table_of_contents(&outline, 2);
        assert_eq!(toc.lines[0], "|-Install");
        assert_eq!(toc.lines[1], "| |-Linux");
        assert_eq!(toc.lines[2], "| `-macOS");
        assert_eq!(toc.lines[3], "`-Usage");
    }

    #[test]
    fn test_toc_folds() {
        let doc = sample();
        let outline = Outline::from_document(&doc).unwrap();
        let toc = renderer().table_of_contents(&outline, 3);
        assert_eq!(toc.folds, vec![(0, 2), (3, 5), (4, 5)]);
        assert_eq!(toc.folds_at(9), vec![(9, 11), (12, 14), (13, 14)]);
    }

    #[test]
    fn test_toc_empty_document() {
        let doc = Node::document(vec![]);
        let outline = Outline::from_document(&doc).unwrap();
        assert_eq!(renderer().table_of_contents(&outline, 3), TableOfContents::default());
    }
}
