//! Cursor and visual-selection overlays
//!
//! Offsets are character offsets into the text. The string functions
//! (`apply_cursor`, `apply_selection`) treat whatever string they get as
//! plain characters, markup included. The `overlay_*` functions edit a
//! highlighted `Markup` document, so the offsets always address the
//! original source text.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ViewError};
use crate::mode::EditMode;
use crate::syntax::{ClassNames, Mark, Markup, Piece};

/// When cursor and selection offsets are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OffsetStrategy {
    /// Highlight first, then apply the offsets to the highlighted string.
    /// Offsets drift whenever escaping or spans precede them.
    Faithful,
    /// Apply the offsets to the highlighted document before it is
    /// serialized, so they always land on the intended characters
    #[default]
    Remapped,
}

impl OffsetStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            OffsetStrategy::Faithful => "faithful",
            OffsetStrategy::Remapped => "remapped",
        }
    }
}

impl fmt::Display for OffsetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OffsetStrategy {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "faithful" => Ok(OffsetStrategy::Faithful),
            "remapped" => Ok(OffsetStrategy::Remapped),
            _ => Err(ViewError::UnknownOffsets(s.to_string())),
        }
    }
}

impl TryFrom<String> for OffsetStrategy {
    type Error = ViewError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A selection as character offsets into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOffsets {
    pub start: usize,
    pub end: usize,
}

impl SelectionOffsets {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Offsets of the first occurrence of `needle` in `content`
    pub fn locate(content: &str, needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        let byte = content.find(needle)?;
        let start = content[..byte].chars().count();
        Some(Self::new(start, start + needle.chars().count()))
    }
}

/// Line index and column of a character offset.
///
/// Walks the lines accumulating `len + 1` per line; offsets past the end
/// land at the end of the last line.
fn line_column(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut current = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if current + len >= offset {
            return (i, offset - current);
        }
        current += len + 1;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.get(last).map_or(0, |line| line.chars().count()))
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// Mark the cursor position in `text`.
///
/// Normal mode wraps the character under the cursor, or appends a
/// one-space cursor at the end of a line. Insert mode adds a zero-width
/// bar. Visual mode leaves the text alone.
pub fn apply_cursor(text: &str, mode: EditMode, offset: usize, classes: &ClassNames) -> String {
    if text.is_empty() || mode == EditMode::Visual {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let (target, column) = line_column(&lines, offset);
    let line = lines[target];
    let split = byte_index(line, column);
    let (before, after) = line.split_at(split);

    let modified = match mode {
        EditMode::Normal => match after.chars().next() {
            Some(ch) => format!(
                "{}{}{}</span>{}",
                before,
                classes.open_tag(None, Mark::Cursor),
                ch,
                &after[ch.len_utf8()..]
            ),
            None => format!("{}{} </span>", line, classes.open_tag(None, Mark::Cursor)),
        },
        EditMode::Insert => format!(
            "{}{}</span>{}",
            before,
            classes.open_tag(None, Mark::InsertCursor),
            after
        ),
        EditMode::Visual => line.to_string(),
    };

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i == target { modified.as_str() } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `[start, end)` of `text` in a selection span followed by a
/// zero-width visual cursor. Empty or inverted ranges change nothing.
pub fn apply_selection(text: &str, start: usize, end: usize, classes: &ClassNames) -> String {
    let len = text.chars().count();
    let end = end.min(len);
    if text.is_empty() || start >= end {
        return text.to_string();
    }

    let (from, to) = (byte_index(text, start), byte_index(text, end));
    format!(
        "{}{}{}</span>{}</span>{}",
        &text[..from],
        classes.open_tag(None, Mark::Selection),
        &text[from..to],
        classes.open_tag(None, Mark::VisualCursor),
        &text[to..]
    )
}

/// `apply_cursor` or `apply_selection`, depending on the mode
pub fn apply(text: &str, mode: EditMode, selection: SelectionOffsets, classes: &ClassNames) -> String {
    match mode {
        EditMode::Visual => apply_selection(text, selection.start, selection.end, classes),
        _ => apply_cursor(text, mode, selection.start, classes),
    }
}

/// Mark the cursor position in a highlighted document
pub fn overlay_cursor(markup: &mut Markup, mode: EditMode, offset: usize) {
    let len = markup.char_len();
    if len == 0 || mode == EditMode::Visual {
        return;
    }

    let offset = offset.min(len);
    let text = markup.text();
    let lines: Vec<&str> = text.split('\n').collect();
    let (target, column) = line_column(&lines, offset);
    let at_line_end = column >= lines[target].chars().count();

    match mode {
        EditMode::Normal if at_line_end => {
            let mut idx = markup.split_at_char(offset);
            while matches!(markup.pieces().get(idx), Some(Piece::Close)) {
                idx += 1;
            }
            markup.insert(
                idx,
                vec![
                    Piece::Open(Mark::Cursor),
                    Piece::Text(" ".to_string()),
                    Piece::Close,
                ],
            );
        }
        EditMode::Normal => {
            let start = markup.split_at_char(offset);
            let end = markup.split_at_char(offset + 1);
            markup.wrap_text_range(start, end, Mark::Cursor);
        }
        EditMode::Insert => {
            let idx = markup.split_at_char(offset);
            markup.insert(idx, vec![Piece::Marker(Mark::InsertCursor)]);
        }
        EditMode::Visual => {}
    }
}

/// Wrap `[start, end)` of a highlighted document in selection spans,
/// followed by a zero-width visual cursor
pub fn overlay_selection(markup: &mut Markup, start: usize, end: usize) {
    let end = end.min(markup.char_len());
    if start >= end {
        return;
    }

    let from = markup.split_at_char(start);
    let to = markup.split_at_char(end);
    let after = markup.wrap_text_range(from, to, Mark::Selection);
    markup.insert(after, vec![Piece::Marker(Mark::VisualCursor)]);
}

/// `overlay_cursor` or `overlay_selection`, depending on the mode
pub fn overlay(markup: &mut Markup, mode: EditMode, selection: SelectionOffsets) {
    match mode {
        EditMode::Visual => overlay_selection(markup, selection.start, selection.end),
        _ => overlay_cursor(markup, mode, selection.start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Highlighter;

    fn classes() -> ClassNames {
        ClassNames::default()
    }

    #[test]
    fn test_normal_cursor_wraps_character() {
        assert_eq!(
            apply_cursor("abc\ndef", EditMode::Normal, 5, &classes()),
            "abc\nd<span class=\"nvim-cursor\">e</span>f"
        );
        assert_eq!(
            apply_cursor("héllo", EditMode::Normal, 1, &classes()),
            "h<span class=\"nvim-cursor\">é</span>llo"
        );
    }

    #[test]
    fn test_normal_cursor_at_line_end() {
        assert_eq!(
            apply_cursor("abc\ndef", EditMode::Normal, 3, &classes()),
            "abc<span class=\"nvim-cursor\"> </span>\ndef"
        );
        assert_eq!(
            apply_cursor("abc\ndef", EditMode::Normal, 42, &classes()),
            "abc\ndef<span class=\"nvim-cursor\"> </span>"
        );
    }

    #[test]
    fn test_insert_cursor() {
        assert_eq!(
            apply_cursor("abc", EditMode::Insert, 1, &classes()),
            "a<span class=\"nvim-cursor-insert\"></span>bc"
        );
        assert_eq!(
            apply_cursor("ab\n", EditMode::Insert, 3, &classes()),
            "ab\n<span class=\"nvim-cursor-insert\"></span>"
        );
    }

    #[test]
    fn test_visual_cursor_and_empty_text_unchanged() {
        assert_eq!(apply_cursor("abc", EditMode::Visual, 1, &classes()), "abc");
        assert_eq!(apply_cursor("", EditMode::Normal, 0, &classes()), "");
    }

    #[test]
    fn test_selection_abcdef() {
        let html = apply_selection("abcdef", 1, 4, &classes());
        assert_eq!(
            html,
            "a<span class=\"nvim-visual-selection\">bcd</span>\
             <span class=\"nvim-visual-cursor\"></span>ef"
        );
    }

    #[test]
    fn test_degenerate_selection() {
        assert_eq!(apply_selection("abcdef", 3, 3, &classes()), "abcdef");
        assert_eq!(apply_selection("abcdef", 4, 1, &classes()), "abcdef");
        assert_eq!(apply_selection("", 0, 2, &classes()), "");
        assert_eq!(apply_selection("abc", 7, 9, &classes()), "abc");
    }

    #[test]
    fn test_selection_end_is_clamped() {
        assert_eq!(
            apply_selection("abc", 1, 10, &classes()),
            "a<span class=\"nvim-visual-selection\">bc</span><span class=\"nvim-visual-cursor\"></span>"
        );
    }

    #[test]
    fn test_selection_keeps_surrounding_text() {
        let open = "<span class=\"nvim-visual-selection\">";
        let marker = "<span class=\"nvim-visual-cursor\"></span>";

        for text in ["abcdef", "ab\ncd\nef", "héllo\nwörld"] {
            let chars: Vec<char> = text.chars().collect();
            let len = chars.len();
            for (start, end) in [(0, 1), (1, 4), (2, len), (0, len), (len - 1, len)] {
                let html = apply_selection(text, start, end, &classes());
                let (before, rest) = html.split_once(open).unwrap();
                let (selected, rest) = rest.split_once("</span>").unwrap();
                let after = rest.strip_prefix(marker).unwrap();

                assert_eq!(before, chars[..start].iter().collect::<String>());
                assert_eq!(selected, chars[start..end].iter().collect::<String>());
                assert_eq!(after, chars[end..].iter().collect::<String>());

                let mut markup = Markup::plain(text);
                overlay_selection(&mut markup, start, end);
                assert_eq!(markup.text(), text);
                assert_eq!(markup.to_html(&classes()), html);
            }
        }
    }

    #[test]
    fn test_locate_selection() {
        assert_eq!(
            SelectionOffsets::locate("let é = x; x", "x"),
            Some(SelectionOffsets::new(8, 9))
        );
        assert_eq!(SelectionOffsets::locate("abc", "z"), None);
        assert_eq!(SelectionOffsets::locate("abc", ""), None);
        assert!(SelectionOffsets::caret(3).is_empty());
    }

    #[test]
    fn test_overlay_cursor_inside_token() {
        let mut markup = Highlighter::new().highlight_markup("if x", Some(crate::syntax::Language::JavaScript));
        overlay_cursor(&mut markup, EditMode::Normal, 0);
        assert_eq!(
            markup.to_html(&classes()),
            "<span class=\"nvim-js-keyword\"><span class=\"nvim-cursor\">i</span>f</span> x"
        );
    }

    #[test]
    fn test_remapped_offsets_skip_markup() {
        let highlighter = Highlighter::new();
        let language = Some(crate::syntax::Language::JavaScript);

        let mut markup = highlighter.highlight_markup("a<b", language);
        overlay_cursor(&mut markup, EditMode::Normal, 2);
        assert_eq!(
            markup.to_html(&classes()),
            "a<span class=\"nvim-js-operator\">&lt;</span><span class=\"nvim-cursor\">b</span>"
        );

        let faithful = apply_cursor(&highlighter.highlight("a<b", "js"), EditMode::Normal, 2, &classes());
        assert!(faithful.starts_with("a<<span class=\"nvim-cursor\">s</span>pan"));
    }

    #[test]
    fn test_overlay_cursor_at_line_end_leaves_token() {
        let mut markup = Highlighter::new().highlight_markup("return\nx", Some(crate::syntax::Language::JavaScript));
        overlay_cursor(&mut markup, EditMode::Normal, 6);
        assert_eq!(
            markup.to_html(&classes()),
            "<span class=\"nvim-js-keyword\">return</span><span class=\"nvim-cursor\"> </span>\nx"
        );
    }

    #[test]
    fn test_overlay_insert_and_clamp() {
        let mut markup = Markup::plain("ab");
        overlay_cursor(&mut markup, EditMode::Insert, 9);
        assert_eq!(markup.to_html(&classes()), "ab<span class=\"nvim-cursor-insert\"></span>");

        let mut empty = Markup::plain("");
        overlay_cursor(&mut empty, EditMode::Normal, 0);
        assert!(empty.pieces().is_empty());
    }

    #[test]
    fn test_overlay_selection_across_tokens() {
        let mut markup = Highlighter::new().highlight_markup("x = 1", Some(crate::syntax::Language::Python));
        overlay_selection(&mut markup, 2, 5);
        assert_eq!(
            markup.to_html(&classes()),
            "x <span class=\"nvim-py-operator\"><span class=\"nvim-visual-selection\">=</span></span>\
             <span class=\"nvim-visual-selection\"> </span>\
             <span class=\"nvim-py-number\"><span class=\"nvim-visual-selection\">1</span>\
             <span class=\"nvim-visual-cursor\"></span></span>"
        );
    }

    #[test]
    fn test_overlay_matches_string_path_on_plain_text() {
        for (mode, selection) in [
            (EditMode::Normal, SelectionOffsets::caret(2)),
            (EditMode::Insert, SelectionOffsets::caret(4)),
            (EditMode::Visual, SelectionOffsets::new(1, 4)),
        ] {
            let mut markup = Markup::plain("abcdef");
            overlay(&mut markup, mode, selection);
            assert_eq!(markup.to_html(&classes()), apply("abcdef", mode, selection, &classes()));
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("Faithful".parse::<OffsetStrategy>().unwrap(), OffsetStrategy::Faithful);
        assert_eq!(OffsetStrategy::default(), OffsetStrategy::Remapped);
        assert!("later".parse::<OffsetStrategy>().is_err());
    }
}
