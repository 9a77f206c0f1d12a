//! Annotated text documents
//!
//! `Markup` is the structured form of a highlighted document: raw text
//! pieces interleaved with span open/close pieces and zero-width
//! markers. Rules and overlays edit the piece list; escaping only
//! happens when the document is serialized, so character offsets into
//! the source text stay valid until then.

use super::rules::HighlightRule;
use super::tokens::TokenClass;

/// What a span or marker in the document stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// A highlighted token
    Token(TokenClass),
    /// Normal-mode block cursor
    Cursor,
    /// Insert-mode bar cursor (zero-width)
    InsertCursor,
    /// Visual-mode selection
    Selection,
    /// Cursor at the end of a visual selection (zero-width)
    VisualCursor,
}

/// One element of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Raw (unescaped) source text
    Text(String),
    /// Start of a span
    Open(Mark),
    /// End of the innermost open span
    Close,
    /// Zero-width marker
    Marker(Mark),
}

/// Class names for rendered spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    prefix: String,
}

impl ClassNames {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Class for a mark, e.g. `nvim-js-keyword`, `nvim-tag-name`, `nvim-cursor`
    pub fn mark(&self, scope: Option<&str>, mark: Mark) -> String {
        match (mark, scope) {
            (Mark::Token(class), Some(scope)) => {
                format!("{}-{}-{}", self.prefix, scope, class.name())
            }
            (Mark::Token(class), None) => format!("{}-{}", self.prefix, class.name()),
            (Mark::Cursor, _) => self.chrome("cursor"),
            (Mark::InsertCursor, _) => self.chrome("cursor-insert"),
            (Mark::Selection, _) => self.chrome("visual-selection"),
            (Mark::VisualCursor, _) => self.chrome("visual-cursor"),
        }
    }

    /// Class for a structural element of the editor view
    pub fn chrome(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Opening tag for a mark
    pub fn open_tag(&self, scope: Option<&str>, mark: Mark) -> String {
        format!("<span class=\"{}\">", self.mark(scope, mark))
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new("nvim")
    }
}

/// A single rendered line of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// Markup for the line, with balanced spans
    pub html: String,
    /// Whether the line shows any characters
    pub has_text: bool,
}

impl AnnotatedLine {
    /// Wrap an already-serialized line
    pub fn from_html(html: &str) -> Self {
        Self {
            html: html.to_string(),
            has_text: shows_text(html),
        }
    }
}

/// Whether serialized markup has anything besides span tags
fn shows_text(html: &str) -> bool {
    let mut rest = html;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("</span>") {
            rest = after;
        } else if rest.starts_with("<span ") {
            match rest.find('>') {
                Some(close) => rest = &rest[close + 1..],
                None => return true,
            }
        } else {
            return true;
        }
    }
    false
}

/// A highlighted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pieces: Vec<Piece>,
    /// Whether text pieces are HTML-escaped on output
    escape: bool,
    /// Language segment of token class names (`js` in `nvim-js-keyword`)
    scope: Option<&'static str>,
}

impl Markup {
    /// Create a document holding `text` as a single unannotated piece
    pub fn new(text: &str, escape: bool, scope: Option<&'static str>) -> Self {
        let pieces = if text.is_empty() {
            Vec::new()
        } else {
            vec![Piece::Text(text.to_string())]
        };
        Self {
            pieces,
            escape,
            scope,
        }
    }

    /// Unhighlighted, escaped document
    pub fn plain(text: &str) -> Self {
        Self::new(text, true, None)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The raw text of the document, without any annotation
    pub fn text(&self) -> String {
        self.pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Text(chunk) => Some(chunk.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Length of the raw text in characters
    pub fn char_len(&self) -> usize {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Text(chunk) => chunk.chars().count(),
                _ => 0,
            })
            .sum()
    }

    /// Apply one highlight rule to every text piece outside sealed spans.
    ///
    /// Each piece is matched separately, so a match never spans inserted
    /// markup, but the text around the piece still counts for anchors and
    /// word boundaries.
    pub fn apply_rule(&mut self, rule: &HighlightRule) {
        let full = self.text();
        let mut pieces = Vec::with_capacity(self.pieces.len());
        let mut open: Vec<Mark> = Vec::new();
        let mut offset = 0;

        for piece in std::mem::take(&mut self.pieces) {
            match piece {
                Piece::Text(chunk) => {
                    let start = offset;
                    offset += chunk.len();
                    if is_sealed(&open) {
                        pieces.push(Piece::Text(chunk));
                        continue;
                    }

                    let mut cursor = 0;
                    for wrap in rule.find_wraps_in(&full, start, offset) {
                        let (from, to) = (wrap.start - start, wrap.end - start);
                        if from > cursor {
                            pieces.push(Piece::Text(chunk[cursor..from].to_string()));
                        }
                        pieces.push(Piece::Open(Mark::Token(wrap.class)));
                        pieces.push(Piece::Text(chunk[from..to].to_string()));
                        pieces.push(Piece::Close);
                        cursor = to;
                    }
                    if cursor == 0 {
                        pieces.push(Piece::Text(chunk));
                    } else if cursor < chunk.len() {
                        pieces.push(Piece::Text(chunk[cursor..].to_string()));
                    }
                }
                Piece::Open(mark) => {
                    open.push(mark);
                    pieces.push(piece);
                }
                Piece::Close => {
                    open.pop();
                    pieces.push(piece);
                }
                Piece::Marker(_) => pieces.push(piece),
            }
        }

        self.pieces = pieces;
    }

    /// Make sure a piece boundary exists at a character offset.
    ///
    /// Returns the smallest piece index such that the pieces before it
    /// hold exactly `offset` characters of text.
    pub(crate) fn split_at_char(&mut self, offset: usize) -> usize {
        let mut seen = 0;
        for idx in 0..self.pieces.len() {
            if seen == offset {
                return idx;
            }
            let tail = match &mut self.pieces[idx] {
                Piece::Text(chunk) => {
                    let len = chunk.chars().count();
                    if offset < seen + len {
                        let byte = chunk
                            .char_indices()
                            .nth(offset - seen)
                            .map_or(chunk.len(), |(byte, _)| byte);
                        Some(chunk.split_off(byte))
                    } else {
                        seen += len;
                        None
                    }
                }
                _ => None,
            };
            if let Some(tail) = tail {
                self.pieces.insert(idx + 1, Piece::Text(tail));
                return idx + 1;
            }
        }
        self.pieces.len()
    }

    /// Insert pieces at a piece index
    pub(crate) fn insert(&mut self, idx: usize, pieces: Vec<Piece>) {
        self.pieces.splice(idx..idx, pieces);
    }

    /// Wrap each text piece in `start..end` in its own `mark` span.
    ///
    /// Returns the index just past the last wrapped piece.
    pub(crate) fn wrap_text_range(&mut self, start: usize, end: usize, mark: Mark) -> usize {
        let mut idx = start;
        let mut end = end;
        while idx < end {
            if matches!(self.pieces[idx], Piece::Text(_)) {
                self.pieces.insert(idx, Piece::Open(mark));
                self.pieces.insert(idx + 2, Piece::Close);
                idx += 3;
                end += 2;
            } else {
                idx += 1;
            }
        }
        end
    }

    /// Serialize the whole document
    pub fn to_html(&self, classes: &ClassNames) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(chunk) => self.push_text(&mut out, chunk),
                Piece::Open(mark) => out.push_str(&classes.open_tag(self.scope, *mark)),
                Piece::Close => out.push_str("</span>"),
                Piece::Marker(mark) => {
                    out.push_str(&classes.open_tag(self.scope, *mark));
                    out.push_str("</span>");
                }
            }
        }
        out
    }

    /// Serialize line by line.
    ///
    /// Spans open at a line break are closed at the end of the line and
    /// reopened at the start of the next one.
    pub fn lines(&self, classes: &ClassNames) -> Vec<AnnotatedLine> {
        let mut lines = Vec::new();
        let mut open: Vec<Mark> = Vec::new();
        let mut current = AnnotatedLine {
            html: String::new(),
            has_text: false,
        };

        for piece in &self.pieces {
            match piece {
                Piece::Text(chunk) => {
                    for (i, part) in chunk.split('\n').enumerate() {
                        if i > 0 {
                            for _ in &open {
                                current.html.push_str("</span>");
                            }
                            lines.push(std::mem::replace(
                                &mut current,
                                AnnotatedLine {
                                    html: String::new(),
                                    has_text: false,
                                },
                            ));
                            for mark in &open {
                                current.html.push_str(&classes.open_tag(self.scope, *mark));
                            }
                        }
                        if !part.is_empty() {
                            self.push_text(&mut current.html, part);
                            current.has_text = true;
                        }
                    }
                }
                Piece::Open(mark) => {
                    open.push(*mark);
                    current.html.push_str(&classes.open_tag(self.scope, *mark));
                }
                Piece::Close => {
                    open.pop();
                    current.html.push_str("</span>");
                }
                Piece::Marker(mark) => {
                    current.html.push_str(&classes.open_tag(self.scope, *mark));
                    current.html.push_str("</span>");
                }
            }
        }

        lines.push(current);
        lines
    }

    fn push_text(&self, out: &mut String, text: &str) {
        if self.escape {
            out.push_str(&escape_html(text));
        } else {
            out.push_str(text);
        }
    }
}

fn is_sealed(open: &[Mark]) -> bool {
    open.iter()
        .any(|mark| matches!(mark, Mark::Token(class) if class.seals_contents()))
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
