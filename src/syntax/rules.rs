//! Pattern rules for syntax highlighting
//!
//! A rule is a regex plus the token classes to assign to the whole
//! match or to individual capture groups. Rules run in table order
//! over the text that earlier rules left outside of sealed spans.

use regex::{Regex, RegexBuilder};

use super::tokens::TokenClass;
use crate::error::{Result, ViewError};

/// A byte range of a text chunk to wrap in a token span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    /// Byte offset where the span starts (inclusive)
    pub start: usize,
    /// Byte offset where the span ends (exclusive)
    pub end: usize,
    /// Token class of the span
    pub class: TokenClass,
}

/// A single highlight rule
pub struct HighlightRule {
    /// Name for debugging and error reports
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Capture group index -> token class (group 0 is the whole match)
    pub captures: Vec<(usize, TokenClass)>,
    /// Capture group whose text is scanned again by a nested rule
    nested: Option<(usize, Box<HighlightRule>)>,
}

impl HighlightRule {
    /// Create a rule that wraps every whole match
    pub fn new(name: &str, pattern: &str, class: TokenClass) -> Result<Self> {
        Self::build(name, pattern, vec![(0, class)], false)
    }

    /// Create a whole-match rule where `^`/`$` anchor at every line
    pub fn multiline(name: &str, pattern: &str, class: TokenClass) -> Result<Self> {
        Self::build(name, pattern, vec![(0, class)], true)
    }

    /// Create a rule that wraps selected capture groups
    pub fn groups(
        name: &str,
        pattern: &str,
        captures: &[(usize, TokenClass)],
        multiline: bool,
    ) -> Result<Self> {
        Self::build(name, pattern, captures.to_vec(), multiline)
    }

    fn build(
        name: &str,
        pattern: &str,
        captures: Vec<(usize, TokenClass)>,
        multiline: bool,
    ) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(multiline)
            .build()
            .map_err(|source| ViewError::InvalidRule {
                name: name.to_string(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            captures,
            nested: None,
        })
    }

    /// Scan capture group `group` of every match with `rule`
    pub fn with_nested(mut self, group: usize, rule: HighlightRule) -> Self {
        self.nested = Some((group, Box::new(rule)));
        self
    }

    /// Find the ranges of `text` this rule wraps, sorted and non-overlapping
    pub fn find_wraps(&self, text: &str) -> Vec<Wrap> {
        self.find_wraps_in(text, 0, text.len())
    }

    /// Like `find_wraps`, but only report matches lying inside
    /// `start..end`. The rest of `haystack` still counts for `^`, `$`
    /// and `\b`, and a match running past `end` is dropped.
    pub fn find_wraps_in(&self, haystack: &str, start: usize, end: usize) -> Vec<Wrap> {
        let mut wraps = Vec::new();
        let mut pos = start;

        while pos <= end {
            let Some(caps) = self.pattern.captures_at(haystack, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if whole.start() > end || whole.end() > end {
                break;
            }

            for &(group, class) in &self.captures {
                if let Some(m) = caps.get(group) {
                    if !m.is_empty() {
                        wraps.push(Wrap {
                            start: m.start(),
                            end: m.end(),
                            class,
                        });
                    }
                }
            }

            if let Some((group, rule)) = &self.nested {
                if let Some(m) = caps.get(*group) {
                    wraps.extend(rule.find_wraps(m.as_str()).into_iter().map(|w| Wrap {
                        start: w.start + m.start(),
                        end: w.end + m.start(),
                        class: w.class,
                    }));
                }
            }

            pos = if whole.is_empty() {
                haystack[whole.end()..]
                    .chars()
                    .next()
                    .map_or(haystack.len() + 1, |ch| whole.end() + ch.len_utf8())
            } else {
                whole.end()
            };
        }

        wraps.sort_by_key(|w| w.start);
        let mut last_end = 0;
        wraps.retain(|w| {
            if w.start < last_end {
                return false;
            }
            last_end = w.end;
            true
        });
        wraps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_match_rule() {
        let rule = HighlightRule::new("number", r"\d+", TokenClass::Number).unwrap();
        let wraps = rule.find_wraps("abc 123 def 4");
        assert_eq!(
            wraps,
            vec![
                Wrap { start: 4, end: 7, class: TokenClass::Number },
                Wrap { start: 12, end: 13, class: TokenClass::Number },
            ]
        );
        assert!(rule.find_wraps("no numbers").is_empty());
    }

    #[test]
    fn test_group_rule_skips_missing_groups() {
        let rule = HighlightRule::groups(
            "unit",
            r"(\d+)(px)?",
            &[(1, TokenClass::Number), (2, TokenClass::Unit)],
            false,
        )
        .unwrap();
        let wraps = rule.find_wraps("10px 3");
        assert_eq!(wraps.len(), 3);
        assert_eq!(wraps[1], Wrap { start: 2, end: 4, class: TokenClass::Unit });
        assert_eq!(wraps[2], Wrap { start: 5, end: 6, class: TokenClass::Number });
    }

    #[test]
    fn test_multiline_anchors() {
        let rule = HighlightRule::multiline("start", r"^\w+", TokenClass::Keyword).unwrap();
        assert_eq!(rule.find_wraps("one two\nthree").len(), 2);

        let single = HighlightRule::new("start", r"^\w+", TokenClass::Keyword).unwrap();
        assert_eq!(single.find_wraps("one two\nthree").len(), 1);
    }

    #[test]
    fn test_nested_rule_offsets() {
        let inner = HighlightRule::new("word", r"\w+", TokenClass::AttributeName).unwrap();
        let rule = HighlightRule::groups("outer", r"\[([^\]]*)\]", &[], false)
            .unwrap()
            .with_nested(1, inner);
        let wraps = rule.find_wraps("x [a b]");
        assert_eq!(
            wraps,
            vec![
                Wrap { start: 3, end: 4, class: TokenClass::AttributeName },
                Wrap { start: 5, end: 6, class: TokenClass::AttributeName },
            ]
        );
    }

    #[test]
    fn test_find_wraps_in_keeps_left_context() {
        let rule = HighlightRule::multiline("start", r"^\w+", TokenClass::Keyword).unwrap();
        assert!(rule.find_wraps_in("ab cd", 3, 5).is_empty());
        assert_eq!(
            rule.find_wraps_in("ab\ncd", 3, 5),
            vec![Wrap { start: 3, end: 5, class: TokenClass::Keyword }]
        );

        let word = HighlightRule::new("word", r"\bcd\b", TokenClass::Keyword).unwrap();
        assert!(word.find_wraps_in("abcd", 2, 4).is_empty());
    }

    #[test]
    fn test_find_wraps_in_keeps_right_context() {
        let line_end = HighlightRule::multiline("tail", r"\w+$", TokenClass::Keyword).unwrap();
        assert!(line_end.find_wraps_in("ab cd", 0, 2).is_empty());
        assert_eq!(
            line_end.find_wraps_in("ab\ncd", 0, 2),
            vec![Wrap { start: 0, end: 2, class: TokenClass::Keyword }]
        );

        let word = HighlightRule::new("word", r"\bab\b", TokenClass::Keyword).unwrap();
        assert!(word.find_wraps_in("abcd", 0, 2).is_empty());
    }

    #[test]
    fn test_find_wraps_in_drops_matches_past_end() {
        let rule = HighlightRule::new("pair", r"\d+", TokenClass::Number).unwrap();
        assert_eq!(
            rule.find_wraps_in("1 23", 0, 3),
            vec![Wrap { start: 0, end: 1, class: TokenClass::Number }]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = HighlightRule::new("broken", r"(unclosed", TokenClass::Keyword).err();
        assert!(matches!(err, Some(ViewError::InvalidRule { ref name, .. }) if name == "broken"));
    }
}
