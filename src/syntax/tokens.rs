//! Token classes for syntax highlighting
//!
//! This module defines the lexical categories a highlight rule can
//! assign, the class-name suffix each one renders as, and the
//! terminal style used by the preview.

use super::style::{Color, Style};

/// Lexical categories produced by the highlight rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Language keywords (function, def, class, etc.)
    Keyword,
    /// String and character literals
    String,
    /// Line and block comments
    Comment,
    /// Numeric literals
    Number,
    /// Operators (+, ===, =>, etc.)
    Operator,
    /// Boolean and null-like literals
    Boolean,
    /// Built-in functions and globals
    Builtin,
    /// Python decorators (@property)
    Decorator,
    /// Java and Swift annotations (@Override, @objc)
    Annotation,
    /// Type names (String, Int, ArrayList)
    Type,
    /// CSS selectors
    Selector,
    /// CSS property names
    Property,
    /// HTML tag names
    TagName,
    /// HTML tag brackets (<, </, >, />)
    TagBracket,
    /// HTML attribute names
    AttributeName,
    /// The `=` between an attribute name and its value
    Equals,
    /// HTML attribute values
    AttributeValue,
    /// CSS at-rules (@media, @import)
    AtRule,
    /// CSS hex colors
    Color,
    /// CSS units (px, em, %)
    Unit,
    /// HTML DOCTYPE declarations
    Doctype,
}

impl TokenClass {
    /// Class-name suffix used in rendered markup
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::String => "string",
            TokenClass::Comment => "comment",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Boolean => "boolean",
            TokenClass::Builtin => "builtin",
            TokenClass::Decorator => "decorator",
            TokenClass::Annotation => "annotation",
            TokenClass::Type => "type",
            TokenClass::Selector => "selector",
            TokenClass::Property => "property",
            TokenClass::TagName => "tag-name",
            TokenClass::TagBracket => "tag-bracket",
            TokenClass::AttributeName => "attribute-name",
            TokenClass::Equals => "equals",
            TokenClass::AttributeValue => "attribute-value",
            TokenClass::AtRule => "at-rule",
            TokenClass::Color => "color",
            TokenClass::Unit => "unit",
            TokenClass::Doctype => "doctype",
        }
    }

    /// Whether later rules are kept out of text wrapped with this class.
    ///
    /// Comments and strings are highlighted first so that keywords inside
    /// them stay plain; selectors, colors and doctypes are never split.
    pub fn seals_contents(&self) -> bool {
        matches!(
            self,
            TokenClass::Comment
                | TokenClass::String
                | TokenClass::Selector
                | TokenClass::Color
                | TokenClass::Doctype
        )
    }

    /// Terminal style used by the preview
    pub fn default_style(&self) -> Style {
        match self {
            TokenClass::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenClass::String | TokenClass::AttributeValue => Style::fg(Color::Green),
            TokenClass::Number | TokenClass::Color => Style::fg(Color::Cyan),
            TokenClass::Unit => Style::fg(Color::BrightCyan),
            TokenClass::Keyword | TokenClass::AtRule => Style::fg(Color::Magenta).with_bold(),
            TokenClass::Boolean => Style::fg(Color::BrightRed),
            TokenClass::Type => Style::fg(Color::Yellow),
            TokenClass::Builtin => Style::fg(Color::Blue),
            TokenClass::Operator | TokenClass::Equals => Style::fg(Color::BrightWhite),
            TokenClass::Decorator | TokenClass::Annotation => Style::fg(Color::BrightBlue),
            TokenClass::Selector | TokenClass::TagName => Style::fg(Color::Red),
            TokenClass::Property | TokenClass::AttributeName => Style::fg(Color::BrightYellow),
            TokenClass::TagBracket => Style::fg(Color::BrightBlack),
            TokenClass::Doctype => Style::fg(Color::BrightMagenta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_suffixes() {
        assert_eq!(TokenClass::Keyword.name(), "keyword");
        assert_eq!(TokenClass::TagBracket.name(), "tag-bracket");
        assert_eq!(TokenClass::AttributeValue.name(), "attribute-value");
        assert_eq!(TokenClass::AtRule.name(), "at-rule");
    }

    #[test]
    fn test_sealed_classes() {
        assert!(TokenClass::Comment.seals_contents());
        assert!(TokenClass::String.seals_contents());
        assert!(TokenClass::Selector.seals_contents());
        assert!(!TokenClass::Keyword.seals_contents());
        assert!(!TokenClass::TagName.seals_contents());
    }

    #[test]
    fn test_default_styles_not_empty() {
        assert!(!TokenClass::Comment.default_style().is_default());
        assert!(!TokenClass::Keyword.default_style().is_default());
        assert!(!TokenClass::TagName.default_style().is_default());
    }
}
