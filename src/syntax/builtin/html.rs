//! HTML language definition
//!
//! HTML input is not escaped before the rules run, so the patterns
//! match literal angle brackets.

use crate::error::Result;
use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Bracket, tag name, attribute list, closing bracket
const TAG: &str = r#"(</?)([A-Za-z][\w:-]*)((?:\s+[^\s=<>/"']+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?>)"#;

/// Attribute name, `=`, value
const ATTRIBUTE: &str = r#"([^\s=<>/"']+)(?:\s*(=)\s*("[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#;

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::Html);

    lang.add(tag_anatomy());
    lang.add(HighlightRule::new("comment", r"<!--[\s\S]*?-->", TokenClass::Comment));
    lang.add(HighlightRule::new("doctype", r"(?i)<!doctype[^>]*>", TokenClass::Doctype));

    lang
}

/// One rule for a whole tag; its attribute list is scanned by a nested rule
fn tag_anatomy() -> Result<HighlightRule> {
    let attributes = HighlightRule::groups(
        "attribute",
        ATTRIBUTE,
        &[
            (1, TokenClass::AttributeName),
            (2, TokenClass::Equals),
            (3, TokenClass::AttributeValue),
        ],
        false,
    )?;
    let tag = HighlightRule::groups(
        "tag",
        TAG,
        &[
            (1, TokenClass::TagBracket),
            (2, TokenClass::TagName),
            (4, TokenClass::TagBracket),
        ],
        false,
    )?;
    Ok(tag.with_nested(3, attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::markup::ClassNames;

    fn render(text: &str) -> String {
        html_language().highlight(text).to_html(&ClassNames::default())
    }

    #[test]
    fn test_tag_with_attribute() {
        let html = render("<div class=\"x\">hi</div>");
        assert_eq!(
            html,
            "<span class=\"nvim-tag-bracket\"><</span>\
             <span class=\"nvim-tag-name\">div</span> \
             <span class=\"nvim-attribute-name\">class</span>\
             <span class=\"nvim-equals\">=</span>\
             <span class=\"nvim-attribute-value\">\"x\"</span>\
             <span class=\"nvim-tag-bracket\">></span>\
             hi\
             <span class=\"nvim-tag-bracket\"></</span>\
             <span class=\"nvim-tag-name\">div</span>\
             <span class=\"nvim-tag-bracket\">></span>"
        );
    }

    #[test]
    fn test_self_closing_and_bare_attribute() {
        let html = render("<input disabled type='text'/>");
        assert!(html.contains("<span class=\"nvim-attribute-name\">disabled</span>"));
        assert!(html.contains("<span class=\"nvim-attribute-value\">'text'</span>"));
        assert!(html.ends_with("<span class=\"nvim-tag-bracket\">/></span>"));
    }

    #[test]
    fn test_comment_and_doctype() {
        let html = render("<!DOCTYPE html>\n<!-- note -->");
        assert_eq!(
            html,
            "<span class=\"nvim-doctype\"><!DOCTYPE html></span>\n\
             <span class=\"nvim-comment\"><!-- note --></span>"
        );
    }
}
