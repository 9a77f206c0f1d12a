//! CSS language definition

use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::Css);

    lang.add(HighlightRule::new("comment", r"/\*[\s\S]*?\*/", TokenClass::Comment));

    lang.add(HighlightRule::new(
        "string",
        r#""(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'"#,
        TokenClass::String,
    ));

    lang.add(HighlightRule::new("at_rule", r"@[\w-]+", TokenClass::AtRule));

    // Selector: text at line start (or after a closing brace) up to `{`
    lang.add(HighlightRule::groups(
        "selector",
        r"(?:^|\})[ \t]*([^\s{};/@][^{};\n]*?)[ \t]*\{",
        &[(1, TokenClass::Selector)],
        true,
    ));

    // Property: a name followed by `:` and a value that ends the declaration,
    // which keeps `a:hover {` out
    lang.add(HighlightRule::groups(
        "property",
        r"([A-Za-z-]+)[ \t]*:[^;{}\n]*(?:;|\}|$)",
        &[(1, TokenClass::Property)],
        true,
    ));

    lang.add(HighlightRule::new("important", r"!important\b", TokenClass::Keyword));

    lang.add(HighlightRule::new("color", r"#[0-9a-fA-F]{3,8}\b", TokenClass::Color));

    lang.add(HighlightRule::groups(
        "number",
        r"\b(\d+(?:\.\d+)?)(?:(px|r?em|vh|vw|vmin|vmax|ch|ex|pt|pc|cm|mm|in|deg|rad|turn|ms|s|fr)\b|(%)|\b)",
        &[
            (1, TokenClass::Number),
            (2, TokenClass::Unit),
            (3, TokenClass::Unit),
        ],
        false,
    ));

    lang
}
