//! Python language definition

use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::Python);

    lang.add(HighlightRule::new("comment", r"#[^\n]*", TokenClass::Comment));

    // Triple-quoted strings (docstrings) before single-line ones, with an
    // optional r/b/u/f prefix
    lang.add(HighlightRule::new(
        "string",
        r#"\b[rRbBuUfF]{1,2}(?:"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*')|"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'"#,
        TokenClass::String,
    ));

    let keywords = r"\b(?:def|class|if|elif|else|for|while|return|import|from|as|try|except|finally|with|lambda|yield|pass|break|continue|raise|global|nonlocal|assert|del|in|is|not|and|or|async|await)\b";
    lang.add(HighlightRule::new("keyword", keywords, TokenClass::Keyword));

    lang.add(HighlightRule::new(
        "boolean",
        r"\b(?:True|False|None)\b",
        TokenClass::Boolean,
    ));

    lang.add(HighlightRule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?j?)\b",
        TokenClass::Number,
    ));

    let builtins = r"\b(?:print|len|range|str|int|float|bool|list|dict|set|tuple|open|isinstance|enumerate|zip|map|filter|sorted|sum|min|max|abs|super|type|self|cls)\b";
    lang.add(HighlightRule::new("builtin", builtins, TokenClass::Builtin));

    lang.add(HighlightRule::new(
        "decorator",
        r"@[A-Za-z_][\w.]*",
        TokenClass::Decorator,
    ));

    lang.add(HighlightRule::new(
        "operator",
        r"\*\*|//|==|!=|<=|>=|->|:=|[-+*/%=<>&|^~]",
        TokenClass::Operator,
    ));

    lang
}
