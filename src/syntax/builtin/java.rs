//! Java language definition

use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Create Java language definition
pub fn java_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::Java);

    lang.add(HighlightRule::new(
        "comment",
        r"//[^\n]*|/\*[\s\S]*?\*/",
        TokenClass::Comment,
    ));

    // String and char literals
    lang.add(HighlightRule::new(
        "string",
        r#""(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])'"#,
        TokenClass::String,
    ));

    let keywords = r"\b(?:public|private|protected|static|final|abstract|class|interface|enum|record|extends|implements|package|import|if|else|for|while|do|switch|case|default|break|continue|return|new|this|super|try|catch|finally|throw|throws|instanceof|synchronized|volatile|transient|native|var)\b";
    lang.add(HighlightRule::new("keyword", keywords, TokenClass::Keyword));

    lang.add(HighlightRule::new(
        "boolean",
        r"\b(?:true|false|null)\b",
        TokenClass::Boolean,
    ));

    lang.add(HighlightRule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F_]+[lL]?|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?[fFdDlL]?)\b",
        TokenClass::Number,
    ));

    lang.add(HighlightRule::new(
        "annotation",
        r"@[A-Za-z_]\w*",
        TokenClass::Annotation,
    ));

    let types = r"\b(?:String|int|long|short|byte|char|float|double|boolean|void|Object|Integer|Long|Double|Boolean|List|ArrayList|Map|HashMap|Set|HashSet|Optional)\b";
    lang.add(HighlightRule::new("type", types, TokenClass::Type));

    lang.add(HighlightRule::new(
        "operator",
        r"==|!=|<=|>=|&&|\|\||\+\+|--|->|[-+*/%=<>!&|^~?]",
        TokenClass::Operator,
    ));

    lang
}
