//! JavaScript language definition

use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::JavaScript);

    // Line and block comments in one rule so the leftmost opener wins
    lang.add(HighlightRule::new(
        "comment",
        r"//[^\n]*|/\*[\s\S]*?\*/",
        TokenClass::Comment,
    ));

    // Double, single and template strings
    lang.add(HighlightRule::new(
        "string",
        r#""(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'|`(?:\\.|[^`\\])*`"#,
        TokenClass::String,
    ));

    let keywords = r"\b(?:function|var|let|const|if|else|for|while|do|return|class|extends|import|export|from|default|async|await|try|catch|finally|throw|new|this|super|switch|case|break|continue|typeof|instanceof|in|of|yield|delete|void)\b";
    lang.add(HighlightRule::new("keyword", keywords, TokenClass::Keyword));

    lang.add(HighlightRule::new(
        "boolean",
        r"\b(?:true|false|null|undefined|NaN|Infinity)\b",
        TokenClass::Boolean,
    ));

    lang.add(HighlightRule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
        TokenClass::Number,
    ));

    let builtins = r"\b(?:console|document|window|Math|JSON|Promise|Array|Object|String|Number|Boolean|Map|Set|Symbol|Error|parseInt|parseFloat|setTimeout|setInterval)\b";
    lang.add(HighlightRule::new("builtin", builtins, TokenClass::Builtin));

    lang.add(HighlightRule::new(
        "operator",
        r"=>|===|!==|==|!=|<=|>=|&&|\|\||\?\?|\+\+|--|[-+*/%=<>!&|^~?]",
        TokenClass::Operator,
    ));

    lang
}
