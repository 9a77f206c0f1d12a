//! Swift language definition

use crate::syntax::language::{Language, LanguageDefinition};
use crate::syntax::rules::HighlightRule;
use crate::syntax::tokens::TokenClass;

/// Create Swift language definition
pub fn swift_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(Language::Swift);

    lang.add(HighlightRule::new(
        "comment",
        r"//[^\n]*|/\*[\s\S]*?\*/",
        TokenClass::Comment,
    ));

    // Multi-line string literals before single-line ones
    lang.add(HighlightRule::new(
        "string",
        r#""""[\s\S]*?"""|"(?:\\.|[^"\\\n])*""#,
        TokenClass::String,
    ));

    let keywords = r"\b(?:func|var|let|if|else|guard|for|in|while|repeat|return|class|struct|enum|protocol|extension|import|switch|case|default|break|continue|init|deinit|self|Self|static|private|fileprivate|public|internal|open|mutating|throws|throw|try|catch|do|defer|where|typealias|inout|async|await)\b";
    lang.add(HighlightRule::new("keyword", keywords, TokenClass::Keyword));

    lang.add(HighlightRule::new(
        "boolean",
        r"\b(?:true|false|nil)\b",
        TokenClass::Boolean,
    ));

    lang.add(HighlightRule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b",
        TokenClass::Number,
    ));

    lang.add(HighlightRule::new(
        "attribute",
        r"@[A-Za-z_]\w*",
        TokenClass::Annotation,
    ));

    let types = r"\b(?:String|Int|Double|Float|Bool|Character|Array|Dictionary|Set|Optional|Any|AnyObject|Void)\b";
    lang.add(HighlightRule::new("type", types, TokenClass::Type));

    lang.add(HighlightRule::new(
        "operator",
        r"\.\.\.|\.\.<|==|!=|<=|>=|&&|\|\||\?\?|->|[-+*/%=<>!&|^~?]",
        TokenClass::Operator,
    ));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::markup::ClassNames;

    fn render(text: &str) -> String {
        swift_language().highlight(text).to_html(&ClassNames::default())
    }

    #[test]
    fn test_function_declaration() {
        let html = render("func greet(name: String) -> Bool { return nil }");
        assert!(html.starts_with("<span class=\"nvim-swift-keyword\">func</span>"));
        assert!(html.contains("<span class=\"nvim-swift-type\">String</span>"));
        assert!(html.contains("<span class=\"nvim-swift-type\">Bool</span>"));
        assert!(html.contains("<span class=\"nvim-swift-operator\">-&gt;</span>"));
        assert!(html.contains("<span class=\"nvim-swift-boolean\">nil</span>"));
    }

    #[test]
    fn test_attribute_and_range() {
        let html = render("@objc for i in 0..<3 {}");
        assert!(html.starts_with("<span class=\"nvim-swift-annotation\">@objc</span>"));
        assert!(html.contains("<span class=\"nvim-swift-operator\">..&lt;</span>"));
        assert!(html.contains("<span class=\"nvim-swift-number\">3</span>"));
    }
}
