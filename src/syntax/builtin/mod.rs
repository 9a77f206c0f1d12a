//! Built-in language rule tables
//!
//! Each table lists comments and strings first, then keywords, then
//! literals, then the finer categories. The order is a heuristic that
//! keeps keywords out of comments and strings; it is not a lexer.

mod css;
mod html;
mod java;
mod javascript;
mod python;
mod swift;

use super::language::{Language, LanguageDefinition};

/// Rule table for one language
pub fn language_definition(language: Language) -> LanguageDefinition {
    match language {
        Language::JavaScript => javascript::javascript_language(),
        Language::Python => python::python_language(),
        Language::Java => java::java_language(),
        Language::Swift => swift::swift_language(),
        Language::Html => html::html_language(),
        Language::Css => css::css_language(),
    }
}

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    Language::ALL.into_iter().map(language_definition).collect()
}
