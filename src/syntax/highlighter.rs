//! Syntax highlighting entry point
//!
//! This module provides the `Highlighter` that owns the compiled rule
//! table of every language and turns raw text into highlighted markup.

use std::collections::HashMap;

use super::builtin;
use super::language::{Language, LanguageDefinition};
use super::markup::{ClassNames, Markup};

/// Compiled rule tables plus the class names used to render them
pub struct Highlighter {
    /// Loaded language definitions
    languages: HashMap<Language, LanguageDefinition>,
    /// Class names for rendered spans
    classes: ClassNames,
}

impl Highlighter {
    /// Create a highlighter with the built-in languages and `nvim-` classes
    pub fn new() -> Self {
        Self::with_classes(ClassNames::default())
    }

    /// Create a highlighter with the built-in languages
    pub fn with_classes(classes: ClassNames) -> Self {
        let mut highlighter = Self {
            languages: HashMap::new(),
            classes,
        };

        for lang in builtin::all_languages() {
            highlighter.add_language(lang);
        }

        highlighter
    }

    /// Add or replace a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        if let Some(e) = lang.error() {
            tracing::error!(language = %lang.language, "rule table failed to compile: {}", e);
        }
        self.languages.insert(lang.language, lang);
    }

    /// Get a language definition
    pub fn get_language(&self, language: Language) -> Option<&LanguageDefinition> {
        self.languages.get(&language)
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    /// Highlight into a structured document.
    ///
    /// Unknown languages and broken rule tables give the escaped,
    /// unhighlighted text.
    pub fn highlight_markup(&self, text: &str, language: Option<Language>) -> Markup {
        let Some(language) = language else {
            return Markup::plain(text);
        };
        let Some(lang) = self.languages.get(&language) else {
            return Markup::plain(text);
        };
        if let Some(e) = lang.error() {
            tracing::error!(%language, "highlighting skipped: {}", e);
            return Markup::plain(text);
        }
        lang.highlight(text)
    }

    /// Highlight `text` as the language called `language_name`
    pub fn highlight(&self, text: &str, language_name: &str) -> String {
        let language = Language::from_name(language_name);
        if language.is_none() {
            tracing::debug!(language = language_name, "unsupported language, text left plain");
        }
        self.highlight_markup(text, language).to_html(&self.classes)
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&'static str> {
        Language::ALL
            .into_iter()
            .filter(|language| self.languages.contains_key(language))
            .map(|language| language.name())
            .collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
