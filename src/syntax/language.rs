//! Languages and their highlight rule tables

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::markup::Markup;
use super::rules::HighlightRule;
use crate::error::{Result, ViewError};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Swift,
    Html,
    Css,
}

impl Language {
    /// All supported languages, in menu order
    pub const ALL: [Language; 6] = [
        Language::Html,
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Swift,
        Language::Css,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Swift => "Swift",
            Language::Html => "HTML",
            Language::Css => "CSS",
        }
    }

    /// Look up a language by display name or common alias, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "javascript" | "js" => Some(Language::JavaScript),
            "python" | "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "swift" => Some(Language::Swift),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            _ => None,
        }
    }

    /// Language segment of token class names; HTML classes carry none
    pub fn class_scope(&self) -> Option<&'static str> {
        match self {
            Language::JavaScript => Some("js"),
            Language::Python => Some("py"),
            Language::Java => Some("java"),
            Language::Swift => Some("swift"),
            Language::Html => None,
            Language::Css => Some("css"),
        }
    }

    /// HTML keeps literal angle brackets so the tag rules can see them
    pub fn escapes_input(&self) -> bool {
        !matches!(self, Language::Html)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ViewError::UnknownLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = ViewError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Ordered rule table for one language
pub struct LanguageDefinition {
    pub language: Language,
    /// Rules in application order
    rules: Vec<HighlightRule>,
    /// Rules that failed to compile
    errors: Vec<ViewError>,
}

impl LanguageDefinition {
    /// Create an empty table
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rules: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Append a rule, recording it if it failed to compile
    pub fn add(&mut self, rule: Result<HighlightRule>) {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(e) => self.errors.push(e),
        }
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// First compile failure, if any rule in the table is broken
    pub fn error(&self) -> Option<&ViewError> {
        self.errors.first()
    }

    /// Run every rule over `text`, in order
    pub fn highlight(&self, text: &str) -> Markup {
        let mut markup = Markup::new(
            text,
            self.language.escapes_input(),
            self.language.class_scope(),
        );
        for rule in &self.rules {
            markup.apply_rule(rule);
        }
        markup
    }
}
