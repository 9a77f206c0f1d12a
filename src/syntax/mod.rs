//! Syntax highlighting module
//!
//! This module provides the highlighting pipeline:
//! - Per-language ordered regex rule tables
//! - The structured `Markup` document the rules and overlays edit
//! - Token styles for the terminal preview

mod builtin;
mod highlighter;
mod language;
mod markup;
mod rules;
mod style;
mod tokens;

pub use highlighter::Highlighter;
pub use language::{Language, LanguageDefinition};
pub use markup::{escape_html, AnnotatedLine, ClassNames, Mark, Markup, Piece};
pub use rules::{HighlightRule, Wrap};
pub use style::{Color, Style};
pub use tokens::TokenClass;
