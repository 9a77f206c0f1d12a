//! Editor view assembly
//!
//! Renders a field as a small editor: a header naming the language and
//! mode, then a line-number column beside the highlighted code lines.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::mode::EditMode;
use crate::overlay::{self, OffsetStrategy, SelectionOffsets};
use crate::preview;
use crate::syntax::{escape_html, AnnotatedLine, ClassNames, Highlighter, Language, Markup};

/// Highlights, overlays and lays out code fields
pub struct ViewRenderer {
    highlighter: Highlighter,
    offsets: OffsetStrategy,
    line_numbers: bool,
}

impl ViewRenderer {
    pub fn new(highlighter: Highlighter, offsets: OffsetStrategy) -> Self {
        Self {
            highlighter,
            offsets,
            line_numbers: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let highlighter = Highlighter::with_classes(ClassNames::new(&config.class_prefix));
        Self::new(highlighter, config.offsets).with_line_numbers(config.line_numbers)
    }

    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    fn classes(&self) -> &ClassNames {
        self.highlighter.classes()
    }

    /// Highlighted document with the cursor or selection already placed
    pub fn markup(
        &self,
        content: &str,
        language: Option<Language>,
        mode: EditMode,
        selection: SelectionOffsets,
    ) -> Markup {
        let mut markup = self.highlighter.highlight_markup(content, language);
        overlay::overlay(&mut markup, mode, selection);
        markup
    }

    /// One annotated line per source line
    pub fn annotate(
        &self,
        content: &str,
        language: Option<Language>,
        mode: EditMode,
        selection: SelectionOffsets,
    ) -> Vec<AnnotatedLine> {
        match self.offsets {
            OffsetStrategy::Remapped => self
                .markup(content, language, mode, selection)
                .lines(self.classes()),
            OffsetStrategy::Faithful => {
                let highlighted = self
                    .highlighter
                    .highlight_markup(content, language)
                    .to_html(self.classes());
                overlay::apply(&highlighted, mode, selection, self.classes())
                    .split('\n')
                    .map(AnnotatedLine::from_html)
                    .collect()
            }
        }
    }

    /// Render a field as an editor view
    pub fn render(
        &self,
        content: &str,
        language_name: &str,
        mode: EditMode,
        selection: SelectionOffsets,
    ) -> String {
        let language = Language::from_name(language_name);
        let lines = self.annotate(content, language, mode, selection);
        tracing::debug!(
            language = language_name,
            %mode,
            offsets = %self.offsets,
            lines = lines.len(),
            "rendering view"
        );

        let classes = self.classes();
        let label = escape_html(&language_label(language, language_name));

        let mut out = String::new();
        out.push_str(&format!("<div class=\"{}\">\n", classes.chrome("preview")));
        out.push_str(&format!(
            "<div class=\"{}\"><span class=\"{}\">{}</span><span class=\"{} {}-{}\">{}</span></div>\n",
            classes.chrome("header"),
            classes.chrome("language"),
            label,
            classes.chrome("mode"),
            classes.chrome("mode"),
            mode.name().to_lowercase(),
            mode.label()
        ));
        out.push_str(&format!("<div class=\"{}\">\n", classes.chrome("body")));

        if self.line_numbers {
            out.push_str(&format!("<div class=\"{}\">", classes.chrome("line-numbers")));
            for number in 1..=lines.len() {
                out.push_str(&format!(
                    "<div class=\"{}\">{}</div>",
                    classes.chrome("line-number"),
                    number
                ));
            }
            out.push_str("</div>\n");
        }

        out.push_str(&format!("<div class=\"{}\">", classes.chrome("code")));
        for line in &lines {
            let filler = if line.has_text { "" } else { "&nbsp;" };
            out.push_str(&format!(
                "<div class=\"{}\">{}{}</div>",
                classes.chrome("code-line"),
                line.html,
                filler
            ));
        }
        out.push_str("</div>\n</div>\n</div>");
        out
    }

    /// Write a field to a terminal with ANSI styles
    pub fn write_preview<W: Write>(
        &self,
        out: &mut W,
        content: &str,
        language_name: &str,
        mode: EditMode,
        selection: SelectionOffsets,
    ) -> Result<()> {
        let language = Language::from_name(language_name);
        let markup = self.markup(content, language, mode, selection);
        let header = format!("{} | {}", mode.label(), language_label(language, language_name));
        preview::write_preview(out, &markup, &header, self.line_numbers)
    }
}

fn language_label(language: Option<Language>, name: &str) -> String {
    match language {
        Some(language) => language.name().to_string(),
        None => name.trim().to_string(),
    }
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new(Highlighter::new(), OffsetStrategy::default())
    }
}
