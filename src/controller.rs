//! Per-field settings and conversion actions
//!
//! The host editor owns a `Controller`, turns UI events into `Action`s
//! and supplies field contents through a `FieldSource`.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::{Result, ViewError};
use crate::mode::EditMode;
use crate::overlay::SelectionOffsets;
use crate::syntax::Language;
use crate::view::ViewRenderer;

/// Language and mode chosen for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSettings {
    pub language: Language,
    pub mode: EditMode,
}

impl FieldSettings {
    /// Tooltip text for the field's controls
    pub fn indicator(&self, field: &str) -> String {
        format!("{}: {} - {} mode", field, self.language, self.mode)
    }
}

/// Contents of a field at the time of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub content: String,
    pub selection: Option<SelectionOffsets>,
}

impl FieldSnapshot {
    pub fn new(content: &str, selection: Option<SelectionOffsets>) -> Self {
        Self {
            content: content.to_string(),
            selection,
        }
    }

    /// Snapshot whose selection is the first occurrence of `selected`
    pub fn from_selected_text(content: &str, selected: &str) -> Self {
        Self::new(content, SelectionOffsets::locate(content, selected))
    }
}

/// Looks up the current contents of a named field
pub trait FieldSource {
    fn resolve_field(&self, name: &str) -> Option<FieldSnapshot>;
}

/// A user request coming from a field's controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetLanguage { field: String, language: Language },
    SetMode { field: String, mode: EditMode },
    Convert { field: String },
}

/// A finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub field: String,
    pub settings: FieldSettings,
    pub selection: SelectionOffsets,
    /// Rendered editor view
    pub html: String,
}

impl Conversion {
    /// Short confirmation message for the user
    pub fn summary(&self) -> String {
        format!(
            "{} converted!\nLanguage: {}\nMode: {}\nPosition: {}",
            self.field, self.settings.language, self.settings.mode, self.selection.start
        )
    }
}

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A field's settings changed
    Updated { field: String, indicator: String },
    /// A field was converted
    Rendered(Conversion),
}

/// Settings of every managed field plus the renderer that converts them
pub struct Controller {
    renderer: ViewRenderer,
    fields: HashMap<String, FieldSettings>,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self::with_renderer(ViewRenderer::from_config(config), config)
    }

    pub fn with_renderer(renderer: ViewRenderer, config: &Config) -> Self {
        let defaults = FieldSettings {
            language: config.default_language,
            mode: config.default_mode,
        };
        let fields = config
            .fields
            .iter()
            .map(|name| (name.clone(), defaults))
            .collect();
        Self { renderer, fields }
    }

    pub fn settings(&self, field: &str) -> Option<&FieldSettings> {
        self.fields.get(field)
    }

    /// Apply an action
    pub fn dispatch(&mut self, action: Action, source: &dyn FieldSource) -> Result<Outcome> {
        let outcome = self.apply(action, source);
        if let Err(e) = &outcome {
            tracing::warn!("{}", e);
        }
        outcome
    }

    fn apply(&mut self, action: Action, source: &dyn FieldSource) -> Result<Outcome> {
        match action {
            Action::SetLanguage { field, language } => {
                self.settings_mut(&field)?.language = language;
                Ok(self.updated(field))
            }
            Action::SetMode { field, mode } => {
                self.settings_mut(&field)?.mode = mode;
                Ok(self.updated(field))
            }
            Action::Convert { field } => self.convert(&field, source).map(Outcome::Rendered),
        }
    }

    fn settings_mut(&mut self, field: &str) -> Result<&mut FieldSettings> {
        self.fields
            .get_mut(field)
            .ok_or_else(|| ViewError::UnknownField(field.to_string()))
    }

    fn updated(&self, field: String) -> Outcome {
        let indicator = self
            .fields
            .get(&field)
            .map(|settings| settings.indicator(&field))
            .unwrap_or_default();
        tracing::debug!(%field, "{}", indicator);
        Outcome::Updated { field, indicator }
    }

    fn convert(&self, field: &str, source: &dyn FieldSource) -> Result<Conversion> {
        let settings = *self
            .settings(field)
            .ok_or_else(|| ViewError::UnknownField(field.to_string()))?;

        let snapshot = source
            .resolve_field(field)
            .filter(|snapshot| !snapshot.content.is_empty())
            .ok_or_else(|| ViewError::EmptyField(field.to_string()))?;

        let selection = snapshot
            .selection
            .filter(|selection| !selection.is_empty())
            .ok_or_else(|| ViewError::NoSelection(field.to_string()))?;

        tracing::debug!(
            %field,
            language = %settings.language,
            mode = %settings.mode,
            start = selection.start,
            end = selection.end,
            "converting field"
        );

        let html = self.renderer.render(
            &snapshot.content,
            settings.language.name(),
            settings.mode,
            selection,
        );

        Ok(Conversion {
            field: field.to_string(),
            settings,
            selection,
            html,
        })
    }
}
