//! Editing modes shown by the simulated editor

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ViewError};

/// Vim editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EditMode {
    /// Block cursor on a character
    #[default]
    Normal,
    /// Bar cursor between characters
    Insert,
    /// Highlighted selection
    Visual,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Normal, EditMode::Insert, EditMode::Visual];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            EditMode::Normal => "Normal",
            EditMode::Insert => "Insert",
            EditMode::Visual => "Visual",
        }
    }

    /// Status-line label
    pub fn label(&self) -> &'static str {
        match self {
            EditMode::Normal => "NORMAL",
            EditMode::Insert => "INSERT",
            EditMode::Visual => "VISUAL",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "n" => Ok(EditMode::Normal),
            "insert" | "i" => Ok(EditMode::Insert),
            "visual" | "v" => Ok(EditMode::Visual),
            _ => Err(ViewError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for EditMode {
    type Error = ViewError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("Normal".parse::<EditMode>().unwrap(), EditMode::Normal);
        assert_eq!("INSERT".parse::<EditMode>().unwrap(), EditMode::Insert);
        assert_eq!("v".parse::<EditMode>().unwrap(), EditMode::Visual);
        assert!(matches!(
            "replace".parse::<EditMode>(),
            Err(ViewError::UnknownMode(ref name)) if name == "replace"
        ));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = EditMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["NORMAL", "INSERT", "VISUAL"]);
        assert_eq!(EditMode::default(), EditMode::Normal);
        assert_eq!(EditMode::Visual.to_string(), "Visual");
    }
}
