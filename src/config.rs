//! Configuration file support
//!
//! Loads settings from ~/.vimview.toml (or %USERPROFILE%\.vimview.toml on Windows)
//!
//! A missing file means defaults; every key is optional.
//!
//! Example:
//! ```text
//! # vimview configuration
//! class-prefix = "nvim"
//! offsets = "remapped"
//! line-numbers = true
//! default-language = "JavaScript"
//! default-mode = "Normal"
//! fields = ["CodeBefore", "CodeAfter"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::mode::EditMode;
use crate::overlay::OffsetStrategy;
use crate::syntax::Language;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Prefix of every generated class name
    pub class_prefix: String,
    /// When cursor and selection offsets are applied
    pub offsets: OffsetStrategy,
    /// Whether the rendered view has a line-number column
    pub line_numbers: bool,
    /// Language of a field until one is chosen
    pub default_language: Language,
    /// Mode of a field until one is chosen
    pub default_mode: EditMode,
    /// Names of the code fields the controller manages
    pub fields: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: "nvim".to_string(),
            offsets: OffsetStrategy::Remapped,
            line_numbers: true,
            default_language: Language::JavaScript,
            default_mode: EditMode::Normal,
            fields: vec!["CodeBefore".to_string(), "CodeAfter".to_string()],
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".vimview.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".vimview.toml"))
        }
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a file; a missing file gives defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
