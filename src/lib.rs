//! Vim-style code previews for flashcard fields
//!
//! Highlights source text with per-language regex rules, overlays a
//! Normal/Insert cursor or a Visual selection, and lays the result out as
//! an editor view in HTML or on a terminal.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod mode;
pub mod overlay;
pub mod preview;
pub mod syntax;
pub mod view;

pub use config::Config;
pub use controller::{Action, Controller, Conversion, FieldSettings, FieldSnapshot, FieldSource, Outcome};
pub use error::{Result, ViewError};
pub use mode::EditMode;
pub use overlay::{apply_cursor, apply_selection, OffsetStrategy, SelectionOffsets};
pub use syntax::{Highlighter, Language};
pub use view::ViewRenderer;
