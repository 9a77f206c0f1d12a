//! Terminal styles for the preview renderer
//!
//! Token classes and overlay marks map to one of these styles;
//! `preview` turns them into crossterm commands.

use crossterm::style::{Attribute, Color as TermColor};

/// Terminal colors used by the token styles (ANSI palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightBlack,
    BrightRed,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Convert to the crossterm color, `None` for the terminal default
    pub fn to_terminal(self) -> Option<TermColor> {
        match self {
            Color::Default => None,
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::BrightBlack => Some(TermColor::DarkGrey),
            Color::BrightRed => Some(TermColor::Red),
            Color::BrightYellow => Some(TermColor::Yellow),
            Color::BrightBlue => Some(TermColor::Blue),
            Color::BrightMagenta => Some(TermColor::Magenta),
            Color::BrightCyan => Some(TermColor::Cyan),
            Color::BrightWhite => Some(TermColor::White),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a reverse video style (for cursor and selection)
    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Layer `other` on top of this style.
    ///
    /// A non-default color replaces ours; attributes accumulate.
    pub fn merge(self, other: Style) -> Style {
        Style {
            fg: if other.fg == Color::Default { self.fg } else { other.fg },
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            reverse: self.reverse || other.reverse,
        }
    }

    /// Crossterm attributes to set for this style
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        if self.bold {
            attrs.push(Attribute::Bold);
        }
        if self.italic {
            attrs.push(Attribute::Italic);
        }
        if self.reverse {
            attrs.push(Attribute::Reverse);
        }
        attrs
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(style.attributes().is_empty());
    }

    #[test]
    fn test_merge_keeps_color_under_reverse() {
        let style = Style::fg(Color::Red).with_bold().merge(Style::reverse());
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.reverse);
        assert_eq!(style.attributes(), vec![Attribute::Bold, Attribute::Reverse]);
    }

    #[test]
    fn test_merge_replaces_color() {
        let style = Style::fg(Color::Red).merge(Style::fg(Color::Blue));
        assert_eq!(style.fg, Color::Blue);
    }

    #[test]
    fn test_terminal_colors() {
        assert_eq!(Color::Default.to_terminal(), None);
        assert_eq!(Color::BrightBlack.to_terminal(), Some(TermColor::DarkGrey));
    }
}
