//! Terminal preview of an annotated document
//!
//! Writes the same document the HTML view shows, using ANSI styles
//! instead of class names: one style per token class, reverse video for
//! the cursor and selection, and `|` for the insert cursor.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};

use crate::error::Result;
use crate::syntax::{Mark, Markup, Piece, Style};

/// Width of the line-number gutter: at least 3 digits plus a space
fn line_number_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(3) + 1
}

/// Terminal style for a span
fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Token(class) => class.default_style(),
        Mark::Cursor | Mark::Selection => Style::reverse(),
        Mark::InsertCursor | Mark::VisualCursor => Style::default(),
    }
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if let Some(color) = style.fg.to_terminal() {
        queue!(out, SetForegroundColor(color))?;
    }
    for attr in style.attributes() {
        queue!(out, SetAttribute(attr))?;
    }
    Ok(())
}

fn write_gutter<W: Write>(out: &mut W, number: usize, width: usize) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetAttribute(Attribute::Dim),
        Print(format!("{:>width$} ", number, width = width - 1)),
        SetAttribute(Attribute::NormalIntensity)
    )?;
    Ok(())
}

/// Write `markup` under a reverse-video `header` line
pub fn write_preview<W: Write>(
    out: &mut W,
    markup: &Markup,
    header: &str,
    line_numbers: bool,
) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(format!(" {} ", header)),
        SetAttribute(Attribute::Reset),
        Print("\n")
    )?;

    let width = line_number_width(markup.text().split('\n').count());
    let mut stack: Vec<Style> = Vec::new();
    let mut line = 1;

    let current = |stack: &[Style]| {
        stack
            .iter()
            .fold(Style::default(), |style, layer| style.merge(*layer))
    };

    if line_numbers {
        write_gutter(out, line, width)?;
    }

    for piece in markup.pieces() {
        match piece {
            Piece::Text(chunk) => {
                for (i, part) in chunk.split('\n').enumerate() {
                    if i > 0 {
                        queue!(out, SetAttribute(Attribute::Reset), Print("\n"))?;
                        line += 1;
                        if line_numbers {
                            write_gutter(out, line, width)?;
                        }
                    }
                    if !part.is_empty() {
                        apply_style(out, current(&stack))?;
                        queue!(out, Print(part))?;
                    }
                }
            }
            Piece::Open(mark) => stack.push(mark_style(*mark)),
            Piece::Close => {
                stack.pop();
            }
            Piece::Marker(Mark::InsertCursor) => {
                apply_style(out, current(&stack).merge(Style::default().with_bold()))?;
                queue!(out, Print('|'))?;
            }
            Piece::Marker(_) => {}
        }
    }

    queue!(out, SetAttribute(Attribute::Reset), Print("\n"))?;
    out.flush()?;
    Ok(())
}
