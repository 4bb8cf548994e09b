use std::io;

use crossterm::style::Color;

use super::{
    state::{ProgressState, format_hms},
    template::{Field, FieldColor},
    terminal::{ColorScope, Terminal},
};

/// Default palette: filled, (unused), empty.
pub const DEFAULT_PROGRESS_CHARS: &str = "▰▱▱";

/// Glyphs used to draw `{bar}`. Only the first and third are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGlyphs {
    pub filled: char,
    pub partial: char,
    pub empty: char,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self {
            filled: '▰',
            partial: '▱',
            empty: '▱',
        }
    }
}

impl BarGlyphs {
    /// Takes the first three characters of `chars`; `None` if there are fewer.
    #[must_use]
    pub fn from_chars(chars: &str) -> Option<Self> {
        let mut it = chars.chars();
        Some(Self {
            filled: it.next()?,
            partial: it.next()?,
            empty: it.next()?,
        })
    }
}

/// Cells of a bar `width` wide: `(filled, remaining)`.
///
/// `filled = value * width / max`, rounded down.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn bar_cells(value: u64, max_value: u64, width: u16) -> (u16, u16) {
    let max_value = max_value.max(1);
    let value = value.min(max_value);
    let filled = u128::from(value) * u128::from(width) / u128::from(max_value);
    let filled = u16::try_from(filled).unwrap_or(width);
    (filled, width.saturating_sub(filled))
}

/// Draws one progress line in place.
pub struct LineRenderer<'a> {
    fields: &'a [Field],
    glyphs: BarGlyphs,
}

impl<'a> LineRenderer<'a> {
    #[must_use]
    pub fn new(fields: &'a [Field], glyphs: BarGlyphs) -> Self {
        Self { fields, glyphs }
    }

    /// Writes every field, records the line width, then moves the cursor back
    /// to the column it started from. The row never changes and the ambient
    /// foreground color is restored after each colored field.
    pub fn render<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
        state: &mut ProgressState,
    ) -> io::Result<()> {
        let origin = terminal.cursor_column();
        let mut spun = false;

        for field in self.fields {
            match field {
                Field::Text(text) => terminal.write(text)?,
                Field::Spinner { color } => {
                    let mut scope = ColorScope::enter(terminal, Color::from(*color))?;
                    scope.write(state.spinner_glyph().encode_utf8(&mut [0; 4]))?;
                    spun = true;
                }
                Field::Elapsed => terminal.write(&format_hms(state.elapsed()))?,
                Field::Eta => terminal.write(&format_hms(state.eta()))?,
                Field::Pos => terminal.write(&state.value().to_string())?,
                Field::Len => terminal.write(&state.max_value().to_string())?,
                Field::Bar {
                    width,
                    filled,
                    empty,
                } => self.draw_bar(terminal, state, width.unwrap_or(0), *filled, *empty)?,
            }
        }

        // One step per line, however many spinners the template holds.
        if spun {
            state.advance_spinner();
        }

        state.record_width(terminal.cursor_column());
        terminal.set_cursor_column(origin)?;
        terminal.flush()
    }

    fn draw_bar<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
        state: &ProgressState,
        width: u16,
        filled_color: FieldColor,
        empty_color: FieldColor,
    ) -> io::Result<()> {
        let (filled, remaining) = bar_cells(state.value(), state.max_value(), width);

        {
            let mut scope = ColorScope::enter(terminal, Color::from(filled_color))?;
            scope.write(&repeat(self.glyphs.filled, filled))?;
        }

        if remaining > 0 {
            let mut scope = ColorScope::enter(terminal, Color::from(empty_color))?;
            scope.write(&repeat(self.glyphs.empty, remaining))?;
        }

        Ok(())
    }
}

fn repeat(glyph: char, count: u16) -> String {
    std::iter::repeat_n(glyph, usize::from(count)).collect()
}
