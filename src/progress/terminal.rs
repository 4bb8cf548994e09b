//! Terminal capabilities the progress renderer depends on.
//!
//! [`StdoutTerminal`] drives a real terminal through crossterm.
//! [`MemoryTerminal`] keeps a character grid in memory, for headless output
//! and tests.

use std::{
    io::{self, Stdout, Write},
    ops::{Deref, DerefMut},
};

use crossterm::{
    cursor::{Hide, MoveTo, MoveToColumn, Show},
    execute, queue,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

/// Cursor, color and text operations on the current terminal row.
pub trait Terminal {
    /// Column of the cursor on the current row.
    fn cursor_column(&self) -> u16;
    fn set_cursor_column(&mut self, column: u16) -> io::Result<()>;

    /// Foreground color currently in effect.
    fn foreground(&self) -> Color;
    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Writes text without moving to a new row.
    fn write(&mut self, text: &str) -> io::Result<()>;
    /// Writes text followed by a newline; the cursor lands at column 0.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn cursor_column(&self) -> u16 {
        (**self).cursor_column()
    }

    fn set_cursor_column(&mut self, column: u16) -> io::Result<()> {
        (**self).set_cursor_column(column)
    }

    fn foreground(&self) -> Color {
        (**self).foreground()
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        (**self).set_foreground(color)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Foreground color held for the lifetime of the scope.
///
/// The previous color is restored on drop, including when the scope is left
/// through `?`.
pub struct ColorScope<'t, T: Terminal + ?Sized> {
    terminal: &'t mut T,
    previous: Color,
}

impl<'t, T: Terminal + ?Sized> ColorScope<'t, T> {
    pub fn enter(terminal: &'t mut T, color: Color) -> io::Result<Self> {
        let previous = terminal.foreground();
        terminal.set_foreground(color)?;
        Ok(Self { terminal, previous })
    }
}

impl<T: Terminal + ?Sized> Deref for ColorScope<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for ColorScope<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for ColorScope<'_, T> {
    fn drop(&mut self) {
        // Best effort: a failing terminal has nothing left to restore.
        let _ = self.terminal.set_foreground(self.previous);
    }
}

////////////////////////////////////////////////////////////////////////////////
// stdout
////////////////////////////////////////////////////////////////////////////////

/// Standard output driven through crossterm.
///
/// The cursor column is tracked locally instead of queried, so a bar is
/// expected to start on a fresh row.
pub struct StdoutTerminal {
    out: Stdout,
    column: u16,
    foreground: Color,
}

/// Column the cursor reaches after writing `text` from `column`, counting
/// display width. A newline restarts the count at 0.
fn column_after(column: u16, text: &str) -> u16 {
    let (tail, wrapped) = match text.rsplit_once('\n') {
        Some((_, tail)) => (tail, true),
        None => (text, false),
    };
    let width = u16::try_from(tail.width()).unwrap_or(u16::MAX);
    if wrapped {
        width
    } else {
        column.saturating_add(width)
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            column: 0,
            foreground: Color::Reset,
        }
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.column = 0;
        Ok(())
    }
}

impl Terminal for StdoutTerminal {
    fn cursor_column(&self) -> u16 {
        self.column
    }

    fn set_cursor_column(&mut self, column: u16) -> io::Result<()> {
        queue!(self.out, MoveToColumn(column))?;
        self.column = column;
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        if color == Color::Reset {
            queue!(self.out, ResetColor)?;
        } else {
            queue!(self.out, SetForegroundColor(color))?;
        }
        self.foreground = color;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, Show)
        } else {
            execute!(self.out, Hide)
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.column = column_after(self.column, text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.column = 0;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

////////////////////////////////////////////////////////////////////////////////
// in-memory
////////////////////////////////////////////////////////////////////////////////

/// One character position of a [`MemoryTerminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// Character grid that records what a real terminal would show.
///
/// Every character occupies one column. Rows only grow downwards, so the
/// cursor is always on the last row.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    rows: Vec<Vec<Cell>>,
    column: u16,
    foreground: Color,
    cursor_visible: bool,
}

impl Default for MemoryTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new()],
            column: 0,
            foreground: Color::Reset,
            cursor_visible: true,
        }
    }

    /// Index of the row holding the cursor.
    #[must_use]
    pub fn row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    #[must_use]
    pub fn cells(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }

    /// Text of `row`, trailing blanks included.
    #[must_use]
    pub fn line(&self, row: usize) -> String {
        self.cells(row).iter().map(|c| c.glyph).collect()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows.len()).map(|row| self.line(row)).collect()
    }

    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn newline(&mut self) {
        self.rows.push(Vec::new());
        self.column = 0;
    }

    fn put(&mut self, glyph: char) {
        let cell = Cell {
            glyph,
            color: self.foreground,
        };
        let column = usize::from(self.column);

        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let Some(row) = self.rows.last_mut() else {
            return;
        };

        if row.len() < column {
            row.resize(
                column,
                Cell {
                    glyph: ' ',
                    color: Color::Reset,
                },
            );
        }
        match row.get_mut(column) {
            Some(existing) => *existing = cell,
            None => row.push(cell),
        }

        self.column = self.column.saturating_add(1);
    }
}

impl Terminal for MemoryTerminal {
    fn cursor_column(&self) -> u16 {
        self.column
    }

    fn set_cursor_column(&mut self, column: u16) -> io::Result<()> {
        self.column = column;
        Ok(())
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.foreground = color;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        for c in text.chars() {
            if c == '\n' {
                self.newline();
            } else {
                self.put(c);
            }
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.newline();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_after_counts_display_width() {
        assert_eq!(column_after(0, "abc"), 3);
        assert_eq!(column_after(4, "abc"), 7);
        // wide glyphs take two columns, braille takes one
        assert_eq!(column_after(0, "日本"), 4);
        assert_eq!(column_after(0, "⠁ ▰▱"), 4);
        assert_eq!(column_after(2, ""), 2);
    }

    #[test]
    fn test_column_after_newline_restarts() {
        assert_eq!(column_after(30, "done\n"), 0);
        assert_eq!(column_after(30, "one\ntwo"), 3);
        assert_eq!(column_after(30, "a\nb\n日"), 2);
    }

    #[test]
    fn test_column_after_saturates() {
        assert_eq!(column_after(u16::MAX - 1, "abc"), u16::MAX);
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(column_after(0, &long), u16::MAX);
    }

    #[test]
    fn test_memory_terminal_write_and_overwrite() {
        let mut term = MemoryTerminal::new();
        term.write("hello").unwrap();
        assert_eq!(term.cursor_column(), 5);

        term.set_cursor_column(0).unwrap();
        term.write("J").unwrap();
        assert_eq!(term.line(0), "Jello");
        assert_eq!(term.cursor_column(), 1);
    }

    #[test]
    fn test_memory_terminal_write_line_moves_down() {
        let mut term = MemoryTerminal::new();
        term.write_line("one").unwrap();
        term.write("two").unwrap();
        assert_eq!(term.row(), 1);
        assert_eq!(term.lines(), vec!["one".to_string(), "two".to_string()]);
        assert_eq!(term.cursor_column(), 3);
    }

    #[test]
    fn test_memory_terminal_pads_gap_after_column_jump() {
        let mut term = MemoryTerminal::new();
        term.set_cursor_column(3).unwrap();
        term.write("x").unwrap();
        assert_eq!(term.line(0), "   x");
    }

    #[test]
    fn test_memory_terminal_records_colors() {
        let mut term = MemoryTerminal::new();
        term.set_foreground(Color::Green).unwrap();
        term.write("g").unwrap();
        term.set_foreground(Color::Reset).unwrap();
        term.write("r").unwrap();

        let cells = term.cells(0);
        assert_eq!(cells[0].color, Color::Green);
        assert_eq!(cells[1].color, Color::Reset);
    }

    #[test]
    fn test_color_scope_restores_on_drop() {
        let mut term = MemoryTerminal::new();
        term.set_foreground(Color::Magenta).unwrap();
        {
            let mut scope = ColorScope::enter(&mut term, Color::Cyan).unwrap();
            assert_eq!(scope.foreground(), Color::Cyan);
            scope.write("c").unwrap();
        }
        assert_eq!(term.foreground(), Color::Magenta);
        assert_eq!(term.cells(0)[0].color, Color::Cyan);
    }

    #[test]
    fn test_color_scope_restores_on_early_return() {
        fn failing(term: &mut MemoryTerminal) -> io::Result<()> {
            let _scope = ColorScope::enter(term, Color::Yellow)?;
            Err(io::Error::other("boom"))
        }

        let mut term = MemoryTerminal::new();
        assert!(failing(&mut term).is_err());
        assert_eq!(term.foreground(), Color::Reset);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut term = MemoryTerminal::new();
        {
            let mut forwarded: &mut dyn Terminal = &mut term;
            Terminal::write(&mut forwarded, "via ref").unwrap();
        }
        assert_eq!(term.line(0), "via ref");
    }
}
