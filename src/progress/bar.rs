use std::time::Duration;

use derive_more::Display;
use log::{debug, warn};

use super::{
    error::ProgressResult,
    render::{BarGlyphs, LineRenderer},
    state::ProgressState,
    template::Template,
    terminal::{StdoutTerminal, Terminal},
};

/// Lifecycle of a [`ProgressBar`]. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BarPhase {
    /// Constructed, nothing drawn yet and the template not parsed.
    Created,
    /// Drawn at least once; the cursor is hidden.
    Active,
    /// Line blanked and cursor shown again.
    Finished,
}

/// A progress line that redraws itself in place.
///
/// Log lines written through [`ProgressBar::write_line`] land above the bar;
/// the bar itself is redrawn on the next [`ProgressBar::set_position`].
///
/// ```no_run
/// use stakeholder::progress::ProgressBar;
///
/// # fn main() -> Result<(), stakeholder::progress::ProgressError> {
/// let mut pb = ProgressBar::new(10, "[{bar:20.cyan/blue}] {pos}/{len}");
/// for i in 0..10 {
///     pb.set_position(i)?;
///     if i == 5 {
///         pb.write_line("halfway")?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProgressBar<T: Terminal = StdoutTerminal> {
    source: String,
    template: Option<Template>,
    glyphs: BarGlyphs,
    state: ProgressState,
    phase: BarPhase,
    terminal: T,
}

impl ProgressBar<StdoutTerminal> {
    /// Bar on standard output.
    #[must_use]
    pub fn new(max_value: u64, template: impl Into<String>) -> Self {
        Self::with_terminal(max_value, template, StdoutTerminal::new())
    }
}

impl<T: Terminal> ProgressBar<T> {
    /// Bar drawing to `terminal`. The template is parsed on first render.
    pub fn with_terminal(max_value: u64, template: impl Into<String>, terminal: T) -> Self {
        let source = template.into();
        debug!("progress bar created: max={max_value} template={source:?}");

        Self {
            source,
            template: None,
            glyphs: BarGlyphs::default(),
            state: ProgressState::new(max_value),
            phase: BarPhase::Created,
            terminal,
        }
    }

    /// Replaces the filled/partial/empty glyphs. Strings shorter than three
    /// characters are ignored.
    #[must_use]
    pub fn with_progress_chars(mut self, chars: &str) -> Self {
        match BarGlyphs::from_chars(chars) {
            Some(glyphs) => self.glyphs = glyphs,
            None => warn!("ignoring progress chars {chars:?}: need 3 glyphs"),
        }
        self
    }

    /// Reports that item `pos` (zero-based) has started and redraws.
    ///
    /// The bar shows `pos + 1`, clamped to the maximum. Reaching the maximum
    /// finishes the bar. Ignored once finished.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidTemplateField` if the template does not parse, or
    /// with `Terminal` if drawing fails.
    pub fn set_position(&mut self, pos: u64) -> ProgressResult<()> {
        if self.phase == BarPhase::Finished {
            debug!("set_position({pos}) after finish ignored");
            return Ok(());
        }

        self.state.set_value(pos.saturating_add(1));
        self.draw()?;

        if self.state.is_complete() {
            self.finish()?;
        }

        Ok(())
    }

    /// Blanks the bar and prints `text` on its own row.
    pub fn write_line(&mut self, text: &str) -> ProgressResult<()> {
        self.clear_line()?;
        self.terminal.write_line(text)?;
        Ok(())
    }

    /// Blanks the bar and shows the cursor. Idempotent.
    pub fn finish(&mut self) -> ProgressResult<()> {
        if self.phase == BarPhase::Finished {
            return Ok(());
        }

        self.clear_line()?;
        self.terminal.set_cursor_visible(true)?;
        self.phase = BarPhase::Finished;
        debug!(
            "progress bar finished at {}/{}",
            self.state.value(),
            self.state.max_value()
        );

        Ok(())
    }

    /// Same as [`ProgressBar::finish`]; the line is always blanked.
    pub fn finish_and_clear(&mut self) -> ProgressResult<()> {
        self.finish()
    }

    #[must_use]
    pub fn phase(&self) -> BarPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == BarPhase::Finished
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.state.value()
    }

    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.state.max_value()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.elapsed()
    }

    #[must_use]
    pub fn eta(&self) -> Duration {
        self.state.eta()
    }

    /// Widest line drawn so far; this many columns are blanked on clear.
    #[must_use]
    pub fn max_rendered_width(&self) -> u16 {
        self.state.max_rendered_width()
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    fn draw(&mut self) -> ProgressResult<()> {
        if self.template.is_none() {
            let template = Template::parse(&self.source).inspect_err(|e| {
                warn!("progress template {:?} rejected: {e}", self.source);
            })?;
            self.template = Some(template);
        }
        let Some(template) = self.template.as_ref() else {
            return Ok(());
        };

        if self.phase == BarPhase::Created {
            self.terminal.set_cursor_visible(false)?;
            self.phase = BarPhase::Active;
        }

        LineRenderer::new(template.fields(), self.glyphs)
            .render(&mut self.terminal, &mut self.state)?;

        Ok(())
    }

    fn clear_line(&mut self) -> ProgressResult<()> {
        let width = usize::from(self.state.max_rendered_width());
        self.terminal.write(&" ".repeat(width))?;
        self.terminal.set_cursor_column(0)?;
        self.terminal.flush()?;
        Ok(())
    }
}

impl<T: Terminal> Drop for ProgressBar<T> {
    fn drop(&mut self) {
        if self.phase == BarPhase::Active {
            // Dropped mid-run (usually an error path): don't leave the cursor hidden.
            let _ = self.terminal.set_cursor_visible(true);
        }
    }
}
