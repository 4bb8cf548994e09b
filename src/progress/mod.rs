//! Template-driven progress bar that redraws itself on one terminal row.
//!
//! - `template` compiles `{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}`
//!   style strings into typed fields
//! - `state` holds value, maximum, clock and spinner frame
//! - `render` draws one line from fields and state
//! - `bar` is the public controller tying them together

mod bar;
mod error;
mod render;
mod state;
mod template;
mod terminal;

pub use bar::{BarPhase, ProgressBar};
pub use error::{ProgressError, ProgressResult};
pub use render::{BarGlyphs, DEFAULT_PROGRESS_CHARS, LineRenderer, bar_cells};
pub use state::{ProgressState, SPINNER_FRAMES, format_hms};
pub use template::{Field, FieldColor, FieldKind, Template};
pub use terminal::{Cell, ColorScope, MemoryTerminal, StdoutTerminal, Terminal};
