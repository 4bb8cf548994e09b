use std::io;

use derive_more::{Display, Error};

/// Failures surfaced by the progress renderer.
///
/// Malformed widths and unknown colors never produce an error; they fall back
/// to defaults while parsing.
#[derive(Debug, Display, Error)]
pub enum ProgressError {
    /// A `{name}` placeholder that is not one of the known field kinds.
    #[display("invalid template field `{_0}`")]
    InvalidTemplateField(#[error(not(source))] String),

    /// Writing to the terminal failed.
    #[display("terminal write failed: {_0}")]
    Terminal(io::Error),
}

impl From<io::Error> for ProgressError {
    fn from(value: io::Error) -> Self {
        Self::Terminal(value)
    }
}

pub type ProgressResult<T> = Result<T, ProgressError>;
