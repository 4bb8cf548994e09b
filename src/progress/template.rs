//! Template mini-language for progress lines.
//!
//! A template mixes literal text with placeholders:
//!
//! ```text
//! {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})
//! ```
//!
//! Placeholders have the shape `{name}`, `{name:.color}` or
//! `{name:width.color1/color2}`. Only `spinner` and `bar` use colors, and only
//! `bar` uses a width.

use std::{mem, num::IntErrorKind, str::FromStr};

use crossterm::style::Color;
use derive_more::Display;
use log::{debug, warn};

use super::error::{ProgressError, ProgressResult};

/// Colors a template may request. Anything unrecognized is `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum FieldColor {
    Green,
    Yellow,
    Blue,
    Cyan,
    #[default]
    Neutral,
}

impl FieldColor {
    /// Maps a color token to a palette entry. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "cyan" => Self::Cyan,
            _ => Self::Neutral,
        }
    }
}

impl From<FieldColor> for Color {
    fn from(value: FieldColor) -> Self {
        match value {
            FieldColor::Green => Color::Green,
            FieldColor::Yellow => Color::Yellow,
            FieldColor::Blue => Color::Blue,
            FieldColor::Cyan => Color::Cyan,
            FieldColor::Neutral => Color::White,
        }
    }
}

/// Discriminant of a [`Field`], mostly useful for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldKind {
    Text,
    Spinner,
    Elapsed,
    Bar,
    Pos,
    Len,
    Eta,
}

/// One typed unit of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Literal text between placeholders.
    Text(String),
    /// `{spinner}`: one animation glyph per render.
    Spinner { color: FieldColor },
    /// `{elapsed_precise}`: time since the bar was created.
    Elapsed,
    /// `{bar:width.filled/empty}`. A missing or non-numeric width draws
    /// nothing; widths above `u16::MAX` saturate.
    Bar {
        width: Option<u16>,
        filled: FieldColor,
        empty: FieldColor,
    },
    /// `{pos}`: current value.
    Pos,
    /// `{len}`: maximum value.
    Len,
    /// `{eta}`: projected remaining time.
    Eta,
}

impl Field {
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Spinner { .. } => FieldKind::Spinner,
            Self::Elapsed => FieldKind::Elapsed,
            Self::Bar { .. } => FieldKind::Bar,
            Self::Pos => FieldKind::Pos,
            Self::Len => FieldKind::Len,
            Self::Eta => FieldKind::Eta,
        }
    }
}

/// Which part of a placeholder the scanner is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Name,
    Width,
    Primary,
    Secondary,
}

/// Raw text of one `{...}` placeholder, split into its segments.
#[derive(Default)]
struct Placeholder {
    name: String,
    width: String,
    primary: String,
    secondary: String,
}

impl Placeholder {
    fn push(&mut self, segment: Segment, c: char) {
        match segment {
            Segment::Name => self.name.push(c),
            Segment::Width => self.width.push(c),
            Segment::Primary => self.primary.push(c),
            Segment::Secondary => self.secondary.push(c),
        }
    }

    fn into_field(self) -> ProgressResult<Field> {
        // Non-numeric widths degrade to "no width" rather than failing.
        let width = match self.width.parse::<u16>() {
            Ok(width) => Some(width),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u16::MAX),
            Err(_) => None,
        };
        let primary = FieldColor::from_token(&self.primary);
        let secondary = FieldColor::from_token(&self.secondary);

        match self.name.as_str() {
            "spinner" => Ok(Field::Spinner { color: primary }),
            "elapsed_precise" => Ok(Field::Elapsed),
            "bar" => Ok(Field::Bar {
                width,
                filled: primary,
                empty: secondary,
            }),
            "pos" => Ok(Field::Pos),
            "len" => Ok(Field::Len),
            "eta" => Ok(Field::Eta),
            _ => Err(ProgressError::InvalidTemplateField(self.name)),
        }
    }
}

/// Ordered field sequence compiled from a template string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    fields: Vec<Field>,
}

impl Template {
    /// Compiles `template` into fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::InvalidTemplateField`] for the first placeholder
    /// whose name is not a known field kind.
    pub fn parse(template: &str) -> ProgressResult<Self> {
        let mut fields = Vec::new();
        let mut text = String::new();
        let mut open: Option<(Placeholder, Segment)> = None;

        for c in template.chars() {
            if c == '{' {
                if !text.is_empty() {
                    fields.push(Field::Text(mem::take(&mut text)));
                }
                // A second `{` before `}` restarts the placeholder.
                open = Some((Placeholder::default(), Segment::Name));
                continue;
            }

            if c == '}'
                && let Some((placeholder, _)) = open.take()
            {
                fields.push(placeholder.into_field()?);
                continue;
            }

            let Some((placeholder, segment)) = open.as_mut() else {
                text.push(c);
                continue;
            };

            match c {
                ':' => *segment = Segment::Width,
                '.' => *segment = Segment::Primary,
                '/' => *segment = Segment::Secondary,
                _ => placeholder.push(*segment, c),
            }
        }

        if let Some((placeholder, _)) = open {
            warn!(
                "dropping unterminated template field `{{{}`",
                placeholder.name
            );
        }

        if !text.is_empty() {
            fields.push(Field::Text(text));
        }

        debug!("parsed template into {} fields", fields.len());

        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromStr for Template {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
