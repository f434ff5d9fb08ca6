use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric fields are capped at six digits to avoid overflow from
/// free-form input.
pub const MAX_NUMERIC_DIGITS: usize = 6;

/// Raw text of the three required input fields, as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct ParamsInput {
    /// Free-form comment describing the measurement.
    pub comment: String,
    /// Recording duration in seconds, unparsed.
    pub duration: String,
    /// Start offset in seconds, unparsed.
    pub offset: String,
}

/// The input field an error is localized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The comment field.
    Comment,
    /// The duration field.
    Duration,
    /// The offset field.
    Offset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Comment => "comment",
            Field::Duration => "duration",
            Field::Offset => "offset",
        };
        f.write_str(name)
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field was empty.
    Empty,
    /// The field did not parse as a non-negative integer.
    NotANumber,
    /// The field exceeded [`MAX_NUMERIC_DIGITS`] digits.
    TooLarge,
}

/// A validation failure localized to one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// What was wrong with it.
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Empty => write!(f, "{}: this field cannot be empty", self.field),
            FieldErrorKind::NotANumber => {
                write!(f, "{}: must be a non-negative whole number", self.field)
            }
            FieldErrorKind::TooLarge => write!(
                f,
                "{}: at most {} digits",
                self.field, MAX_NUMERIC_DIGITS
            ),
        }
    }
}

/// Validated parameters of one recording attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Free-form comment describing the measurement.
    pub comment: String,
    /// Recording duration in seconds.
    pub duration_secs: u32,
    /// Delay before the recording begins, in seconds.
    pub offset_secs: u32,
}

impl SessionParams {
    /// Validate the raw input fields.
    ///
    /// All fields are checked so every offending field is individually
    /// flagged; nothing reaches the worker unless this succeeds.
    pub fn parse(input: &ParamsInput) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        if input.comment.is_empty() {
            errors.push(FieldError {
                field: Field::Comment,
                kind: FieldErrorKind::Empty,
            });
        }

        let duration_secs = parse_seconds(&input.duration, Field::Duration, &mut errors);
        let offset_secs = parse_seconds(&input.offset, Field::Offset, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SessionParams {
            comment: input.comment.clone(),
            duration_secs,
            offset_secs,
        })
    }
}

fn parse_seconds(text: &str, field: Field, errors: &mut Vec<FieldError>) -> u32 {
    let kind = if text.is_empty() {
        Some(FieldErrorKind::Empty)
    } else if text.len() > MAX_NUMERIC_DIGITS {
        Some(FieldErrorKind::TooLarge)
    } else if text.parse::<u32>().is_err() {
        Some(FieldErrorKind::NotANumber)
    } else {
        None
    };

    match kind {
        Some(kind) => {
            errors.push(FieldError { field, kind });
            0
        }
        // Parse checked above.
        None => text.parse().unwrap_or(0),
    }
}
