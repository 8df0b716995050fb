//! Error types for input collection with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E009) for documentation lookup:
//!
//! - E001: `TooLong` (Bounded read saw no line terminator)
//! - E002: `Empty` (Empty input)
//! - E003: `NotAlphabetic` (Non-letter character in a word)
//! - E004: `NotNumeric` (Non-digit character in a numeric field)
//! - E005: `DirectionOutOfRange` (Direction code outside 0-5)
//! - E006: `DimensionNotPositive` (Dimension of zero)
//! - E007: `DuplicateWord` (Word already stored this session)
//! - E008: `Eof` (Input stream closed mid-session)
//! - E009: `Io` (Low-level I/O error)
//!
//! The first six are recoverable: the field reader reports them and asks for
//! the same field again. `DuplicateWord` is recoverable at the session level
//! (the pair is discarded and collection resumes). `Eof` and `Io` abort the
//! session.

use std::io;

/// Custom error type for input-collection operations
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input too long (max {max} characters)")]
    TooLong { max: usize },

    #[error("Empty input")]
    Empty,

    #[error("Words can only contain letters (a-z)")]
    NotAlphabetic,

    #[error("Expected a numeric value")]
    NotNumeric,

    #[error("Direction {value} out of range ({min}-{max})")]
    DirectionOutOfRange { value: u32, min: u8, max: u8 },

    #[error("Dimension must be greater than zero")]
    DimensionNotPositive,

    #[error("Word \"{word}\" already registered")]
    DuplicateWord { word: String },

    #[error("Input stream ended before a valid value was entered")]
    Eof,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::TooLong { .. } => "E001",
            InputError::Empty => "E002",
            InputError::NotAlphabetic => "E003",
            InputError::NotNumeric => "E004",
            InputError::DirectionOutOfRange { .. } => "E005",
            InputError::DimensionNotPositive => "E006",
            InputError::DuplicateWord { .. } => "E007",
            InputError::Eof => "E008",
            InputError::Io(_) => "E009",
        }
    }

    /// Returns a short, stable description of the variant (used by the
    /// error-docs generator).
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::TooLong { .. } => "Input too long",
            InputError::Empty => "Empty input",
            InputError::NotAlphabetic => "Non-letter character in word",
            InputError::NotNumeric => "Non-digit character in numeric field",
            InputError::DirectionOutOfRange { .. } => "Direction out of range",
            InputError::DimensionNotPositive => "Dimension not positive",
            InputError::DuplicateWord { .. } => "Duplicate word",
            InputError::Eof => "Input stream exhausted",
            InputError::Io(_) => "I/O error",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::TooLong { .. } => {
                Some("Words may be up to 30 letters; directions one digit; dimensions four digits")
            }
            InputError::NotAlphabetic => Some("Example: use 'cat', not 'cat1' or 'c-a-t'"),
            InputError::NotNumeric => Some("Enter digits only (e.g., '3'), no sign or spaces"),
            InputError::DirectionOutOfRange { .. } => {
                Some("Valid direction codes are 0, 1, 2, 3, 4 and 5")
            }
            InputError::DimensionNotPositive => Some("The grid must be at least 1x1"),
            InputError::DuplicateWord { .. } => {
                Some("Each word may appear only once; comparison ignores letter case")
            }
            InputError::Eof => {
                Some("The collector needs an interactive stream or a fully scripted one ending with STOP")
            }
            _ => None,
        }
    }

    /// True for violations the field readers handle by re-prompting the same
    /// field. `DuplicateWord` is deliberately excluded: it is recovered one
    /// level up, in the session loop.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::TooLong { .. }
                | InputError::Empty
                | InputError::NotAlphabetic
                | InputError::NotNumeric
                | InputError::DirectionOutOfRange { .. }
                | InputError::DimensionNotPositive
        )
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
