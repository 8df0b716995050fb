//! `fields` — Bounded, retrying readers for each interactive input field.
//!
//! Every field follows the same protocol:
//!
//! 1. Read at most `max + 1` bytes of the current line.
//! 2. If no newline showed up because the bound was hit, the input was too
//!    long: drain the rest of the line so the leftover characters cannot
//!    leak into the next field, report, and re-prompt.
//! 3. Otherwise validate (non-empty, charset, range) and either return the
//!    cleaned value or report and re-prompt.
//!
//! Retries are plain loops with no upper count — the user can be wrong
//! indefinitely — but end-of-stream is a hard stop: a closed input during
//! any prompt surfaces as [`InputError::Eof`] instead of spinning forever.
//!
//! A line that ends at end-of-stream without a newline, and within the
//! bound, is accepted as-is; only a hit bound counts as truncation.

use crate::direction::Direction;
use crate::errors::InputError;
use crate::text;
use std::io::{self, BufRead, Read, Write};

/// Max length of each word.
pub const WORD_MAX_LEN: usize = 30;
/// Max length of a direction code (a single digit).
pub const DIRECTION_MAX_LEN: usize = 1;
/// Max length of the dimension field.
pub const DIMENSION_MAX_LEN: usize = 4;
/// Max length of the destination path field.
pub const PATH_MAX_LEN: usize = 50;

/// Which field a validation failure belongs to, for message selection.
#[derive(Debug, Clone, Copy)]
enum Field {
    Word,
    Direction,
    Dimension,
    Path,
}

/// Reads validated field values from `input`, writing prompts and retry
/// messages to `output`.
///
/// Generic over the endpoints so sessions can run against locked stdio in
/// the binary and against in-memory buffers in tests.
pub struct FieldReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FieldReader<R, W> {
    pub fn new(input: R, output: W) -> FieldReader<R, W> {
        FieldReader { input, output }
    }

    /// Write a prompt fragment without a trailing newline and flush, so it
    /// shows up before the blocking read.
    pub fn say(&mut self, msg: &str) -> io::Result<()> {
        self.output.write_all(msg.as_bytes())?;
        self.output.flush()
    }

    /// Write a full output line.
    pub fn say_line(&mut self, msg: &str) -> io::Result<()> {
        self.output.write_all(msg.as_bytes())?;
        self.output.write_all(b"\n")?;
        self.output.flush()
    }

    /// A word: non-empty, ASCII letters only, at most [`WORD_MAX_LEN`]
    /// characters. Returned as typed (case is folded later, after the
    /// sentinel check).
    pub fn read_word(&mut self) -> Result<String, InputError> {
        self.retry_loop(Field::Word, Self::word_attempt)
    }

    /// A direction code in 0-5.
    pub fn read_direction(&mut self) -> Result<Direction, InputError> {
        self.retry_loop(Field::Direction, Self::direction_attempt)
    }

    /// The grid dimension: digits only, at least 1.
    pub fn read_dimension(&mut self) -> Result<u32, InputError> {
        self.retry_loop(Field::Dimension, Self::dimension_attempt)
    }

    /// A destination path: any non-empty line up to [`PATH_MAX_LEN`] bytes.
    pub fn read_path(&mut self) -> Result<String, InputError> {
        self.retry_loop(Field::Path, Self::path_attempt)
    }

    fn retry_loop<T>(
        &mut self,
        field: Field,
        attempt: fn(&mut Self) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            match attempt(self) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => self.say(&retry_message(field, &err))?,
                Err(err) => return Err(err),
            }
        }
    }

    fn word_attempt(&mut self) -> Result<String, InputError> {
        let word = self.read_bounded_line(WORD_MAX_LEN)?;
        if word.is_empty() {
            return Err(InputError::Empty);
        }
        if !text::is_alphabetic(&word) {
            return Err(InputError::NotAlphabetic);
        }
        Ok(word)
    }

    fn direction_attempt(&mut self) -> Result<Direction, InputError> {
        let line = self.read_bounded_line(DIRECTION_MAX_LEN)?;
        line.parse()
    }

    fn dimension_attempt(&mut self) -> Result<u32, InputError> {
        let line = self.read_bounded_line(DIMENSION_MAX_LEN)?;
        if line.is_empty() {
            return Err(InputError::Empty);
        }
        if !text::is_numeric(&line) {
            return Err(InputError::NotNumeric);
        }
        let value: u32 = line.parse().map_err(|_| InputError::NotNumeric)?;
        if value == 0 {
            return Err(InputError::DimensionNotPositive);
        }
        Ok(value)
    }

    fn path_attempt(&mut self) -> Result<String, InputError> {
        let path = self.read_bounded_line(PATH_MAX_LEN)?;
        if path.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(path)
    }

    /// Read one line, seeing at most `max_len + 1` bytes of it.
    ///
    /// Truncation is detected by the missing terminator: if the byte bound
    /// was reached and no newline was stripped, the rest of the line is
    /// drained and the read fails with [`InputError::TooLong`].
    fn read_bounded_line(&mut self, max_len: usize) -> Result<String, InputError> {
        let limit = (max_len + 1) as u64;
        let mut raw = Vec::new();
        let n = (&mut self.input).take(limit).read_until(b'\n', &mut raw)?;
        if n == 0 {
            return Err(InputError::Eof);
        }

        // Invalid UTF-8 becomes replacement characters and is then caught by
        // the charset checks like any other bad input.
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if !text::strip_trailing_newline(&mut line) && raw.len() as u64 == limit {
            self.drain_line()?;
            return Err(InputError::TooLong { max: max_len });
        }
        Ok(line)
    }

    /// Discard input up to and including the next newline (or end of
    /// stream). Called only after a hit bound, when the line is known to
    /// have unread characters.
    fn drain_line(&mut self) -> io::Result<()> {
        let mut rest = Vec::new();
        self.input.read_until(b'\n', &mut rest)?;
        Ok(())
    }
}

/// Retry prompt for a recoverable validation failure. Wording is
/// field-specific so the user is told which rule was broken.
fn retry_message(field: Field, err: &InputError) -> String {
    match (field, err) {
        (_, InputError::Empty) => "Empty input. Retry: ".to_string(),
        (_, InputError::TooLong { .. }) => "Input too long. Retry: ".to_string(),
        (Field::Word, InputError::NotAlphabetic) => {
            "Words can only contain letters (a-z). Retry: ".to_string()
        }
        (Field::Direction, InputError::NotNumeric) => "Direction must be an int. Retry: ".to_string(),
        (Field::Direction, InputError::DirectionOutOfRange { min, max, .. }) => {
            format!("Direction must be a number between ({min}-{max}). Retry: ")
        }
        (Field::Dimension, InputError::NotNumeric) => {
            "Dimension must be a positive int. Retry: ".to_string()
        }
        (Field::Dimension, InputError::DimensionNotPositive) => {
            "Dimension must be greater than zero. Retry: ".to_string()
        }
        (_, err) => format!("{err}. Retry: "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> FieldReader<Cursor<Vec<u8>>, Vec<u8>> {
        FieldReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(r: &FieldReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(r.output.clone()).unwrap()
    }

    #[test]
    fn test_read_word_accepts_valid() {
        let mut r = reader("cat\n");
        assert_eq!(r.read_word().unwrap(), "cat");
    }

    #[test]
    fn test_read_word_keeps_case() {
        // Case folding is the session's job, after the sentinel check.
        let mut r = reader("CaT\n");
        assert_eq!(r.read_word().unwrap(), "CaT");
    }

    #[test]
    fn test_read_word_retries_on_empty_then_accepts() {
        let mut r = reader("\ncat\n");
        assert_eq!(r.read_word().unwrap(), "cat");
        assert!(transcript(&r).contains("Empty input. Retry: "));
    }

    #[test]
    fn test_read_word_retries_on_non_alphabetic() {
        let mut r = reader("cat1\ncat\n");
        assert_eq!(r.read_word().unwrap(), "cat");
        assert!(transcript(&r).contains("Words can only contain letters (a-z). Retry: "));
    }

    #[test]
    fn test_read_word_too_long_drains_rest_of_line() {
        // 35 letters, then a clean word. The excess must not bleed into the
        // second attempt.
        let long = "a".repeat(WORD_MAX_LEN + 5);
        let mut r = reader(&format!("{long}\ndog\n"));
        assert_eq!(r.read_word().unwrap(), "dog");
        assert!(transcript(&r).contains("Input too long. Retry: "));
    }

    #[test]
    fn test_read_word_exact_max_length_accepted() {
        let word = "b".repeat(WORD_MAX_LEN);
        let mut r = reader(&format!("{word}\n"));
        assert_eq!(r.read_word().unwrap(), word);
    }

    #[test]
    fn test_read_word_final_line_without_newline_accepted() {
        let mut r = reader("cat");
        assert_eq!(r.read_word().unwrap(), "cat");
    }

    #[test]
    fn test_read_word_eof_aborts() {
        let mut r = reader("");
        assert!(matches!(r.read_word(), Err(InputError::Eof)));
    }

    #[test]
    fn test_read_word_eof_after_failed_retries_aborts() {
        let mut r = reader("cat1\n");
        assert!(matches!(r.read_word(), Err(InputError::Eof)));
        assert!(transcript(&r).contains("Retry: "));
    }

    #[test]
    fn test_read_direction_accepts_each_code() {
        for code in 0..=5u8 {
            let mut r = reader(&format!("{code}\n"));
            assert_eq!(r.read_direction().unwrap().code(), code);
        }
    }

    #[test]
    fn test_read_direction_rejects_out_of_range_then_accepts() {
        let mut r = reader("6\n0\n");
        assert_eq!(r.read_direction().unwrap().code(), 0);
        assert!(transcript(&r).contains("Direction must be a number between (0-5). Retry: "));
    }

    #[test]
    fn test_read_direction_rejects_single_non_digit() {
        let mut r = reader("x\n4\n");
        assert_eq!(r.read_direction().unwrap().code(), 4);
        assert!(transcript(&r).contains("Direction must be an int. Retry: "));
    }

    #[test]
    fn test_read_direction_multichar_input_is_too_long() {
        // The direction field is one byte wide, so "-1" and "abc" hit the
        // bound before the charset check ever runs.
        let mut r = reader("-1\nabc\n5\n");
        assert_eq!(r.read_direction().unwrap().code(), 5);
        let t = transcript(&r);
        assert_eq!(t.matches("Input too long. Retry: ").count(), 2);
    }

    #[test]
    fn test_read_dimension_accepts_positive() {
        let mut r = reader("5\n");
        assert_eq!(r.read_dimension().unwrap(), 5);
        let mut r = reader("100\n");
        assert_eq!(r.read_dimension().unwrap(), 100);
        let mut r = reader("9999\n");
        assert_eq!(r.read_dimension().unwrap(), 9999);
    }

    #[test]
    fn test_read_dimension_rejects_zero() {
        let mut r = reader("0\n7\n");
        assert_eq!(r.read_dimension().unwrap(), 7);
        assert!(transcript(&r).contains("Dimension must be greater than zero. Retry: "));
    }

    #[test]
    fn test_read_dimension_rejects_negative_and_alpha() {
        let mut r = reader("-5\nabc\n3\n");
        assert_eq!(r.read_dimension().unwrap(), 3);
        let t = transcript(&r);
        assert_eq!(t.matches("Dimension must be a positive int. Retry: ").count(), 2);
    }

    #[test]
    fn test_read_dimension_rejects_empty() {
        let mut r = reader("\n2\n");
        assert_eq!(r.read_dimension().unwrap(), 2);
        assert!(transcript(&r).contains("Empty input. Retry: "));
    }

    #[test]
    fn test_read_dimension_five_digits_is_too_long() {
        let mut r = reader("10000\n10\n");
        assert_eq!(r.read_dimension().unwrap(), 10);
        assert!(transcript(&r).contains("Input too long. Retry: "));
    }

    #[test]
    fn test_read_path_rejects_empty_then_accepts() {
        let mut r = reader("\nout.txt\n");
        assert_eq!(r.read_path().unwrap(), "out.txt");
        assert!(transcript(&r).contains("Empty input. Retry: "));
    }

    #[test]
    fn test_invalid_utf8_is_rejected_not_fatal() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"cat\n");
        let mut r = FieldReader::new(Cursor::new(input), Vec::new());
        assert_eq!(r.read_word().unwrap(), "cat");
    }

    #[test]
    fn test_crlf_input_accepted() {
        let mut r = reader("cat\r\n2\r\n");
        assert_eq!(r.read_word().unwrap(), "cat");
        assert_eq!(r.read_dimension().unwrap(), 2);
    }
}
