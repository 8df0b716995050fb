//! `session` — Module driving one interactive collection run end to end.
//!
//! A session moves through two states. In **Collecting** it prompts for the
//! grid dimension once, then loops over word/direction pairs, pushing each
//! accepted pair into the [`Store`]. Typing the sentinel keyword as a word
//! moves it to **Done**, after which [`Session::save`] serializes the store
//! to a text file.
//!
//! The sentinel comparison is case-sensitive and happens before the word is
//! lowercased, so `stop` is an ordinary word while `STOP` ends collection.
//!
//! Duplicate words are reported and skipped — the loop resumes at the next
//! word prompt rather than re-asking for the same pair.

use crate::errors::InputError;
use crate::fields::FieldReader;
use crate::store::Store;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};

/// Keyword that ends word collection.
pub const SENTINEL: &str = "STOP";

/// How a finished session ended up. The process exits 0 for all three; the
/// distinction is only reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// File written and flushed.
    Saved { path: String },
    /// The file was opened but writing or flushing it failed.
    CloseFailed { path: String },
    /// The store had no entries; no file was created and no path was asked
    /// for.
    NothingToSave,
}

/// One interactive run: a field reader over the session's endpoints plus
/// the store being filled.
pub struct Session<R, W> {
    io: FieldReader<R, W>,
    store: Store,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Session<R, W> {
        Session {
            io: FieldReader::new(input, output),
            store: Store::new(),
        }
    }

    /// The store in its current state (read-only).
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run the Collecting state: dimension first, then word/direction pairs
    /// until the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Eof`] if the input stream ends mid-session, or
    /// an I/O error from the endpoints. Validation failures never escape —
    /// they are handled by re-prompting inside the field readers.
    pub fn collect(&mut self) -> Result<(), InputError> {
        self.io.say_line("Enter the size for the word search:")?;
        let dimension = self.io.read_dimension()?;
        self.store.set_dimension(dimension);
        log::debug!("dimension set to {dimension}");

        self.io.say_line(&format!(
            "Enter the words followed by the direction for the word search, \
             one at a time (enter {SENTINEL} to finish):"
        ))?;

        loop {
            self.io.say("Word: ")?;
            let word = self.io.read_word()?;
            if word == SENTINEL {
                break;
            }
            let word = word.to_lowercase();

            self.io.say("Direction (0-5): ")?;
            let direction = self.io.read_direction()?;

            match self.store.append(word, direction) {
                Ok(()) => log::debug!("entry {} accepted", self.store.len()),
                Err(InputError::DuplicateWord { word }) => {
                    log::debug!("duplicate \"{word}\" skipped");
                    self.io.say_line("Word already registered!")?;
                }
                Err(err) => return Err(err),
            }
        }

        log::info!("collected {} entries", self.store.len());
        Ok(())
    }

    /// Run the terminal action: serialize the store to a file.
    ///
    /// `preset_path` (the `--output` flag) is tried before prompting; if it
    /// cannot be opened the session falls back to the interactive retry
    /// loop. An empty store short-circuits to
    /// [`SaveOutcome::NothingToSave`] without asking for a path.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Eof`] or an endpoint I/O error if the path
    /// prompt cannot complete. Failures writing the opened file are not
    /// errors but the [`SaveOutcome::CloseFailed`] outcome.
    pub fn save(&mut self, preset_path: Option<&str>) -> Result<SaveOutcome, InputError> {
        if self.store.is_empty() {
            log::info!("nothing to save");
            return Ok(SaveOutcome::NothingToSave);
        }

        let mut path = match preset_path {
            Some(preset) => preset.to_string(),
            None => {
                self.io.say("Enter file directory to save: ")?;
                self.io.read_path()?
            }
        };

        let file = loop {
            match File::create(&path) {
                Ok(file) => break file,
                Err(err) => {
                    log::warn!("could not open \"{path}\": {err}");
                    self.io.say("Couldn't open file. Retry: ")?;
                    path = self.io.read_path()?;
                }
            }
        };

        let mut writer = BufWriter::new(file);
        let written = write_store(&self.store, &mut writer).and_then(|()| writer.flush());
        match written {
            Ok(()) => {
                log::info!("saved {} entries to \"{path}\"", self.store.len());
                Ok(SaveOutcome::Saved { path })
            }
            Err(err) => {
                log::warn!("saving to \"{path}\" failed: {err}");
                Ok(SaveOutcome::CloseFailed { path })
            }
        }
    }
}

/// Serialize a store in the fixed output format:
///
/// ```text
/// DIMENSION
/// <dimension>
/// WORDS
/// <word> <direction>
/// ```
///
/// One line per entry, insertion order, no trailing blank line. A dimension
/// that was never provided serializes as `-1`; the interactive flow always
/// sets one before the first entry can exist.
pub fn write_store<W: Write>(store: &Store, out: &mut W) -> io::Result<()> {
    writeln!(out, "DIMENSION")?;
    writeln!(out, "{}", store.dimension().map_or(-1, i64::from))?;
    writeln!(out, "WORDS")?;
    for entry in store.entries() {
        writeln!(out, "{} {}", entry.word, entry.direction)?;
    }
    Ok(())
}
