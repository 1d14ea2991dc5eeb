//! This module contains the user interaction role of the game: the trait that pairs up requesting
//! a guess with displaying a message, and its two production implementations.
//!
//! The interactive variant talks to the terminal one line at a time. The file-backed variant reads
//! its guess from a file and appends its messages to that same file, which allows driving a
//! playthrough without a terminal at all. The game loop only ever sees the trait.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::num::ParseIntError;
use std::path::PathBuf;

use anyhow::Result;
use console::{style, Term};

use crate::messages::PROMPT;

/// This enum holds the ways user interaction can fail beyond plain I/O errors.
#[derive(thiserror::Error, Debug)]
pub(crate) enum InterfaceError {
    /// This variant is used when the text supplied for a guess does not parse as an integer. The
    /// failure is fatal to the playthrough; there is no retry on bad input.
    #[error("{}: {input:?}", style("malformed guess").bold().underlined())]
    MalformedGuess {
        /// This field holds the offending input, trimmed of surrounding whitespace.
        input: String,
        /// This field holds the parse failure that rejected the input.
        source: ParseIntError,
    },
}

/// This trait abstracts the player-facing side of the game as the minimal capability pair the game
/// loop needs: pulling a guess in and pushing a message out.
pub(crate) trait UserInterface {
    /// This function requests one guess from the player.
    ///
    /// # Errors
    ///
    /// The function returns an error if the underlying input cannot be read or does not parse as
    /// an integer.
    fn get_user_guess(&mut self) -> Result<i32>;

    /// This function displays one message to the player.
    ///
    /// # Errors
    ///
    /// The function returns an error if the underlying output cannot be written.
    fn show_message(&mut self, message: &str) -> Result<()>;
}

/// This struct is the interactive front end. Each guess request writes the prompt and reads one
/// line from the terminal; each message becomes one line of output.
pub(crate) struct ConsoleInterface {
    /// This field holds the handle to the standard output of the attached terminal.
    term: Term,
}

impl ConsoleInterface {
    /// This function creates an interface over the standard output terminal.
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl UserInterface for ConsoleInterface {
    fn get_user_guess(&mut self) -> Result<i32> {
        self.term.write_str(PROMPT)?;
        let line = self.term.read_line()?;

        parse_guess(&line)
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }
}

/// This struct is the file-backed front end. Guess requests read the whole file as a single
/// integer; messages are appended to the same file one line at a time.
///
/// Reads and appends are unsynchronized, so concurrent playthroughs against the same path are not
/// supported.
pub(crate) struct FileInterface {
    /// This field holds the path the guesses are read from and the messages are appended to.
    path: PathBuf,
}

impl FileInterface {
    /// This function creates an interface over the given path. The file is not touched until the
    /// first guess request or message.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl UserInterface for FileInterface {
    fn get_user_guess(&mut self) -> Result<i32> {
        let content = fs::read_to_string(&self.path)?;

        parse_guess(&content)
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        writeln!(file, "{message}")?;
        Ok(())
    }
}

/// This function parses the raw text of a guess, tolerating surrounding whitespace and nothing
/// else.
fn parse_guess(text: &str) -> Result<i32> {
    let trimmed = text.trim();

    trimmed.parse().map_err(|source| {
        InterfaceError::MalformedGuess {
            input: trimmed.to_string(),
            source,
        }
        .into()
    })
}
