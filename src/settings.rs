//! This module contains the immutable configuration of a playthrough: the bounds of the range the
//! secret number is drawn from and the number of attempts the player gets.

use console::style;

/// This enum holds the ways a configuration can be rejected at construction time.
///
/// The original game accepted any bounds and let an inverted range misbehave at draw time; here
/// the check happens once, up front, before a generator or an interface is ever built.
#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigurationError {
    /// This variant is used when the lower bound of the range exceeds the upper bound.
    #[error("{}: {min} > {max}", style("inverted range").bold().underlined())]
    InvertedRange {
        /// This field holds the rejected lower bound.
        min: i32,
        /// This field holds the rejected upper bound.
        max: i32,
    },
}

/// This struct holds the configuration of one playthrough. It is created once at startup and never
/// changes afterwards; the game only reads from it.
#[derive(Clone, Copy)]
pub(crate) struct GameSettings {
    /// This field holds the number of guesses the player may make before losing. Zero is allowed
    /// and means the player loses without ever being asked for a guess.
    max_attempts: u32,
    /// This field holds the inclusive upper bound of the range.
    max_number: i32,
    /// This field holds the inclusive lower bound of the range.
    min_number: i32,
}

impl GameSettings {
    /// This function creates a validated configuration.
    ///
    /// # Errors
    ///
    /// The function returns [`ConfigurationError::InvertedRange`] if `min_number` exceeds
    /// `max_number`.
    pub(crate) fn new(
        min_number: i32,
        max_number: i32,
        max_attempts: u32,
    ) -> Result<Self, ConfigurationError> {
        if min_number > max_number {
            return Err(ConfigurationError::InvertedRange {
                min: min_number,
                max: max_number,
            });
        }

        Ok(Self {
            max_attempts,
            max_number,
            min_number,
        })
    }

    /// This function returns the attempt budget of the playthrough.
    pub(crate) const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// This function returns the inclusive upper bound of the range.
    pub(crate) const fn max_number(&self) -> i32 {
        self.max_number
    }

    /// This function returns the inclusive lower bound of the range.
    pub(crate) const fn min_number(&self) -> i32 {
        self.min_number
    }
}
