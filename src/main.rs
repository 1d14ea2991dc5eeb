//! # ugaday
//!
//! This crate is a game about guessing a secret number drawn from a configurable range before a
//! bounded budget of attempts runs out, with a higher/lower hint after every wrong guess.
//! It is inspired on the classic console guessing game.
//!
//! By default one playthrough runs against the interactive console over the range 1 to 100 with
//! five attempts. The same game can be pointed at a file instead, reading the guess from it and
//! appending every message to it, so a playthrough can be driven without a terminal.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use ugaday::init;

fn main() -> Result<()> {
    init()
}
