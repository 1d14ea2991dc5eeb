//! The library components of the game. They allow configuring a playthrough, generating the
//! secret number and talking to the player over the console or a file.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop.

mod game;
mod generator;
mod interface;
mod messages;
mod settings;

pub use game::init;
