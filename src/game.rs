//! The game module contains the core of the game: the playthrough loop with its attempt counting,
//! comparison and termination logic, plus the `init()` function that wires the concrete
//! collaborators together and starts a playthrough.
//!
//! The loop itself never touches a terminal, a file or a random source directly; it only speaks to
//! the generator and interface traits, which is what lets the tests below drive it with scripted
//! doubles.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::generator::{NumberGenerator, RandomNumberGenerator};
use crate::interface::{ConsoleInterface, FileInterface, UserInterface};
use crate::messages::{attempts_left, banner, loss, HIGHER_HINT, LOWER_HINT, WIN};
use crate::settings::GameSettings;

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every option has a default, so running the binary with no
/// arguments plays one game over the range 1 to 100 with five attempts on the console.
#[derive(Parser)]
#[command(name = "ugaday", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of attempts the player gets before the game is lost.
    ///
    /// Zero is accepted and makes the game reveal the secret number immediately without asking
    /// for a single guess.
    #[arg(long, default_value_t = 5, value_name = "COUNT")]
    attempts: u32,
    /// Play against a file instead of the console.
    ///
    /// The file must contain the guess as a single integer; every message of the game is appended
    /// to the same file, one line per message.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// The inclusive upper bound of the range the secret number is drawn from.
    #[arg(long, default_value_t = 100, value_name = "NUMBER")]
    max: i32,
    /// The inclusive lower bound of the range the secret number is drawn from.
    #[arg(long, default_value_t = 1, value_name = "NUMBER")]
    min: i32,
}

/// This struct holds one playthrough worth of state: the three collaborators supplied at
/// construction. The secret number and the attempt counter live inside [`Game::play`] and die with
/// it.
pub(crate) struct Game<G, U> {
    /// This field holds the source of the secret number.
    generator: G,
    /// This field holds the player-facing side of the game.
    interface: U,
    /// This field holds the immutable configuration of the playthrough.
    settings: GameSettings,
}

impl<G: NumberGenerator, U: UserInterface> Game<G, U> {
    /// This function assembles a game from its three collaborators.
    pub(crate) fn new(generator: G, settings: GameSettings, interface: U) -> Self {
        Self {
            generator,
            interface,
            settings,
        }
    }

    /// This function runs exactly one playthrough from the draw of the secret number to a terminal
    /// outcome, win or attempts exhausted.
    ///
    /// The outcome is communicated solely through the interface messages; the returned result only
    /// carries input and output failures, every one of which is fatal to the playthrough.
    ///
    /// # Errors
    ///
    /// The function propagates any error of the interface: an unreadable or malformed guess, or an
    /// unwritable message.
    pub(crate) fn play(&mut self) -> Result<()> {
        let target = self
            .generator
            .generate(self.settings.min_number(), self.settings.max_number());
        let mut attempts_remaining = self.settings.max_attempts();

        self.interface.show_message(&banner(
            self.settings.min_number(),
            self.settings.max_number(),
            attempts_remaining,
        ))?;

        while attempts_remaining > 0 {
            let guess = self.interface.get_user_guess()?;

            // a correct guess wins even on the last attempt
            if guess == target {
                self.interface.show_message(WIN)?;
                return Ok(());
            }

            attempts_remaining -= 1;
            self.interface.show_message(if guess < target {
                HIGHER_HINT
            } else {
                LOWER_HINT
            })?;
            self.interface.show_message(&attempts_left(attempts_remaining))?;
        }

        self.interface.show_message(&loss(target))
    }
}

/// Initializes the game and runs one playthrough. This is a `main()` function of sorts though it
/// is still called from main.rs.
///
/// This function is the only place a concrete generator or interface is chosen: the command line
/// decides the configuration and whether the console or a file plays the part of the player.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - ugaday::ConfigurationError
/// - ugaday::InterfaceError
/// - io::Error
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    let settings = GameSettings::new(cli.min, cli.max, cli.attempts)?;
    let generator = RandomNumberGenerator::new();

    match cli.file {
        Some(path) => Game::new(generator, settings, FileInterface::new(path)).play(),
        None => Game::new(generator, settings, ConsoleInterface::new()).play(),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::Game;
    use crate::generator::SequenceGenerator;
    use crate::interface::UserInterface;
    use crate::settings::GameSettings;

    /// This struct is a scripted stand-in for the player. It hands out a fixed list of guesses and
    /// records every message the game shows, so a test can assert on the full transcript.
    struct ScriptedInterface {
        /// This field holds the guesses still to be played, in reverse order.
        guesses: Vec<i32>,
        /// This field holds every message shown so far, in order.
        messages: Vec<String>,
        /// This field holds the number of guess requests made so far.
        requests: usize,
    }

    impl ScriptedInterface {
        /// This function creates an interface that will play the given guesses in the given
        /// order.
        fn new(guesses: &[i32]) -> Self {
            let mut guesses = guesses.to_vec();
            guesses.reverse();
            Self {
                guesses,
                messages: Vec::new(),
                requests: 0,
            }
        }
    }

    impl UserInterface for ScriptedInterface {
        fn get_user_guess(&mut self) -> Result<i32> {
            self.requests += 1;
            // an exhausted script is a broken test, not a runtime condition
            Ok(self.guesses.pop().unwrap())
        }

        fn show_message(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    /// This function runs one full playthrough with a fixed target and scripted guesses and
    /// returns the interface to inspect the transcript.
    fn play_scripted(settings: GameSettings, target: i32, guesses: &[i32]) -> ScriptedInterface {
        let mut game = Game::new(
            SequenceGenerator::new(&[target]),
            settings,
            ScriptedInterface::new(guesses),
        );
        game.play().unwrap();
        game.interface
    }

    #[test]
    fn first_guess_win_emits_only_banner_and_win() {
        let settings = GameSettings::new(1, 10, 3).unwrap();
        let interface = play_scripted(settings, 7, &[7]);

        assert_eq!(
            interface.messages,
            vec![
                "Угадайте число от 1 до 10. У вас 3 попыток.",
                "Поздравляем! Вы угадали число!",
            ]
        );
        assert_eq!(interface.requests, 1);
    }

    #[test]
    fn win_on_the_last_attempt_still_wins() {
        let settings = GameSettings::new(1, 10, 3).unwrap();
        let interface = play_scripted(settings, 7, &[3, 9, 7]);

        assert_eq!(
            interface.messages,
            vec![
                "Угадайте число от 1 до 10. У вас 3 попыток.",
                "Больше!",
                "Осталось попыток: 2",
                "Меньше!",
                "Осталось попыток: 1",
                "Поздравляем! Вы угадали число!",
            ]
        );
        assert_eq!(interface.requests, 3);
    }

    #[test]
    fn exhausted_attempts_reveal_the_target() {
        let settings = GameSettings::new(1, 10, 2).unwrap();
        let interface = play_scripted(settings, 5, &[1, 2]);

        assert_eq!(
            interface.messages,
            vec![
                "Угадайте число от 1 до 10. У вас 2 попыток.",
                "Больше!",
                "Осталось попыток: 1",
                "Больше!",
                "Осталось попыток: 0",
                "Попытки закончились. Загаданное число: 5",
            ]
        );
        assert_eq!(interface.requests, 2);
    }

    #[test]
    fn each_wrong_guess_emits_exactly_one_hint() {
        let settings = GameSettings::new(1, 100, 4).unwrap();
        let interface = play_scripted(settings, 50, &[10, 90, 20, 80]);

        let hints: Vec<&str> = interface
            .messages
            .iter()
            .filter(|message| message.as_str() == "Больше!" || message.as_str() == "Меньше!")
            .map(|message| message.as_str())
            .collect();

        assert_eq!(hints, vec!["Больше!", "Меньше!", "Больше!", "Меньше!"]);
    }

    #[test]
    fn guess_above_the_target_hints_lower() {
        let settings = GameSettings::new(1, 10, 1).unwrap();
        let interface = play_scripted(settings, 4, &[9]);

        assert_eq!(interface.messages[1], "Меньше!");
    }

    #[test]
    fn zero_attempts_lose_without_a_single_guess_request() {
        let settings = GameSettings::new(1, 10, 0).unwrap();
        let interface = play_scripted(settings, 3, &[]);

        assert_eq!(
            interface.messages,
            vec![
                "Угадайте число от 1 до 10. У вас 0 попыток.",
                "Попытки закончились. Загаданное число: 3",
            ]
        );
        assert_eq!(interface.requests, 0);
    }

    #[test]
    fn no_message_follows_a_win() {
        let settings = GameSettings::new(1, 10, 5).unwrap();
        let interface = play_scripted(settings, 2, &[2]);

        assert_eq!(
            interface.messages.last().map(String::as_str),
            Some("Поздравляем! Вы угадали число!")
        );
        assert!(!interface
            .messages
            .iter()
            .any(|message| message.starts_with("Попытки закончились")));
    }
}
