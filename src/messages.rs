//! This module contains every user-facing string of the game in one place, both the fixed ones and
//! the ones that interpolate runtime values.
//!
//! The strings are kept verbatim so that the output of the game stays byte-for-byte compatible
//! across the console and the file-backed front ends.

/// This constant holds the hint shown when the guess was below the secret number.
pub(crate) const HIGHER_HINT: &str = "Больше!";

/// This constant holds the hint shown when the guess was above the secret number.
pub(crate) const LOWER_HINT: &str = "Меньше!";

/// This constant holds the prompt written right before a guess is read from the console. It ends
/// in a space rather than a newline so the guess appears on the same line.
pub(crate) const PROMPT: &str = "Введите число: ";

/// This constant holds the congratulation shown once the secret number has been guessed.
pub(crate) const WIN: &str = "Поздравляем! Вы угадали число!";

/// This function formats the count of attempts the player still has after a wrong guess.
pub(crate) fn attempts_left(count: u32) -> String {
    format!("Осталось попыток: {count}")
}

/// This function formats the opening banner announcing the range the secret number was drawn from
/// and the attempt budget for the playthrough.
pub(crate) fn banner(min: i32, max: i32, attempts: u32) -> String {
    format!("Угадайте число от {min} до {max}. У вас {attempts} попыток.")
}

/// This function formats the loss message, revealing the secret number once the attempts have run
/// out.
pub(crate) fn loss(target: i32) -> String {
    format!("Попытки закончились. Загаданное число: {target}")
}
