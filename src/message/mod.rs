use crate::random::RandomSource;

pub mod greeting;
pub mod number;

pub use greeting::{random_greeting, GREETINGS};
pub use number::{random_number, MAX_NUMBER, MIN_NUMBER};

pub fn format_message(greeting: &str, number: u8) -> String {
    format!("{greeting}, your random number is {number}!")
}

/// Draws a greeting, then a number, and formats them.
pub fn create_message<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let greeting = random_greeting(rng);
    let number = random_number(rng);
    format_message(greeting, number)
}
