use crate::random::RandomSource;

/// The greeting set, in order.
pub static GREETINGS: &[&str] = &["Hello", "Hi", "Hey", "Howdy", "Hola", "Bonjour"];

/// Picks one greeting uniformly. Consecutive calls may repeat.
pub fn random_greeting<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    let len = GREETINGS.len();
    let index = ((rng.next_f64() * len as f64) as usize).min(len - 1);
    GREETINGS[index]
}
