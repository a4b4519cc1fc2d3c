use crate::random::RandomSource;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 100;

/// Uniform integer in `MIN_NUMBER..=MAX_NUMBER`.
pub fn random_number<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    let span = (MAX_NUMBER - MIN_NUMBER) as f64 + 1.0;
    let offset = ((rng.next_f64() * span) as u8).min(MAX_NUMBER - MIN_NUMBER);
    MIN_NUMBER + offset
}
