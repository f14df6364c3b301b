use crate::tokenizer::is_number;
use log::debug;

pub const MIN_VALUE: u32 = 0;
pub const MAX_VALUE: u32 = 20;

/// Returns `false` when any numeric token falls outside `MIN_VALUE..=MAX_VALUE`.
///
/// Digit runs too long for a `u32` count as out of range. Non-numeric tokens
/// are not inspected.
pub fn validate(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .filter(|token| is_number(token))
        .all(|token| match token.parse::<u32>() {
            Ok(value) => (MIN_VALUE..=MAX_VALUE).contains(&value),
            Err(_) => {
                debug!("Numeric token {} does not fit in u32", token);
                false
            }
        })
}
