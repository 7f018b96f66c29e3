use super::Error;
use std::num::IntErrorKind;

type Result<T> = std::result::Result<T, Error>;

/// Parse a word as a base-10 signed integer.
///
/// Trailing garbage is never a partial success: `12a` is `NotANumber`.
pub fn parse_literal(word: &str) -> Result<i32> {
    match word.parse::<i32>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(error!(NumberTooBig; word))
            }
            _ => Err(error!(NotANumber; word)),
        },
    }
}
