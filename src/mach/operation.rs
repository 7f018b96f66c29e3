use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Checked integer arithmetic. Arguments are `lhs <op> rhs`.
pub struct Operation {}

impl Operation {
    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(ArithmeticOverflow))
                }
            }
        }
    }

    /// Sign follows the dividend, as C `%` does.
    pub fn remainder(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_rem(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(ArithmeticOverflow))
                }
            }
        }
    }

    pub fn shift_left(lhs: i32, rhs: i32) -> Result<i32> {
        match u32::try_from(rhs).ok().and_then(|r| lhs.checked_shl(r)) {
            Some(i) => Ok(i),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    /// Arithmetic shift, the sign bit is kept.
    pub fn shift_right(lhs: i32, rhs: i32) -> Result<i32> {
        match u32::try_from(rhs).ok().and_then(|r| lhs.checked_shr(r)) {
            Some(i) => Ok(i),
            None => Err(error!(ArithmeticOverflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn code(r: Result<i32>) -> ErrorCode {
        r.unwrap_err().code()
    }

    #[test]
    fn test_division() {
        assert_eq!(Operation::divide(7, 2), Ok(3));
        assert_eq!(Operation::divide(-7, 2), Ok(-3));
        assert_eq!(code(Operation::divide(1, 0)), ErrorCode::DivisionByZero);
        assert_eq!(
            code(Operation::divide(i32::MIN, -1)),
            ErrorCode::ArithmeticOverflow
        );
    }

    #[test]
    fn test_remainder() {
        assert_eq!(Operation::remainder(7, 3), Ok(1));
        assert_eq!(Operation::remainder(-7, 3), Ok(-1));
        assert_eq!(code(Operation::remainder(7, 0)), ErrorCode::DivisionByZero);
        assert_eq!(
            code(Operation::remainder(i32::MIN, -1)),
            ErrorCode::ArithmeticOverflow
        );
    }

    #[test]
    fn test_shifts() {
        assert_eq!(Operation::shift_left(1, 4), Ok(16));
        assert_eq!(Operation::shift_right(-16, 2), Ok(-4));
        assert_eq!(code(Operation::shift_left(1, 32)), ErrorCode::ArithmeticOverflow);
        assert_eq!(code(Operation::shift_right(1, -1)), ErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(code(Operation::sum(i32::MAX, 1)), ErrorCode::ArithmeticOverflow);
        assert_eq!(code(Operation::subtract(i32::MIN, 1)), ErrorCode::ArithmeticOverflow);
        assert_eq!(code(Operation::multiply(i32::MAX, 2)), ErrorCode::ArithmeticOverflow);
    }
}
