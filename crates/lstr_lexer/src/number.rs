//! Numeric literal parsing.
//!
//! Both parsers work on already-scanned token text, never on live input.
//! An optional leading `-` sets the sign; every decimal digit after it is
//! accumulated, and for reals the first `.` marks where the fraction
//! starts. Other bytes are skipped.
//!
//! [`parse_hex_u32`] is stricter: it reads color literals and rejects
//! anything that is not a hex digit.

use std::borrow::Cow;

use thiserror::Error;

/// Failure to turn literal text into a value.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    /// The literal does not fit the target type.
    #[error("numeric literal out of range")]
    Overflow,
    /// The text holds no digits at all.
    #[error("numeric literal has no digits")]
    Empty,
    /// A byte that is not a digit of the expected radix.
    #[error("invalid digit {0:#04x} in numeric literal")]
    InvalidDigit(u8),
}

/// Parsed value of a numeric token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    /// The value as an integer. Reals truncate toward zero, saturating at
    /// the `i64` bounds.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float-to-int `as` saturates, which is the documented behavior"
    )]
    pub fn as_integer(self) -> i64 {
        match self {
            Number::Integer(v) => v,
            Number::Real(v) => v as i64,
        }
    }

    /// The value as a real. Integers beyond 2^53 lose precision.
    #[allow(
        clippy::cast_precision_loss,
        reason = "widening to f64 is the requested conversion"
    )]
    pub fn as_real(self) -> f64 {
        match self {
            Number::Integer(v) => v as f64,
            Number::Real(v) => v,
        }
    }
}

/// Split off a leading `-`.
fn split_sign(text: &[u8]) -> (bool, &[u8]) {
    match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, text),
    }
}

/// Parse integer literal text with checked accumulation.
///
/// Negative literals accumulate downward so `i64::MIN` is reachable.
pub fn parse_integer(text: &[u8]) -> Result<i64, NumberError> {
    let (negative, digits) = split_sign(text);
    let mut result: i64 = 0;
    let mut seen = false;
    for &b in digits {
        if !b.is_ascii_digit() {
            continue;
        }
        seen = true;
        let digit = i64::from(b - b'0');
        result = result.checked_mul(10).ok_or(NumberError::Overflow)?;
        result = if negative {
            result.checked_sub(digit)
        } else {
            result.checked_add(digit)
        }
        .ok_or(NumberError::Overflow)?;
    }
    if seen {
        Ok(result)
    } else {
        Err(NumberError::Empty)
    }
}

/// Parse real literal text.
///
/// Digits and the first `.` are handed to the standard float parser, so
/// the result is correctly rounded however long the literal is. Text
/// without digits (`"."`, `"-."`) is zero. Fails only when the value is
/// not finite.
pub fn parse_real(text: &[u8]) -> Result<f64, NumberError> {
    let (negative, body) = split_sign(text);
    if !body.iter().any(u8::is_ascii_digit) {
        return Ok(if negative { -0.0 } else { 0.0 });
    }
    let magnitude: f64 = real_digits(body)
        .parse()
        .map_err(|_| NumberError::Empty)?;
    if !magnitude.is_finite() {
        return Err(NumberError::Overflow);
    }
    Ok(if negative { -magnitude } else { magnitude })
}

/// Digits of `body` with at most one `.`; only allocates when something
/// has to be dropped.
fn real_digits(body: &[u8]) -> Cow<'_, str> {
    let mut dots = 0;
    let plain = body.iter().all(|&b| match b {
        b'0'..=b'9' => true,
        b'.' => {
            dots += 1;
            dots == 1
        }
        _ => false,
    });
    if plain {
        if let Ok(s) = std::str::from_utf8(body) {
            return Cow::Borrowed(s);
        }
    }
    let mut seen_dot = false;
    let kept = body.iter().filter(|&&b| {
        b.is_ascii_digit() || (b == b'.' && !std::mem::replace(&mut seen_dot, true))
    });
    Cow::Owned(kept.map(|&b| char::from(b)).collect())
}

/// Parse a hex color such as `#ff8800` or `0xFF8800` into a `u32`.
///
/// An optional `0x` or `#` prefix is dropped. Up to eight hex digits fill
/// the value from the most significant nibble down, so `"ff8800"` becomes
/// `0xff88_00ff`: the low byte is always forced to `0xff`.
pub fn parse_hex_u32(text: &[u8]) -> Result<u32, NumberError> {
    let digits = text
        .strip_prefix(b"0x")
        .or_else(|| text.strip_prefix(b"#"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(NumberError::Empty);
    }
    if digits.len() > 8 {
        return Err(NumberError::Overflow);
    }
    let mut result: u32 = 0;
    for (i, &b) in digits.iter().enumerate() {
        let digit = char::from(b)
            .to_digit(16)
            .ok_or(NumberError::InvalidDigit(b))?;
        result |= digit << (28 - 4 * i);
    }
    Ok(result | 0xff)
}

#[cfg(test)]
#[allow(
    clippy::float_cmp,
    clippy::unwrap_used,
    reason = "exact literals are exactly representable; tests can panic"
)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_integer(b"0"), Ok(0));
        assert_eq!(parse_integer(b"42"), Ok(42));
        assert_eq!(parse_integer(b"-5"), Ok(-5));
        assert_eq!(parse_integer(b"007"), Ok(7));
    }

    #[test]
    fn integers_past_ten_digits() {
        assert_eq!(parse_integer(b"12345678901"), Ok(12_345_678_901));
        assert_eq!(parse_integer(b"9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_integer(b"-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn integer_overflow() {
        assert_eq!(
            parse_integer(b"9223372036854775808"),
            Err(NumberError::Overflow)
        );
        assert_eq!(
            parse_integer(b"-99999999999999999999"),
            Err(NumberError::Overflow)
        );
    }

    #[test]
    fn integer_without_digits() {
        assert_eq!(parse_integer(b""), Err(NumberError::Empty));
        assert_eq!(parse_integer(b"-"), Err(NumberError::Empty));
    }

    #[test]
    fn integer_skips_non_digits() {
        assert_eq!(parse_integer(b"1.5"), Ok(15));
    }

    #[test]
    fn reals() {
        assert_eq!(parse_real(b"12.5"), Ok(12.5));
        assert_eq!(parse_real(b".5"), Ok(0.5));
        assert_eq!(parse_real(b"5."), Ok(5.0));
        assert_eq!(parse_real(b"-0.25"), Ok(-0.25));
        assert_eq!(parse_real(b"-.75"), Ok(-0.75));
        assert_eq!(parse_real(b"3.14"), Ok(3.14));
        assert_eq!(parse_real(b"0.1"), Ok(0.1));
    }

    #[test]
    fn reals_past_ten_digits() {
        assert_eq!(parse_real(b"123456.7890123"), Ok(123_456.789_012_3));
    }

    #[test]
    fn real_without_digits_is_zero() {
        assert_eq!(parse_real(b"."), Ok(0.0));
    }

    #[test]
    fn real_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_real(huge.as_bytes()), Err(NumberError::Overflow));
    }

    #[test]
    fn real_with_long_fraction() {
        let text = format!("1.{}", "0".repeat(400));
        assert_eq!(parse_real(text.as_bytes()), Ok(1.0));
        let text = format!("-0.{}5", "0".repeat(350));
        assert_eq!(parse_real(text.as_bytes()), Ok(-0.0));
    }

    #[test]
    fn real_is_correctly_rounded() {
        assert_eq!(parse_real(b"9007199254740993.0"), Ok(9_007_199_254_740_992.0));
        assert_eq!(parse_real(b"0.30000000000000004"), Ok(0.300_000_000_000_000_04));
    }

    #[test]
    fn real_negative_without_digits() {
        let zero = parse_real(b"-.").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
    }

    #[test]
    fn real_skips_other_bytes() {
        assert_eq!(parse_real(b"1_2.5.0"), Ok(12.5));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_u32(b"#ff8800"), Ok(0xff88_00ff));
        assert_eq!(parse_hex_u32(b"0xFF8800"), Ok(0xff88_00ff));
        assert_eq!(parse_hex_u32(b"12345678"), Ok(0x1234_56ff));
        assert_eq!(parse_hex_u32(b"a"), Ok(0xa000_00ff));
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert_eq!(parse_hex_u32(b""), Err(NumberError::Empty));
        assert_eq!(parse_hex_u32(b"#"), Err(NumberError::Empty));
        assert_eq!(parse_hex_u32(b"0x"), Err(NumberError::Empty));
        assert_eq!(parse_hex_u32(b"#12345678a"), Err(NumberError::Overflow));
        assert_eq!(parse_hex_u32(b"#ggffff"), Err(NumberError::InvalidDigit(b'g')));
        assert_eq!(parse_hex_u32(b"#ff 00"), Err(NumberError::InvalidDigit(b' ')));
    }

    #[test]
    fn cross_conversion() {
        assert_eq!(Number::Real(-2.75).as_integer(), -2);
        assert_eq!(Number::Real(1e300).as_integer(), i64::MAX);
        assert_eq!(Number::Integer(3).as_real(), 3.0);
    }
}
