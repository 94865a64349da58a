// ============================================================================
// Stack-Owned Output
// Encode into a fixed-capacity ArrayString instead of a borrowed buffer
// ============================================================================
//
// Handy when the text has to outlive the buffer it was written into (e.g.
// stored in a struct or returned from a function) without touching the heap.

use crate::encoding::{
    encode_f32_with_precision, encode_f64_with_precision, encode_int, DecimalInt, EncodeResult,
    DOUBLE_PRECISION_DIGITS, SINGLE_PRECISION_DIGITS,
};
use arrayvec::ArrayString;

/// Encode an integer into an `ArrayString` of capacity `N`.
///
/// # Example
/// ```
/// use number_to_chars::stack::int_to_array_string;
///
/// let text = int_to_array_string::<12>(-1729).unwrap();
/// assert_eq!(text.as_str(), "-1729");
/// ```
pub fn int_to_array_string<const N: usize>(
    value: impl DecimalInt,
) -> EncodeResult<ArrayString<N>> {
    let mut buffer = [0u8; N];
    let text = encode_int(value, &mut buffer)?;
    Ok(collect_ascii(text))
}

/// Encode an `f32` with the default budget into an `ArrayString`.
pub fn f32_to_array_string<const N: usize>(value: f32) -> EncodeResult<ArrayString<N>> {
    f32_to_array_string_with_precision(value, SINGLE_PRECISION_DIGITS)
}

/// Encode an `f32` with an explicit budget into an `ArrayString`.
pub fn f32_to_array_string_with_precision<const N: usize>(
    value: f32,
    precision: u32,
) -> EncodeResult<ArrayString<N>> {
    let mut buffer = [0u8; N];
    let text = encode_f32_with_precision(value, &mut buffer, precision)?;
    Ok(collect_ascii(text))
}

/// Encode an `f64` with the default budget into an `ArrayString`.
pub fn f64_to_array_string<const N: usize>(value: f64) -> EncodeResult<ArrayString<N>> {
    f64_to_array_string_with_precision(value, DOUBLE_PRECISION_DIGITS)
}

/// Encode an `f64` with an explicit budget into an `ArrayString`.
pub fn f64_to_array_string_with_precision<const N: usize>(
    value: f64,
    precision: u32,
) -> EncodeResult<ArrayString<N>> {
    let mut buffer = [0u8; N];
    let text = encode_f64_with_precision(value, &mut buffer, precision)?;
    Ok(collect_ascii(text))
}

// text is encoder output: ASCII and at most N bytes long
#[inline]
fn collect_ascii<const N: usize>(text: &[u8]) -> ArrayString<N> {
    let mut out = ArrayString::new();
    for &byte in text {
        out.push(char::from(byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::EncodeError;

    #[test]
    fn test_int_array_string() {
        let text: ArrayString<4> = int_to_array_string(-123).unwrap();
        assert_eq!(text.as_str(), "-123");
        assert!(text.is_full());

        let result: EncodeResult<ArrayString<3>> = int_to_array_string(-123);
        assert_eq!(result, Err(EncodeError::buffer_too_small(3, 4)));
    }

    #[test]
    fn test_float_array_strings() {
        assert_eq!(f32_to_array_string::<16>(2568.521_5).unwrap().as_str(), "2568.521");
        assert_eq!(
            f64_to_array_string::<20>(6283.185307179582).unwrap().as_str(),
            "6283.18530717958"
        );
        assert_eq!(
            f64_to_array_string_with_precision::<20>(0.001, 2).unwrap().as_str(),
            "0.0010"
        );
        assert_eq!(
            f32_to_array_string_with_precision::<8>(-1.5, 0).unwrap().as_str(),
            "-1"
        );
    }
}
