// ============================================================================
// Integer Encoder
// Right-aligned decimal encoding of primitive integers
// ============================================================================

use super::cell::AsciiCell;
use super::digits::{write_digits, DecimalDigits};
use super::errors::{EncodeError, EncodeResult};

/// A primitive integer the integer encoder accepts.
///
/// Implemented for every signed and unsigned width up to 64 bits (and the
/// pointer-sized ones). The magnitude is taken with `unsigned_abs`, so
/// `i64::MIN` and friends encode without overflow.
pub trait DecimalInt: Copy {
    /// Split into a sign flag and an unsigned magnitude.
    fn sign_and_magnitude(self) -> (bool, u64);
}

macro_rules! impl_decimal_int_signed {
    ($($t:ty),*) => {
        $(
            impl DecimalInt for $t {
                #[inline(always)]
                fn sign_and_magnitude(self) -> (bool, u64) {
                    (self < 0, self.unsigned_abs() as u64)
                }
            }
        )*
    };
}

macro_rules! impl_decimal_int_unsigned {
    ($($t:ty),*) => {
        $(
            impl DecimalInt for $t {
                #[inline(always)]
                fn sign_and_magnitude(self) -> (bool, u64) {
                    (false, self as u64)
                }
            }
        )*
    };
}

impl_decimal_int_signed!(i8, i16, i32, i64, isize);
impl_decimal_int_unsigned!(u8, u16, u32, u64, usize);

/// Encode an integer into the END of `buffer`.
///
/// Returns the slice of `buffer` holding exactly the written characters: an
/// optional `-` followed by the digits. Cells in front of the returned slice
/// are left untouched.
///
/// # Errors
/// Returns `BufferTooSmall` if the digits plus sign do not fit. Nothing is
/// written in that case.
///
/// # Example
/// ```
/// use number_to_chars::encode_int;
///
/// let mut buffer = [b' '; 8];
/// let text = encode_int(-123, &mut buffer).unwrap();
/// assert_eq!(text, b"-123");
/// assert_eq!(&buffer, b"    -123");
/// ```
pub fn encode_int<T: DecimalInt, C: AsciiCell>(
    value: T,
    buffer: &mut [C],
) -> EncodeResult<&mut [C]> {
    let (negative, magnitude) = value.sign_and_magnitude();
    let capacity = buffer.len();
    let required = magnitude.decimal_len() + usize::from(negative);

    if required > capacity {
        tracing::trace!(capacity, required, "integer does not fit buffer");
        return Err(EncodeError::buffer_too_small(capacity, required));
    }

    let start = capacity - required;
    if negative {
        buffer[start] = C::from_ascii(b'-');
    }
    write_digits(magnitude, &mut buffer[start + usize::from(negative)..]);

    Ok(&mut buffer[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_positive() {
        let mut buffer = [0u8; 8];
        let result = encode_int(123, &mut buffer).unwrap();
        assert_eq!(result, b"123");
        assert_eq!(&buffer, b"\0\0\0\0\0123");
    }

    #[test]
    fn test_negative() {
        let mut buffer = [0u8; 8];
        let result = encode_int(-123, &mut buffer).unwrap();
        assert_eq!(result, b"-123");
        assert_eq!(&buffer, b"\0\0\0\0-123");
    }

    #[test]
    fn test_zero() {
        let mut buffer = [0u8; 8];
        let result = encode_int(-0, &mut buffer).unwrap();
        assert_eq!(result, b"0");
        assert_eq!(buffer, [0, 0, 0, 0, 0, 0, 0, b'0']);

        let mut single = [0u8; 1];
        assert_eq!(encode_int(0u8, &mut single).unwrap(), b"0");
    }

    #[test]
    fn test_negative_fills_buffer() {
        let mut buffer = [0u8; 8];
        let result = encode_int(-1234567, &mut buffer).unwrap();
        assert_eq!(result, b"-1234567");
        assert_eq!(&buffer, b"-1234567");
    }

    #[test]
    fn test_more_digits_than_buffer() {
        let mut buffer = [0u8; 3];
        assert_eq!(
            encode_int(1234, &mut buffer),
            Err(EncodeError::BufferTooSmall {
                capacity: 3,
                required: 4
            })
        );
        // a failed call leaves the buffer alone
        assert_eq!(&buffer, b"\0\0\0");
    }

    #[test]
    fn test_no_room_for_sign() {
        let mut buffer = [0u8; 3];
        assert_eq!(
            encode_int(-123, &mut buffer),
            Err(EncodeError::buffer_too_small(3, 4))
        );
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer: [u8; 0] = [];
        assert_eq!(
            encode_int(0, &mut buffer),
            Err(EncodeError::buffer_too_small(0, 1))
        );
    }

    #[test]
    fn test_minimum_values() {
        let mut buffer = [0u8; 24];
        assert_eq!(encode_int(i8::MIN, &mut buffer).unwrap(), b"-128");
        assert_eq!(encode_int(i32::MIN, &mut buffer).unwrap(), b"-2147483648");
        assert_eq!(
            encode_int(i64::MIN, &mut buffer).unwrap(),
            b"-9223372036854775808"
        );
        assert_eq!(
            encode_int(u64::MAX, &mut buffer).unwrap(),
            b"18446744073709551615"
        );
    }

    #[test]
    fn test_char_buffer() {
        let mut buffer = ['\0'; 6];
        let result = encode_int(-42i16, &mut buffer).unwrap();
        assert_eq!(result, ['-', '4', '2']);
        assert_eq!(buffer, ['\0', '\0', '\0', '-', '4', '2']);
    }

    #[test]
    fn test_leading_cells_untouched() {
        let mut buffer = [b'x'; 6];
        encode_int(77, &mut buffer).unwrap();
        assert_eq!(&buffer, b"xxxx77");
    }

    fn render(value: i64) -> String {
        let mut buffer = [0u8; 20];
        let text = encode_int(value, &mut buffer).unwrap();
        String::from_utf8(text.to_vec()).unwrap()
    }

    quickcheck! {
        fn qc_parses_back(value: i64) -> bool {
            render(value).parse::<i64>() == Ok(value)
        }

        fn qc_matches_display(value: i32) -> bool {
            render(i64::from(value)) == value.to_string()
        }

        fn qc_exact_fit_boundary(value: i64) -> bool {
            let len = value.to_string().len();
            let mut exact = vec![0u8; len];
            let mut short = vec![0u8; len - 1];
            encode_int(value, &mut exact).map(|s| s.len()) == Ok(len)
                && encode_int(value, &mut short)
                    == Err(EncodeError::buffer_too_small(len - 1, len))
        }
    }
}
