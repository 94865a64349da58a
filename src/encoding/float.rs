// ============================================================================
// Floating-Point Encoder
// Left-aligned decimal encoding with a significant-digit budget
// ============================================================================
//
// Output is `[-]integer[.fraction]`, written from buffer index 0:
// - every digit of the integer part is written, or the call fails
// - the fraction is a truncated expansion, cut short by the digit budget or
//   the end of the buffer, whichever comes first
// - leading zeros (the lone `0` integer part and fraction zeros in front of
//   the first nonzero digit) are free
//
// f32 values are widened to f64 before any arithmetic, so both precisions
// share one code path.

use super::cell::{write_ascii, AsciiCell};
use super::digits::{write_digits, DecimalDigits};
use super::errors::{EncodeError, EncodeResult};
use super::wide::WideUint;

/// Default significant digits for `f32`.
pub const SINGLE_PRECISION_DIGITS: u32 = 7;

/// Default significant digits for `f64`.
pub const DOUBLE_PRECISION_DIGITS: u32 = 15;

/// Largest precision an `EncoderConfig` accepts. Seventeen digits are enough
/// to tell any two `f64` values apart.
pub const MAX_PRECISION: u32 = 17;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Encode an `f32` with the default budget of 7 significant digits.
///
/// # Example
/// ```
/// use number_to_chars::encode_f32;
///
/// let mut buffer = [0u8; 16];
/// assert_eq!(encode_f32(2568.5215, &mut buffer).unwrap(), b"2568.521");
/// ```
#[inline]
pub fn encode_f32<C: AsciiCell>(value: f32, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
    encode_f32_with_precision(value, buffer, SINGLE_PRECISION_DIGITS)
}

/// Encode an `f32` with an explicit significant-digit budget.
#[inline]
pub fn encode_f32_with_precision<C: AsciiCell>(
    value: f32,
    buffer: &mut [C],
    precision: u32,
) -> EncodeResult<&mut [C]> {
    encode_decimal(f64::from(value), buffer, precision)
}

/// Encode an `f64` with the default budget of 15 significant digits.
///
/// # Example
/// ```
/// use number_to_chars::encode_f64;
///
/// let mut buffer = [0u8; 20];
/// let text = encode_f64(6283.185307179582, &mut buffer).unwrap();
/// assert_eq!(text, b"6283.18530717958");
/// ```
#[inline]
pub fn encode_f64<C: AsciiCell>(value: f64, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
    encode_f64_with_precision(value, buffer, DOUBLE_PRECISION_DIGITS)
}

/// Encode an `f64` with an explicit significant-digit budget.
#[inline]
pub fn encode_f64_with_precision<C: AsciiCell>(
    value: f64,
    buffer: &mut [C],
    precision: u32,
) -> EncodeResult<&mut [C]> {
    encode_decimal(value, buffer, precision)
}

/// Shared core for both float widths.
///
/// # Errors
/// `BufferTooSmall` when the sign plus integer digits (or the `NaN`/`inf`
/// literal) do not fit. Running out of room or budget inside the fraction is
/// not an error.
fn encode_decimal<C: AsciiCell>(
    value: f64,
    buffer: &mut [C],
    precision: u32,
) -> EncodeResult<&mut [C]> {
    if !value.is_finite() {
        return encode_non_finite(value, buffer);
    }

    let capacity = buffer.len();
    let negative = value < 0.0;
    let magnitude = value.abs();
    let sign_len = usize::from(negative);

    let int_part = magnitude.trunc();
    let mut frac = magnitude - int_part;
    let mut remaining = precision as usize;

    let integer = IntegerPart::of(int_part);
    let int_len = integer.len();
    let required = sign_len + int_len;
    if required > capacity {
        tracing::trace!(value, capacity, required, "integer part does not fit buffer");
        return Err(EncodeError::buffer_too_small(capacity, required));
    }

    if negative {
        buffer[0] = C::from_ascii(b'-');
    }
    integer.write(&mut buffer[sign_len..required]);

    // the lone '0' is free, real integer digits are not
    let mut leading_zero = matches!(integer, IntegerPart::Zero);
    if !leading_zero {
        remaining = remaining.saturating_sub(int_len);
    }

    let mut cursor = required;

    // Fractional part: needs room for '.' plus one digit
    if frac > 0.0 && cursor + 1 < capacity && remaining > 0 {
        buffer[cursor] = C::from_ascii(b'.');
        cursor += 1;

        loop {
            frac *= 10.0;
            let digit = frac as u8;
            frac -= f64::from(digit);
            buffer[cursor] = C::from_ascii(b'0' + digit);
            cursor += 1;

            if leading_zero {
                if digit != 0 {
                    leading_zero = false;
                    remaining -= 1;
                }
            } else {
                remaining -= 1;
            }

            if cursor == capacity || remaining == 0 {
                break;
            }
        }
    }

    Ok(&mut buffer[..cursor])
}

/// Integer part of a non-negative finite value, held in the narrowest type
/// that represents it exactly.
#[derive(Clone, Copy)]
enum IntegerPart {
    Zero,
    Word(u64),
    Double(u128),
    Wide(WideUint),
}

impl IntegerPart {
    fn of(int_part: f64) -> Self {
        if int_part == 0.0 {
            IntegerPart::Zero
        } else if int_part < TWO_POW_64 {
            IntegerPart::Word(int_part as u64)
        } else if int_part < TWO_POW_128 {
            IntegerPart::Double(int_part as u128)
        } else {
            IntegerPart::Wide(WideUint::from_integral(int_part))
        }
    }

    fn len(self) -> usize {
        match self {
            IntegerPart::Zero => 1,
            IntegerPart::Word(value) => value.decimal_len(),
            IntegerPart::Double(value) => value.decimal_len(),
            IntegerPart::Wide(value) => value.decimal_len(),
        }
    }

    /// `out` must be exactly `self.len()` cells long.
    fn write<C: AsciiCell>(self, out: &mut [C]) {
        match self {
            IntegerPart::Zero => out[0] = C::from_ascii(b'0'),
            IntegerPart::Word(value) => write_digits(value, out),
            IntegerPart::Double(value) => write_digits(value, out),
            IntegerPart::Wide(value) => write_digits(value, out),
        }
    }
}

fn encode_non_finite<C: AsciiCell>(value: f64, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
    let text: &[u8] = if value.is_nan() {
        b"NaN"
    } else if value.is_sign_negative() {
        b"-inf"
    } else {
        b"inf"
    };

    if text.len() > buffer.len() {
        tracing::trace!(value, capacity = buffer.len(), "non-finite literal does not fit buffer");
        return Err(EncodeError::buffer_too_small(buffer.len(), text.len()));
    }

    write_ascii(buffer, 0, text);
    Ok(&mut buffer[..text.len()])
}
