// ============================================================================
// Digit Extraction
// Repeated division by ten, shared by the integer and float encoders
// ============================================================================

use super::cell::AsciiCell;

/// An unsigned magnitude that can be peeled into decimal digits.
pub(crate) trait DecimalDigits: Copy {
    /// Number of decimal digits in the value. Zero has one digit.
    fn decimal_len(self) -> usize;

    /// Divide by ten in place and return the remainder.
    fn pop_digit(&mut self) -> u8;
}

macro_rules! impl_decimal_digits {
    ($($t:ty),*) => {
        $(
            impl DecimalDigits for $t {
                #[inline]
                fn decimal_len(self) -> usize {
                    self.checked_ilog10().map_or(1, |log| log as usize + 1)
                }

                #[inline]
                fn pop_digit(&mut self) -> u8 {
                    let digit = (*self % 10) as u8;
                    *self /= 10;
                    digit
                }
            }
        )*
    };
}

impl_decimal_digits!(u64, u128);

/// Fill `out` with the digits of `value`, least significant digit last.
///
/// `out` must be exactly `value.decimal_len()` cells long.
#[inline]
pub(crate) fn write_digits<D: DecimalDigits, C: AsciiCell>(mut value: D, out: &mut [C]) {
    for cell in out.iter_mut().rev() {
        *cell = C::from_ascii(b'0' + value.pop_digit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_len() {
        assert_eq!(0u64.decimal_len(), 1);
        assert_eq!(9u64.decimal_len(), 1);
        assert_eq!(10u64.decimal_len(), 2);
        assert_eq!(u64::MAX.decimal_len(), 20);
        assert_eq!(u128::MAX.decimal_len(), 39);
    }

    #[test]
    fn test_write_digits() {
        let mut out = [0u8; 4];
        write_digits(1729u64, &mut out);
        assert_eq!(&out, b"1729");

        let mut zero = [0u8; 1];
        write_digits(0u128, &mut zero);
        assert_eq!(&zero, b"0");
    }
}
