// ============================================================================
// ToChars Extension Traits
// Method-call syntax for the encoders on numeric primitives
// ============================================================================

use crate::encoding::{
    encode_f32, encode_f32_with_precision, encode_f64, encode_f64_with_precision, encode_int,
    AsciiCell, EncodeResult,
};

/// Encode `self` into a caller-owned buffer.
///
/// Integers use [`encode_int`] (right-aligned), floats use [`encode_f32`] /
/// [`encode_f64`] with their default budgets (left-aligned).
///
/// # Example
/// ```
/// use number_to_chars::ToChars;
///
/// let mut buffer = [0u8; 32];
/// assert_eq!(1729i32.to_chars(&mut buffer).unwrap(), b"1729");
/// assert_eq!(3.141592f32.to_chars(&mut buffer).unwrap(), b"3.141592");
/// ```
pub trait ToChars: Copy {
    /// Encode into `buffer`, returning the written sub-slice
    fn to_chars<C: AsciiCell>(self, buffer: &mut [C]) -> EncodeResult<&mut [C]>;
}

/// Floats with an explicit significant-digit budget.
pub trait FloatToChars: ToChars {
    /// Encode into `buffer` keeping at most `precision` significant digits
    fn to_chars_with_precision<C: AsciiCell>(
        self,
        buffer: &mut [C],
        precision: u32,
    ) -> EncodeResult<&mut [C]>;
}

macro_rules! impl_to_chars_int {
    ($($t:ty),*) => {
        $(
            impl ToChars for $t {
                #[inline]
                fn to_chars<C: AsciiCell>(self, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
                    encode_int(self, buffer)
                }
            }
        )*
    };
}

impl_to_chars_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToChars for f32 {
    #[inline]
    fn to_chars<C: AsciiCell>(self, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
        encode_f32(self, buffer)
    }
}

impl FloatToChars for f32 {
    #[inline]
    fn to_chars_with_precision<C: AsciiCell>(
        self,
        buffer: &mut [C],
        precision: u32,
    ) -> EncodeResult<&mut [C]> {
        encode_f32_with_precision(self, buffer, precision)
    }
}

impl ToChars for f64 {
    #[inline]
    fn to_chars<C: AsciiCell>(self, buffer: &mut [C]) -> EncodeResult<&mut [C]> {
        encode_f64(self, buffer)
    }
}

impl FloatToChars for f64 {
    #[inline]
    fn to_chars_with_precision<C: AsciiCell>(
        self,
        buffer: &mut [C],
        precision: u32,
    ) -> EncodeResult<&mut [C]> {
        encode_f64_with_precision(self, buffer, precision)
    }
}
