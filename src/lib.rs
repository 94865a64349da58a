// ============================================================================
// Number To Chars Library
// Allocation-free decimal encoding of integers and floats into caller buffers
// ============================================================================

//! # Number To Chars
//!
//! Writes the decimal text of an integer or floating-point value straight into
//! a buffer the caller owns and hands back the exact sub-slice that was
//! written.
//!
//! ## Features
//!
//! - **No heap allocation**: output is a re-borrow of the caller's buffer
//! - **Integers** are right-aligned at the end of the buffer
//! - **Floats** are left-aligned and truncated to a significant-digit budget
//!   (7 for `f32`, 15 for `f64` by default); leading zeros are free
//! - **Byte or char buffers** via [`AsciiCell`]
//! - A single failure mode, [`EncodeError::BufferTooSmall`], when the sign and
//!   integer digits do not fit
//!
//! ## Example
//!
//! ```rust
//! use number_to_chars::prelude::*;
//!
//! let mut buffer = [0u8; 32];
//!
//! let int_text = encode_int(1729, &mut buffer).unwrap();
//! assert_eq!(int_text, b"1729");
//!
//! let float_text = encode_f32(3.141592, &mut buffer).unwrap();
//! assert_eq!(float_text, b"3.141592");
//!
//! let double_text = encode_f64(1.61803398874989, &mut buffer).unwrap();
//! assert_eq!(double_text, b"1.61803398874989");
//!
//! // Fractions that do not fit are dropped, integer digits never are
//! let mut small = [0u8; 5];
//! assert_eq!(encode_f32(1234.5678, &mut small).unwrap(), b"1234");
//! assert!(encode_int(123456, &mut small).is_err());
//! ```

pub mod config;
pub mod encoder;
pub mod encoding;
pub mod interfaces;
pub mod stack;

pub use config::EncoderConfig;
pub use encoder::NumberEncoder;
pub use encoding::{
    encode_f32, encode_f32_with_precision, encode_f64, encode_f64_with_precision, encode_int,
    AsciiCell, DecimalInt, EncodeError, EncodeResult, DOUBLE_PRECISION_DIGITS, MAX_PRECISION,
    SINGLE_PRECISION_DIGITS,
};
pub use interfaces::{FloatToChars, ToChars};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::EncoderConfig;
    pub use crate::encoder::NumberEncoder;
    pub use crate::encoding::{
        encode_f32, encode_f32_with_precision, encode_f64, encode_f64_with_precision, encode_int,
        AsciiCell, DecimalInt, EncodeError, EncodeResult,
    };
    pub use crate::interfaces::{FloatToChars, ToChars};
}
