// ============================================================================
// Encoding Module
// Allocation-free number-to-text encoding into caller-owned buffers
// ============================================================================
//
// This module provides:
// - encode_int: right-aligned integer encoding
// - encode_f32 / encode_f64: left-aligned float encoding with a
//   significant-digit budget
// - AsciiCell: buffer element types (u8, char)
// - EncodeError: the single BufferTooSmall failure
//
// Design principles:
// - No heap allocation, the output is a re-borrow of the caller's buffer
// - All encoders return Result (no panics)
// - Fractions are truncated, never rounded

mod cell;
mod digits;
mod errors;
mod float;
mod integer;
mod wide;

pub use cell::AsciiCell;
pub use errors::{EncodeError, EncodeResult};
pub use float::{
    encode_f32, encode_f32_with_precision, encode_f64, encode_f64_with_precision,
    DOUBLE_PRECISION_DIGITS, MAX_PRECISION, SINGLE_PRECISION_DIGITS,
};
pub use integer::{encode_int, DecimalInt};
