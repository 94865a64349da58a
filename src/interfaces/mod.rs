// ============================================================================
// Interfaces Module
// Contains the method-call surface over the encode functions
// ============================================================================

mod to_chars;

pub use to_chars::{FloatToChars, ToChars};
