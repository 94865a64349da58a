// ============================================================================
// Encoding Errors
// Error types for number-to-text encoding
// ============================================================================

use std::fmt;

/// Errors that can occur while encoding a number into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeError {
    /// The buffer cannot hold the sign and the full integer portion
    BufferTooSmall {
        /// Length of the buffer that was supplied
        capacity: usize,
        /// Cells the mandatory portion of the output needs
        required: usize,
    },
}

impl EncodeError {
    #[inline]
    pub(crate) const fn buffer_too_small(capacity: usize, required: usize) -> Self {
        EncodeError::BufferTooSmall { capacity, required }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall { capacity, required } => write!(
                f,
                "buffer too small: {} cells cannot hold the {} cell integer portion",
                capacity, required
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Result type alias for encode operations
pub type EncodeResult<T> = Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EncodeError::buffer_too_small(3, 4).to_string(),
            "buffer too small: 3 cells cannot hold the 4 cell integer portion"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EncodeError::buffer_too_small(3, 4),
            EncodeError::BufferTooSmall {
                capacity: 3,
                required: 4
            }
        );
        assert_ne!(
            EncodeError::buffer_too_small(3, 4),
            EncodeError::buffer_too_small(2, 4)
        );
    }
}
