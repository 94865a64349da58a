// ============================================================================
// Character Cells
// Element types a caller may hand in as an output buffer
// ============================================================================

/// A single cell of an output buffer.
///
/// The encoders only ever write ASCII (`0`-`9`, `-`, `.`, and the letters of
/// `NaN`/`inf`), so any type that can hold an ASCII byte can back a buffer.
pub trait AsciiCell: Copy {
    /// Build a cell from an ASCII byte.
    fn from_ascii(byte: u8) -> Self;
}

impl AsciiCell for u8 {
    #[inline(always)]
    fn from_ascii(byte: u8) -> Self {
        byte
    }
}

impl AsciiCell for char {
    #[inline(always)]
    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }
}

/// Write an ASCII literal starting at `start`. The caller checks the bounds.
#[inline]
pub(crate) fn write_ascii<C: AsciiCell>(buffer: &mut [C], start: usize, text: &[u8]) {
    for (cell, &byte) in buffer[start..start + text.len()].iter_mut().zip(text) {
        *cell = C::from_ascii(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_cells() {
        let mut buffer = [0u8; 6];
        write_ascii(&mut buffer, 1, b"-inf");
        assert_eq!(&buffer, b"\0-inf\0");
    }

    #[test]
    fn test_char_cells() {
        let mut buffer = ['\0'; 3];
        write_ascii(&mut buffer, 0, b"NaN");
        assert_eq!(buffer, ['N', 'a', 'N']);
    }
}
