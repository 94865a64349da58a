// ============================================================================
// Wide Integer Parts
// Exact digits for f64 integer parts that overflow u128
// ============================================================================
//
// An f64 at or above 2^128 is always an integer: mantissa × 2^shift with
// shift >= 76. It is expanded into little-endian 32-bit limbs held inline
// so digit extraction stays allocation-free.

use super::digits::DecimalDigits;

/// Enough 32-bit limbs for any finite f64 (top bit index 1023).
const LIMBS: usize = 32;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Fixed-capacity unsigned integer used only for digit extraction.
#[derive(Clone, Copy)]
pub(crate) struct WideUint {
    limbs: [u32; LIMBS],
    /// Number of significant limbs; zero means the value is zero
    len: usize,
}

impl WideUint {
    /// Expand a finite, integral, non-negative f64 whose binary exponent puts
    /// every mantissa bit above the binary point.
    pub(crate) fn from_integral(value: f64) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0 && value.fract() == 0.0);

        let bits = value.to_bits();
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
        let mut mantissa = bits & ((1u64 << MANTISSA_BITS) - 1);
        if biased != 0 {
            mantissa |= 1u64 << MANTISSA_BITS;
        }

        let mut wide = Self {
            limbs: [0; LIMBS],
            len: 0,
        };
        if mantissa == 0 {
            return wide;
        }

        let shift = (biased - EXPONENT_BIAS).max(0) as u32;
        let word = (shift / 32) as usize;
        let placed = u128::from(mantissa) << (shift % 32);

        for i in 0..3 {
            if word + i < LIMBS {
                wide.limbs[word + i] = (placed >> (32 * i)) as u32;
            }
        }
        wide.trim(LIMBS);
        wide
    }

    #[inline]
    fn trim(&mut self, from: usize) {
        self.len = from;
        while self.len > 0 && self.limbs[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}

impl DecimalDigits for WideUint {
    fn decimal_len(self) -> usize {
        let mut probe = self;
        let mut count = 0;
        loop {
            probe.pop_digit();
            count += 1;
            if probe.len == 0 {
                return count;
            }
        }
    }

    fn pop_digit(&mut self) -> u8 {
        let mut rem = 0u64;
        for limb in self.limbs[..self.len].iter_mut().rev() {
            let current = (rem << 32) | u64::from(*limb);
            *limb = (current / 10) as u32;
            rem = current % 10;
        }
        self.trim(self.len);
        rem as u8
    }
}
