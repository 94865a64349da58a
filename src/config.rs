// ============================================================================
// Encoder Configuration
// Precision budgets for the configured encoder facade
// ============================================================================

use crate::encoding::{DOUBLE_PRECISION_DIGITS, MAX_PRECISION, SINGLE_PRECISION_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant-digit budgets used by [`NumberEncoder`](crate::NumberEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Budget for `f32` values
    pub single_precision: u32,

    /// Budget for `f64` values
    pub double_precision: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderConfig {
    /// Configuration with the default budgets (7 and 15 digits)
    pub const fn new() -> Self {
        Self {
            single_precision: SINGLE_PRECISION_DIGITS,
            double_precision: DOUBLE_PRECISION_DIGITS,
        }
    }

    /// Builder method: Set the `f32` budget
    pub fn with_single_precision(mut self, digits: u32) -> Self {
        self.single_precision = digits;
        self
    }

    /// Builder method: Set the `f64` budget
    pub fn with_double_precision(mut self, digits: u32) -> Self {
        self.double_precision = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.single_precision > MAX_PRECISION {
            return Err(format!(
                "Single precision must be at most {} digits, got {}",
                MAX_PRECISION, self.single_precision
            ));
        }

        if self.double_precision > MAX_PRECISION {
            return Err(format!(
                "Double precision must be at most {} digits, got {}",
                MAX_PRECISION, self.double_precision
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl EncoderConfig {
    /// Enough digits to distinguish any two values of each width
    /// - f32: 9 digits
    /// - f64: 17 digits
    pub const fn round_trip() -> Self {
        Self {
            single_precision: 9,
            double_precision: 17,
        }
    }

    /// Integer part only; fractions are always dropped
    pub const fn integers_only() -> Self {
        Self {
            single_precision: 0,
            double_precision: 0,
        }
    }
}

#[cfg(feature = "serde")]
impl EncoderConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}
