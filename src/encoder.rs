// ============================================================================
// Number Encoder
// Encode functions bound to a validated configuration
// ============================================================================

use crate::config::EncoderConfig;
use crate::encoding::{
    encode_f32_with_precision, encode_f64_with_precision, encode_int, AsciiCell, DecimalInt,
    EncodeResult,
};

/// Encoder facade carrying the precision budgets of an [`EncoderConfig`].
///
/// Holds no buffers and no state beyond the config, so one instance can be
/// shared freely between threads.
///
/// # Example
/// ```
/// use number_to_chars::prelude::*;
///
/// let config = EncoderConfig::new().with_double_precision(4);
/// let encoder = NumberEncoder::from_config(config).unwrap();
///
/// let mut buffer = [0u8; 16];
/// assert_eq!(encoder.encode_f64(3.14159, &mut buffer).unwrap(), b"3.141");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberEncoder {
    config: EncoderConfig,
}

impl NumberEncoder {
    /// Encoder with the default budgets (7 and 15 digits)
    pub const fn new() -> Self {
        Self {
            config: EncoderConfig::new(),
        }
    }

    /// Creates an encoder from configuration
    ///
    /// # Returns
    /// * `Result<NumberEncoder, String>` - Configured encoder or validation error
    pub fn from_config(config: EncoderConfig) -> Result<Self, String> {
        if let Err(reason) = config.validate() {
            tracing::warn!(?config, %reason, "rejected encoder configuration");
            return Err(reason);
        }

        tracing::debug!(
            single_precision = config.single_precision,
            double_precision = config.double_precision,
            "number encoder configured"
        );
        Ok(Self { config })
    }

    /// The configuration this encoder applies
    #[inline]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Right-aligned integer encoding; see [`encode_int`].
    #[inline]
    pub fn encode_int<'a, T: DecimalInt, C: AsciiCell>(
        &self,
        value: T,
        buffer: &'a mut [C],
    ) -> EncodeResult<&'a mut [C]> {
        encode_int(value, buffer)
    }

    /// `f32` encoding with the configured single-precision budget.
    #[inline]
    pub fn encode_f32<'a, C: AsciiCell>(
        &self,
        value: f32,
        buffer: &'a mut [C],
    ) -> EncodeResult<&'a mut [C]> {
        encode_f32_with_precision(value, buffer, self.config.single_precision)
    }

    /// `f64` encoding with the configured double-precision budget.
    #[inline]
    pub fn encode_f64<'a, C: AsciiCell>(
        &self,
        value: f64,
        buffer: &'a mut [C],
    ) -> EncodeResult<&'a mut [C]> {
        encode_f64_with_precision(value, buffer, self.config.double_precision)
    }
}
