// crates/tidelink-core/src/pseudo/decode.rs

use super::alphabet;
use super::sentinel::Saturation;
use super::{CodecConfig, SignMode, Width};
use crate::error::{Result, TideError};

/// Result of decoding one field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decoded {
    Value(f64),
    /// The field was the configured all-unknown marker.
    Missing,
    /// The field was a saturation sentinel; the true value is out of range.
    Saturated(Saturation),
}

impl Decoded {
    /// The numeric value, if there is one. Missing and saturated fields are
    /// `None`, never zero.
    pub fn value(self) -> Option<f64> {
        match self {
            Decoded::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The value, with NaN standing in for missing or saturated fields.
    pub fn value_or_nan(self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Decoded::Missing)
    }
}

/// Decode a field into a decimal value scaled by `10^-right_digits`.
pub fn decode(field: &str, right_digits: u8, mode: SignMode, cfg: &CodecConfig) -> Result<Decoded> {
    if cfg.missing.is_marker(field) {
        return Ok(Decoded::Missing);
    }
    if let Some(sat) = Saturation::recognize(field, mode) {
        return Ok(Decoded::Saturated(sat));
    }
    let raw = decode_raw(field, mode)?;
    Ok(Decoded::Value(unscale(raw, right_digits)))
}

/// Bit-level inverse of [`super::encode`]: no marker recognition, no scaling.
pub fn decode_raw(field: &str, mode: SignMode) -> Result<i64> {
    let bytes = field.as_bytes();
    let width = Width::try_from(bytes.len())
        .map_err(|_| TideError::malformed(field, format!("length {} not in 1..=3", bytes.len())))?;

    // Dropped leading groups are implicitly '@' (zero).
    let mut raw: i64 = 0;
    for &b in bytes {
        let g = alphabet::group(b)
            .ok_or_else(|| TideError::malformed(field, format!("byte 0x{b:02x} outside alphabet")))?;
        raw = (raw << 6) | g as i64;
    }

    if mode == SignMode::SignedOverflow && raw > width.half_range() {
        raw -= width.span();
    }
    Ok(raw)
}

/// `raw * 10^-right_digits`, dividing so that exact decimals stay exact.
#[inline]
pub fn unscale(raw: i64, right_digits: u8) -> f64 {
    raw as f64 / 10f64.powi(right_digits as i32)
}
