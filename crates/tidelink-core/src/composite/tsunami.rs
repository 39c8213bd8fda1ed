// crates/tidelink-core/src/composite/tsunami.rs
//
// Tsunami burst: six water-level samples taken seconds apart, packed as
//   hour(1) minute(1) offset(1) v0(2) v1(2) v2(2) v3(2) v4(2) v5(2)
// where offset = floor(min / 250) and each vi is the sample minus
// offset * 250. All splits use floor semantics (div_euclid/rem_euclid)
// so negative samples straddling a block boundary compress exactly.

use tracing::warn;

use crate::channel::Reading;
use crate::composite::calendar::{encode_hour, encode_minute};
use crate::error::{Result, TideError};
use crate::pseudo::{decode, encode, unscale, CodecConfig, Decoded, SignMode, Width};

/// Baseline block size in scaled units.
pub const BLOCK: i64 = 250;

/// Samples per burst.
pub const BURST_LEN: usize = 6;

/// Encoded characters per burst (without the `T` marker).
pub const ENCODED_LEN: usize = 3 + 2 * BURST_LEN;

/// One reporting cycle's burst. Samples are scaled integers, most recent
/// first; `None` marks a missing sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TsunamiBurst {
    pub hour: u8,
    pub minute: u8,
    pub samples: [Option<i64>; BURST_LEN],
}

/// Shared-baseline form of a complete burst.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Compressed {
    pub offset: i64,
    pub values: [i64; BURST_LEN],
}

impl Compressed {
    pub fn expand(&self) -> [i64; BURST_LEN] {
        self.values.map(|v| self.offset.saturating_mul(BLOCK).saturating_add(v))
    }
}

impl TsunamiBurst {
    pub fn new(hour: u8, minute: u8, samples: [Option<i64>; BURST_LEN]) -> Self {
        Self { hour, minute, samples }
    }

    /// Build from host readings, scaling each by its right digits.
    pub fn from_readings(hour: u8, minute: u8, readings: &[Reading; BURST_LEN]) -> Self {
        Self::new(hour, minute, readings.map(|r| r.scaled()))
    }

    /// `None` when any sample is missing.
    pub fn compress(&self) -> Option<Compressed> {
        let mut samples = [0i64; BURST_LEN];
        for (dst, src) in samples.iter_mut().zip(self.samples.iter()) {
            *dst = (*src)?;
        }

        let min = samples.iter().copied().min()?;
        let offset = min.div_euclid(BLOCK);
        // Every true value is >= 0; one that does not fit i64 saturates high
        // and encodes as the width-2 high marker.
        let base = offset.checked_mul(BLOCK);
        let values = samples.map(|r| base.and_then(|b| r.checked_sub(b)).unwrap_or(i64::MAX));
        Some(Compressed { offset, values })
    }

    pub fn encode(&self, cfg: &CodecConfig) -> TsunamiFields {
        let Some(c) = self.compress() else {
            return TsunamiFields::missing(cfg);
        };

        let offset = encode(c.offset, Width::ONE, SignMode::SignedOverflow);
        if !Width::ONE.fits(c.offset, SignMode::SignedOverflow) {
            warn!(offset = c.offset, field = %offset, "tsunami offset saturated");
        }
        let values = c.values.map(|v| {
            let f = encode(v, Width::TWO, SignMode::SignedOverflow);
            if !Width::TWO.fits(v, SignMode::SignedOverflow) {
                warn!(value = v, field = %f, "tsunami sample spread exceeds field range");
            }
            f
        });

        TsunamiFields {
            hour: encode_hour(self.hour),
            minute: encode_minute(self.minute),
            offset,
            values,
        }
    }
}

/// The nine encoded fields of a burst, in transmission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TsunamiFields {
    pub hour: String,
    pub minute: String,
    pub offset: String,
    pub values: [String; BURST_LEN],
}

impl TsunamiFields {
    /// Every field replaced by its width's missing marker.
    pub fn missing(cfg: &CodecConfig) -> Self {
        let one = cfg.missing_marker(Width::ONE).to_string();
        let two = cfg.missing_marker(Width::TWO);
        Self {
            hour: one.clone(),
            minute: one.clone(),
            offset: one,
            values: std::array::from_fn(|_| two.to_string()),
        }
    }

    /// Split an encoded burst (without the `T` marker) into its fields.
    pub fn split(encoded: &str) -> Result<Self> {
        if encoded.len() != ENCODED_LEN || !encoded.is_ascii() {
            return Err(TideError::MessageFormat(format!(
                "tsunami burst must be {ENCODED_LEN} ascii chars, got {:?}",
                encoded
            )));
        }
        let at = |start: usize, len: usize| encoded[start..start + len].to_string();
        Ok(Self {
            hour: at(0, 1),
            minute: at(1, 1),
            offset: at(2, 1),
            values: std::array::from_fn(|i| at(3 + 2 * i, 2)),
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        [self.hour.as_str(), self.minute.as_str(), self.offset.as_str()]
            .into_iter()
            .chain(self.values.iter().map(String::as_str))
    }

    pub fn concat(&self) -> String {
        self.fields().collect()
    }

    /// Reverse the baseline compression: `offset * 250 + value`, scaled by
    /// `10^-right_digits`.
    pub fn decode(&self, right_digits: u8, cfg: &CodecConfig) -> Result<[Decoded; BURST_LEN]> {
        let offset = match decode(&self.offset, 0, SignMode::SignedOverflow, cfg)? {
            Decoded::Value(v) => v as i64,
            other => return Ok([other; BURST_LEN]),
        };

        let mut out = [Decoded::Missing; BURST_LEN];
        for (dst, field) in out.iter_mut().zip(self.values.iter()) {
            *dst = match decode(field, 0, SignMode::SignedOverflow, cfg)? {
                Decoded::Value(v) => Decoded::Value(unscale(offset * BLOCK + v as i64, right_digits)),
                other => other,
            };
        }
        Ok(out)
    }
}
