// crates/tidelink-core/src/channel/mod.rs
//
// Per-channel field layout as tagged variants. Every channel family knows
// its width, sign mode and pre-transform; nothing dispatches on label
// strings past `ChannelKind::from_label`.

pub mod reading;

pub use reading::{scale, Reading, MISSING_VALUE};

use tracing::debug;

use crate::error::Result;
use crate::pseudo::{decode, encode, unscale, CodecConfig, Decoded, Saturation, SignMode, Width};

/// Barometric readings are sent as `mbar*10 - 8000`.
pub const BARO_BIAS: i64 = 8000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// AQT, BWL, MWWL, MWWL2
    WaterLevel,
    /// AQTSTD, BWLSTD, MWSTD, MWSTD2
    StdDev,
    /// AQTOUT, BWLOUT, MWOUT, MWOUT2
    Outliers,
    /// AQT1, AQT2
    AuxTemperature,
    /// AT, WT, CTWT
    Temperature,
    WindSpeed,
    WindDirection,
    WindGust,
    Barometer,
    /// BAT, BBAT
    Battery,
    Conductivity,
    /// DAT
    Datum,
    /// SNS
    StationNumber,
}

/// How one channel's scaled value is laid out in a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub width: Width,
    pub sign: SignMode,
    /// Subtracted before encoding, added back after decoding.
    pub bias: i64,
}

impl FieldSpec {
    pub const fn new(width: Width, sign: SignMode, bias: i64) -> Self {
        Self { width, sign, bias }
    }

    pub fn encode_scaled(&self, scaled: i64) -> String {
        encode(scaled.saturating_sub(self.bias), self.width, self.sign)
    }

    pub fn encode(&self, reading: Reading, cfg: &CodecConfig) -> String {
        match reading.scaled() {
            Some(v) => self.encode_scaled(v),
            None => cfg.missing_marker(self.width).to_string(),
        }
    }

    pub fn decode(&self, field: &str, right_digits: u8, cfg: &CodecConfig) -> Result<Decoded> {
        Ok(match decode(field, 0, self.sign, cfg)? {
            Decoded::Value(raw) => Decoded::Value(unscale(raw as i64 + self.bias, right_digits)),
            other => other,
        })
    }
}

const SIGNED: SignMode = SignMode::SignedOverflow;
const UNSIGNED: SignMode = SignMode::UnsignedOnly;

impl ChannelKind {
    pub const fn spec(self) -> FieldSpec {
        use ChannelKind::*;
        match self {
            WaterLevel | Conductivity | Datum => FieldSpec::new(Width::THREE, SIGNED, 0),
            AuxTemperature | Temperature | StationNumber => FieldSpec::new(Width::TWO, SIGNED, 0),
            StdDev | WindSpeed | WindDirection | WindGust | Battery => {
                FieldSpec::new(Width::TWO, UNSIGNED, 0)
            }
            Barometer => FieldSpec::new(Width::TWO, UNSIGNED, BARO_BIAS),
            Outliers => FieldSpec::new(Width::ONE, UNSIGNED, 0),
        }
    }

    #[inline]
    pub const fn width(self) -> Width {
        self.spec().width
    }

    /// Map a logger channel label to its kind.
    pub fn from_label(label: &str) -> Option<ChannelKind> {
        use ChannelKind::*;
        Some(match label {
            "AQT" | "BWL" | "MWWL" | "MWWL2" => WaterLevel,
            "AQTSTD" | "BWLSTD" | "MWSTD" | "MWSTD2" => StdDev,
            "AQTOUT" | "BWLOUT" | "MWOUT" | "MWOUT2" => Outliers,
            "AQT1" | "AQT2" => AuxTemperature,
            "AT" | "WT" | "CTWT" => Temperature,
            "WS" | "WS2" => WindSpeed,
            "WD" | "WD2" => WindDirection,
            "WG" | "WG2" => WindGust,
            "BARO" => Barometer,
            "BAT" | "BBAT" => Battery,
            "COND" => Conductivity,
            "DAT" => Datum,
            "SNS" => StationNumber,
            _ => return None,
        })
    }
}

/// Encode one channel reading, logging when the value had to be replaced
/// by a marker.
pub fn encode_channel(kind: ChannelKind, reading: Reading, cfg: &CodecConfig) -> String {
    let spec = kind.spec();
    let Some(scaled) = reading.scaled() else {
        debug!(?kind, "missing sample");
        return cfg.missing_marker(spec.width).to_string();
    };
    let biased = scaled.saturating_sub(spec.bias);
    if let Some(sat) = Saturation::classify(biased, spec.width, spec.sign) {
        debug!(?kind, value = biased, ?sat, "value saturated");
    }
    spec.encode_scaled(scaled)
}

/// Decode one channel field back to engineering units.
pub fn decode_channel(
    kind: ChannelKind,
    field: &str,
    right_digits: u8,
    cfg: &CodecConfig,
) -> Result<Decoded> {
    kind.spec().decode(field, right_digits, cfg)
}
