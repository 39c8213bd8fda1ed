// crates/tidelink-cli/src/cmd/mod.rs

use clap::ValueEnum;
use tidelink_core::{CodecConfig, Decoded, MissingStyle, Saturation};

pub mod build;
pub mod decode;
pub mod encode;
pub mod parse;
pub mod sutron_day;
pub mod tsunami;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum MissingArg {
    /// `/`, `//`, `///`
    Slashes,
    /// `?`, `??`, `???` (legacy logger output)
    Legacy,
}

impl From<MissingArg> for CodecConfig {
    fn from(m: MissingArg) -> Self {
        CodecConfig::new(match m {
            MissingArg::Slashes => MissingStyle::Slashes,
            MissingArg::Legacy => MissingStyle::Legacy,
        })
    }
}

/// Operator rendering of a decoded field.
pub fn show_decoded(d: Decoded, right_digits: u8) -> String {
    match d {
        Decoded::Value(v) => format!("{:.*}", right_digits as usize, v),
        Decoded::Missing => "NaN".to_string(),
        Decoded::Saturated(Saturation::SignedHigh) => "overflow-high".to_string(),
        Decoded::Saturated(Saturation::UnsignedHigh) => "overflow-high".to_string(),
        Decoded::Saturated(Saturation::SignedLow) => "overflow-low".to_string(),
        Decoded::Saturated(Saturation::UnsignedNegative) => "negative".to_string(),
    }
}
