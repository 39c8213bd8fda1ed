// crates/tidelink-core/src/pseudo/sentinel.rs

use super::{SignMode, Width};

/// Why a value was replaced by a fixed marker string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Saturation {
    /// Signed field, value above the positive max: `_`, `_?`, `_??`.
    SignedHigh,
    /// Signed field, value below the negative min: `` ` ``, `` `@ ``, `` `@@ ``.
    SignedLow,
    /// Unsigned field, value above the max: `?`, `??`, `???`.
    UnsignedHigh,
    /// Unsigned field, negative value: `` `@@ `` truncated to the width.
    UnsignedNegative,
}

const SIGNED_HIGH: [&str; 3] = ["_", "_?", "_??"];
const SIGNED_LOW: [&str; 3] = ["`", "`@", "`@@"];
const UNSIGNED_HIGH: [&str; 3] = ["?", "??", "???"];

impl Saturation {
    /// Classify an out-of-range value, or `None` if it fits.
    pub fn classify(value: i64, width: Width, mode: SignMode) -> Option<Saturation> {
        match mode {
            SignMode::UnsignedOnly if value < 0 => Some(Saturation::UnsignedNegative),
            SignMode::UnsignedOnly if value > width.max_value(mode) => Some(Saturation::UnsignedHigh),
            SignMode::SignedOverflow if value < width.min_value(mode) => Some(Saturation::SignedLow),
            SignMode::SignedOverflow if value > width.max_value(mode) => Some(Saturation::SignedHigh),
            _ => None,
        }
    }

    pub fn marker(self, width: Width) -> &'static str {
        let i = width.chars() - 1;
        match self {
            Saturation::SignedHigh => SIGNED_HIGH[i],
            Saturation::SignedLow | Saturation::UnsignedNegative => SIGNED_LOW[i],
            Saturation::UnsignedHigh => UNSIGNED_HIGH[i],
        }
    }

    /// Recognize a sentinel literally.
    ///
    /// Only markers that lie outside the representable range for `mode` are
    /// recognized. The unsigned negative marker (`` ` ``, `` `@ ``, `` `@@ ``)
    /// is bit-identical to the legal unsigned values 32, 2048 and 131072, so
    /// an unsigned decoder reads it as a value.
    pub fn recognize(field: &str, mode: SignMode) -> Option<Saturation> {
        let width = Width::try_from(field.len()).ok()?;
        let i = width.chars() - 1;
        match mode {
            SignMode::SignedOverflow if field == SIGNED_HIGH[i] => Some(Saturation::SignedHigh),
            SignMode::SignedOverflow if field == SIGNED_LOW[i] => Some(Saturation::SignedLow),
            SignMode::UnsignedOnly if field == UNSIGNED_HIGH[i] => Some(Saturation::UnsignedHigh),
            _ => None,
        }
    }
}
