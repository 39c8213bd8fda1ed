// crates/tidelink-core/src/pseudo/mod.rs
//
// Pseudobinary scalar codec: 6 bits per printable character, 1..=3
// characters per field (canonical), with saturation sentinels when a
// value does not fit the chosen width.

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod sentinel;
pub mod wide;

pub use decode::{decode, decode_raw, unscale, Decoded};
pub use encode::encode;
pub use sentinel::Saturation;

use crate::error::{Result, TideError};

/// Whether negative values are representable in a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignMode {
    /// Two's complement; both directions saturate to distinct markers.
    SignedOverflow,
    /// Non-negative only; any negative input is itself out of range.
    UnsignedOnly,
}

/// Canonical field width in 6-bit groups (1..=3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Width(u8);

// Per-width limits, indexed by groups-1. Group 63 is reserved in every
// position, which is why the positive maxima stop one short of the
// natural two's complement bound.
const SIGNED_MAX: [i64; 3] = [30, 2_046, 131_070];
const SIGNED_MIN: [i64; 3] = [-31, -2_047, -131_071];
const UNSIGNED_MAX: [i64; 3] = [62, 4_094, 262_142];
const HALF_RANGE: [i64; 3] = [31, 2_047, 131_071];
const SPAN: [i64; 3] = [64, 4_096, 262_144];

impl Width {
    pub const ONE: Width = Width(1);
    pub const TWO: Width = Width(2);
    pub const THREE: Width = Width(3);

    pub const MAX_GROUPS: u8 = 3;

    pub fn new(groups: u8) -> Result<Self> {
        if groups == 0 || groups > Self::MAX_GROUPS {
            return Err(TideError::Validation(format!(
                "field width must be in 1..={}, got {}",
                Self::MAX_GROUPS,
                groups
            )));
        }
        Ok(Width(groups))
    }

    #[inline]
    pub fn groups(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn chars(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn idx(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Largest value encodable without saturating.
    pub fn max_value(self, mode: SignMode) -> i64 {
        match mode {
            SignMode::SignedOverflow => SIGNED_MAX[self.idx()],
            SignMode::UnsignedOnly => UNSIGNED_MAX[self.idx()],
        }
    }

    /// Smallest value encodable without saturating.
    pub fn min_value(self, mode: SignMode) -> i64 {
        match mode {
            SignMode::SignedOverflow => SIGNED_MIN[self.idx()],
            SignMode::UnsignedOnly => 0,
        }
    }

    /// Decoded raw values above this are negative in signed mode.
    pub fn half_range(self) -> i64 {
        HALF_RANGE[self.idx()]
    }

    /// 2^(6*groups): the amount subtracted to recover a negative value.
    pub fn span(self) -> i64 {
        SPAN[self.idx()]
    }

    pub fn fits(self, value: i64, mode: SignMode) -> bool {
        value >= self.min_value(mode) && value <= self.max_value(mode)
    }
}

impl TryFrom<usize> for Width {
    type Error = TideError;

    fn try_from(len: usize) -> Result<Self> {
        let groups = u8::try_from(len)
            .map_err(|_| TideError::Validation(format!("field width too large: {len}")))?;
        Width::new(groups)
    }
}

/// Literal used in place of an encoded field when no sample exists.
///
/// The deployed encoder and the ground-side decoder historically disagreed
/// (`???` vs `///`). Whichever style is chosen, encoder and decoder must
/// share it through one [`CodecConfig`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissingStyle {
    /// `/`, `//`, `///`. The slash is outside the alphabet, so it can never
    /// be confused with a real value.
    #[default]
    Slashes,
    /// `?`, `??`, `???`, as emitted by the legacy logger script. Overlaps
    /// the unsigned overflow sentinel and the signed value -1 at every
    /// width, so a signed -1 (e.g. a level of -0.001 at three right digits)
    /// reads back as missing.
    Legacy,
}

impl MissingStyle {
    pub fn marker(self, width: Width) -> &'static str {
        const SLASHES: &str = "///";
        const LEGACY: &str = "???";
        match self {
            MissingStyle::Slashes => &SLASHES[..width.chars()],
            MissingStyle::Legacy => &LEGACY[..width.chars()],
        }
    }

    pub fn is_marker(self, field: &str) -> bool {
        Width::try_from(field.len())
            .map(|w| field == self.marker(w))
            .unwrap_or(false)
    }
}

/// Shared codec configuration for encoder and decoder.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub missing: MissingStyle,
}

impl CodecConfig {
    pub fn new(missing: MissingStyle) -> Self {
        Self { missing }
    }

    #[inline]
    pub fn missing_marker(&self, width: Width) -> &'static str {
        self.missing.marker(width)
    }
}
