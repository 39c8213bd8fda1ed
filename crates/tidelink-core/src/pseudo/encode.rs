// crates/tidelink-core/src/pseudo/encode.rs

use super::alphabet;
use super::sentinel::Saturation;
use super::{SignMode, Width};

/// Bits in the canonical frame (three groups).
pub const FRAME_BITS: u32 = 18;
const FRAME_MASK: u32 = (1 << FRAME_BITS) - 1;

/// Encode a scaled integer into exactly `width` pseudobinary characters.
///
/// Out-of-range values are never wrapped: they come back as the fixed
/// sentinel for `(width, mode)`, see [`Saturation`].
pub fn encode(value: i64, width: Width, mode: SignMode) -> String {
    if let Some(sat) = Saturation::classify(value, width, mode) {
        return sat.marker(width).to_string();
    }

    let frame = frame18(value);
    let groups = [
        ((frame >> 12) & 0x3F) as u8,
        ((frame >> 6) & 0x3F) as u8,
        (frame & 0x3F) as u8,
    ];

    let mut out = String::with_capacity(width.chars());
    for &g in &groups[3 - width.chars()..] {
        out.push(alphabet::symbol(g) as char);
    }
    out
}

/// 18-bit two's complement frame of an already range-checked value.
#[inline]
fn frame18(value: i64) -> u32 {
    if value < 0 {
        let magnitude = (value.unsigned_abs() as u32) & FRAME_MASK;
        ((!magnitude) & FRAME_MASK).wrapping_add(1) & FRAME_MASK
    } else {
        (value as u32) & FRAME_MASK
    }
}
