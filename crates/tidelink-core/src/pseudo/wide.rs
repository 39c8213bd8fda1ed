// crates/tidelink-core/src/pseudo/wide.rs
//
// Generalized pseudobinary codec: two's complement computed directly at
// 6*groups bits instead of inside a fixed 18-bit frame. Accepts 1..=10
// groups (60 bits keeps every intermediate inside i64).
//
// Bounds for n groups (group 63 stays reserved in the top position):
//   unsigned: 0 ..= 2^(6n) - 2
//   signed:   -(2^(6n-1) - 1) ..= 2^(6n-1) - 2
// Out-of-range values map to the generalized sentinels
//   `?` * n            unsigned high
//   '`' + '@' * (n-1)  signed low / unsigned negative
//   '_' + '?' * (n-1)  signed high
// which coincide with the canonical markers for n <= 3.

use super::alphabet;
use super::sentinel::Saturation;
use super::SignMode;
use crate::error::{Result, TideError};

pub const MAX_GROUPS: u32 = 10;

/// 2^(6*groups). Exponent form: `2^6 * groups` is a different number for
/// every groups > 1.
#[inline]
pub fn frame_span(groups: u32) -> i64 {
    1i64 << (6 * groups)
}

/// Raw values above this decode as negative in signed mode.
#[inline]
pub fn half_range(groups: u32) -> i64 {
    frame_span(groups) / 2 - 1
}

pub fn max_value(groups: u32, mode: SignMode) -> i64 {
    match mode {
        SignMode::UnsignedOnly => frame_span(groups) - 2,
        SignMode::SignedOverflow => frame_span(groups) / 2 - 2,
    }
}

pub fn min_value(groups: u32, mode: SignMode) -> i64 {
    match mode {
        SignMode::UnsignedOnly => 0,
        SignMode::SignedOverflow => -(frame_span(groups) / 2 - 1),
    }
}

fn validate_groups(groups: u32) -> Result<()> {
    if groups == 0 || groups > MAX_GROUPS {
        return Err(TideError::Validation(format!(
            "wide field groups must be in 1..={MAX_GROUPS}, got {groups}"
        )));
    }
    Ok(())
}

pub fn classify(value: i64, groups: u32, mode: SignMode) -> Option<Saturation> {
    match mode {
        SignMode::UnsignedOnly if value < 0 => Some(Saturation::UnsignedNegative),
        SignMode::UnsignedOnly if value > max_value(groups, mode) => Some(Saturation::UnsignedHigh),
        SignMode::SignedOverflow if value < min_value(groups, mode) => Some(Saturation::SignedLow),
        SignMode::SignedOverflow if value > max_value(groups, mode) => Some(Saturation::SignedHigh),
        _ => None,
    }
}

pub fn sentinel(sat: Saturation, groups: u32) -> String {
    let n = groups as usize;
    let (head, fill) = match sat {
        Saturation::UnsignedHigh => ('?', '?'),
        Saturation::SignedHigh => ('_', '?'),
        Saturation::SignedLow | Saturation::UnsignedNegative => ('`', '@'),
    };
    let mut s = String::with_capacity(n);
    s.push(head);
    s.extend(std::iter::repeat(fill).take(n - 1));
    s
}

pub fn encode_wide(value: i64, groups: u32, mode: SignMode) -> Result<String> {
    validate_groups(groups)?;
    if let Some(sat) = classify(value, groups, mode) {
        return Ok(sentinel(sat, groups));
    }

    let bits = 6 * groups;
    let mask: u64 = (1u64 << bits) - 1;
    let frame: u64 = (value as u64) & mask;

    let mut out = String::with_capacity(groups as usize);
    for i in (0..groups).rev() {
        let g = ((frame >> (6 * i)) & 0x3F) as u8;
        out.push(alphabet::symbol(g) as char);
    }
    Ok(out)
}

pub fn decode_wide_raw(field: &str, mode: SignMode) -> Result<i64> {
    let groups = u32::try_from(field.len()).unwrap_or(u32::MAX);
    if groups == 0 || groups > MAX_GROUPS {
        return Err(TideError::malformed(
            field,
            format!("length {} not in 1..={MAX_GROUPS}", field.len()),
        ));
    }

    let mut raw: i64 = 0;
    for &b in field.as_bytes() {
        let g = alphabet::group(b)
            .ok_or_else(|| TideError::malformed(field, format!("byte 0x{b:02x} outside alphabet")))?;
        raw = (raw << 6) | g as i64;
    }

    if mode == SignMode::SignedOverflow && raw > half_range(groups) {
        raw -= frame_span(groups);
    }
    Ok(raw)
}
