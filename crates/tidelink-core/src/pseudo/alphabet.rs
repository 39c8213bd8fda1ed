// crates/tidelink-core/src/pseudo/alphabet.rs
//
// Pseudobinary symbol table.
//
// A 6-bit group g in 0..=62 renders as the byte g + 0x40 ('@'..'~').
// Group 63 is reserved and renders as '?' (0x3F), NOT as 0x7F (DEL).
// Both directions go through explicit tables so the reserved slot can
// never be reintroduced by an arithmetic shortcut.

/// Number of distinct 6-bit groups.
pub const GROUPS: usize = 64;

/// Largest 6-bit group value.
pub const GROUP_MAX: u8 = 63;

/// Encode table: index = group value, entry = printable byte.
pub const SYMBOLS: &[u8; GROUPS] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~?";

const INVALID: u8 = 0xFF;

/// Decode table: index = ASCII byte, entry = group value or INVALID.
const INVERSE: [u8; 128] = build_inverse();

const fn build_inverse() -> [u8; 128] {
    let mut t = [INVALID; 128];
    let mut g = 0;
    while g < GROUPS {
        t[SYMBOLS[g] as usize] = g as u8;
        g += 1;
    }
    t
}

/// Map a 6-bit group to its printable byte. Bits above the low six are ignored.
#[inline]
pub fn symbol(group: u8) -> u8 {
    SYMBOLS[(group & GROUP_MAX) as usize]
}

/// Map a printable byte back to its 6-bit group, or `None` if the byte is
/// outside the alphabet.
#[inline]
pub fn group(sym: u8) -> Option<u8> {
    if sym >= 128 {
        return None;
    }
    match INVERSE[sym as usize] {
        INVALID => None,
        g => Some(g),
    }
}

/// True when `sym` is one of the 64 alphabet bytes.
#[inline]
pub fn is_symbol(sym: u8) -> bool {
    group(sym).is_some()
}
