// crates/tidelink-core/src/composite/redundant.rs

use crate::channel::Reading;
use crate::pseudo::{encode, CodecConfig, SignMode, Width};

/// Backup value of a primary channel: three characters, signed, or the
/// three-character missing marker when no backup sample exists.
pub fn encode_redundant(reading: Reading, cfg: &CodecConfig) -> String {
    match reading.scaled() {
        Some(v) => encode(v, Width::THREE, SignMode::SignedOverflow),
        None => cfg.missing_marker(Width::THREE).to_string(),
    }
}
