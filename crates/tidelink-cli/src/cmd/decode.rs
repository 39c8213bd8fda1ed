// crates/tidelink-cli/src/cmd/decode.rs

use anyhow::anyhow;
use clap::Args;
use tidelink_core::pseudo::{decode, unscale, wide};
use tidelink_core::{CodecConfig, Decoded, SignMode};

use super::show_decoded;

#[derive(Args)]
pub struct DecodeArgs {
    /// Encoded field, e.g. "@Ab"
    #[arg(long, allow_hyphen_values = true)]
    pub field: String,

    /// Decimal places of the channel
    #[arg(long, default_value_t = 0)]
    pub right_digits: u8,

    /// Field was encoded unsigned
    #[arg(long)]
    pub unsigned: bool,

    /// Field uses the generalized N*6-bit codec
    #[arg(long)]
    pub wide: bool,
}

pub fn run(args: DecodeArgs, cfg: &CodecConfig) -> anyhow::Result<()> {
    let mode = if args.unsigned { SignMode::UnsignedOnly } else { SignMode::SignedOverflow };

    let decoded = if args.wide {
        let raw = wide::decode_wide_raw(&args.field, mode).map_err(|e| anyhow!("{e}"))?;
        Decoded::Value(unscale(raw, args.right_digits))
    } else {
        decode(&args.field, args.right_digits, mode, cfg).map_err(|e| anyhow!("{e}"))?
    };

    println!("{}", show_decoded(decoded, args.right_digits));
    Ok(())
}
