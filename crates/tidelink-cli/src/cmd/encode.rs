// crates/tidelink-cli/src/cmd/encode.rs

use anyhow::anyhow;
use clap::Args;
use tidelink_core::pseudo::{encode, wide};
use tidelink_core::{CodecConfig, Reading, SignMode, Width};
use tracing::debug;

#[derive(Args)]
pub struct EncodeArgs {
    /// Reading in engineering units (e.g. 4.123); -99999 marks a missing sample
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,

    /// Decimal places kept (the value is scaled by 10^right_digits)
    #[arg(long, default_value_t = 0)]
    pub right_digits: u8,

    /// Field width in characters (1..=3, or up to 10 with --wide)
    #[arg(long, default_value_t = 3)]
    pub width: u8,

    /// Negative values are out of range
    #[arg(long)]
    pub unsigned: bool,

    /// Use the generalized N*6-bit codec
    #[arg(long)]
    pub wide: bool,
}

pub fn run(args: EncodeArgs, cfg: &CodecConfig) -> anyhow::Result<()> {
    let mode = if args.unsigned { SignMode::UnsignedOnly } else { SignMode::SignedOverflow };
    let reading = Reading::from_host(args.value, args.right_digits);

    let field = match reading.scaled() {
        None => {
            let width = Width::new(args.width).map_err(|e| anyhow!("{e}"))?;
            cfg.missing_marker(width).to_string()
        }
        Some(scaled) if args.wide => {
            debug!(scaled, groups = args.width, ?mode, "wide encode");
            wide::encode_wide(scaled, args.width as u32, mode).map_err(|e| anyhow!("{e}"))?
        }
        Some(scaled) => {
            let width = Width::new(args.width).map_err(|e| anyhow!("{e}"))?;
            debug!(scaled, ?width, ?mode, "encode");
            encode(scaled, width, mode)
        }
    };

    println!("{field}");
    Ok(())
}
