// crates/tidelink-cli/src/cmd/tsunami.rs

use anyhow::{bail, Context};
use clap::Args;
use tidelink_core::composite::tsunami::{TsunamiBurst, BURST_LEN};
use tidelink_core::{CodecConfig, Reading};

#[derive(Args)]
pub struct TsunamiArgs {
    #[arg(long)]
    pub hour: u8,

    #[arg(long)]
    pub minute: u8,

    /// Decimal places of the water level channel
    #[arg(long, default_value_t = 3)]
    pub right_digits: u8,

    /// Six samples, most recent first; "-" or -99999 marks a missing sample
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, num_args = 1..)]
    pub readings: Vec<String>,
}

pub fn run(args: TsunamiArgs, cfg: &CodecConfig) -> anyhow::Result<()> {
    if args.hour > 23 || args.minute > 59 {
        bail!("time out of range: {:02}:{:02}", args.hour, args.minute);
    }
    if args.readings.len() != BURST_LEN {
        bail!("expected {BURST_LEN} readings, got {}", args.readings.len());
    }

    let mut readings = [Reading::missing(args.right_digits); BURST_LEN];
    for (dst, s) in readings.iter_mut().zip(args.readings.iter()) {
        let s = s.trim();
        if s != "-" {
            let v: f64 = s.parse().with_context(|| format!("parse reading {s:?}"))?;
            *dst = Reading::from_host(v, args.right_digits);
        }
    }

    let burst = TsunamiBurst::from_readings(args.hour, args.minute, &readings);
    let fields = burst.encode(cfg);

    for f in fields.fields() {
        println!("{f}");
    }
    println!("T{}", fields.concat());
    Ok(())
}
