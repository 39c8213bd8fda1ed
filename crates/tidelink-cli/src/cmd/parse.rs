// crates/tidelink-cli/src/cmd/parse.rs

use anyhow::anyhow;
use clap::Args;
use tidelink_core::message::{parse_uplink, ParseLayout};
use tidelink_core::CodecConfig;

use super::show_decoded;

#[derive(Args)]
pub struct ParseArgs {
    /// Received uplink message
    #[arg(long, allow_hyphen_values = true)]
    pub msg: String,

    #[arg(long, default_value_t = 8)]
    pub station_id_len: usize,

    /// Message carries no DAT field
    #[arg(long)]
    pub no_dat: bool,

    /// Message carries no SNS field
    #[arg(long)]
    pub no_sns: bool,

    /// No transmitter battery field after the last space
    #[arg(long)]
    pub no_tx_battery: bool,

    /// Decimal places of the tsunami water level channel
    #[arg(long, default_value_t = 3)]
    pub tsunami_right_digits: u8,
}

pub fn run(args: ParseArgs, cfg: &CodecConfig) -> anyhow::Result<()> {
    let layout = ParseLayout {
        station_id_len: args.station_id_len,
        datum: !args.no_dat,
        station_number: !args.no_sns,
        tx_battery: !args.no_tx_battery,
    };
    let parsed = parse_uplink(&args.msg, &layout).map_err(|e| anyhow!("{e}"))?;

    println!("station {}", parsed.station_id);
    for f in parsed.fields() {
        // Raw counts: right digits are a per-channel setting the message
        // does not carry.
        let d = f.decode(0, cfg).map_err(|e| anyhow!("{}: {e}", f.label))?;
        println!("{:<16} {:<4} {}", f.label, f.field, show_decoded(d, 0));
    }

    let rd = args.tsunami_right_digits;
    for burst in parsed.groups.iter().filter_map(|g| g.tsunami()) {
        let values = burst.decode(rd, cfg).map_err(|e| anyhow!("{e}"))?;
        let shown: Vec<String> = values.iter().map(|v| show_decoded(*v, rd)).collect();
        println!("tsunami {}", shown.join(" "));
    }
    Ok(())
}
