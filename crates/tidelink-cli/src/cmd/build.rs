// crates/tidelink-cli/src/cmd/build.rs

use anyhow::Context;
use clap::Args;
use tidelink_core::message::{build_uplink, insert_tx_battery};
use tidelink_core::report::render_report;
use tidelink_core::CodecConfig;
use tracing::info;

use crate::io::snapshot;

#[derive(Args)]
pub struct BuildArgs {
    /// Snapshot file (station, time and channel readings)
    #[arg(long)]
    pub snapshot: String,

    /// Write the uplink message here instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Also write the fixed-column text report
    #[arg(long)]
    pub report: Option<String>,

    /// Transmitter battery volts; overrides the snapshot's `battery` record
    #[arg(long)]
    pub battery: Option<f64>,
}

pub fn run(args: BuildArgs, cfg: &CodecConfig) -> anyhow::Result<()> {
    let snap = snapshot::load_snapshot(&args.snapshot)?;

    let mut msg = build_uplink(&snap.header, &snap.groups, cfg);
    if let Some(volts) = args.battery.or(snap.battery) {
        msg = insert_tx_battery(&msg, volts);
    }

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, &msg).with_context(|| format!("write message {path}"))?;
            eprintln!("build ok: out={} chars={}", path, msg.len());
        }
        None => println!("{msg}"),
    }

    if let Some(path) = args.report.as_deref() {
        let report = render_report(&snap.header, &snap.groups);
        std::fs::write(path, report).with_context(|| format!("write report {path}"))?;
        info!(path, "report written");
    }

    Ok(())
}
