// crates/tidelink-cli/src/main.rs

use clap::{Parser, Subcommand};
use tidelink_core::CodecConfig;
use tracing::Level;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "tidelink-cli")]
#[command(about = "Pseudobinary telemetry codec tools", long_about = None)]
pub struct Cli {
    /// Missing-data marker style shared by encoder and decoder
    #[arg(long, value_enum, global = true, default_value_t = cmd::MissingArg::Slashes)]
    pub missing_style: cmd::MissingArg,

    /// Log at DEBUG instead of WARN
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode one reading into a pseudobinary field
    Encode(cmd::encode::EncodeArgs),

    /// Decode one pseudobinary field
    Decode(cmd::decode::DecodeArgs),

    /// Day counter (days since 1984-12-31, mod 4096) and its field
    SutronDay(cmd::sutron_day::SutronDayArgs),

    /// Encode a six-sample tsunami burst
    Tsunami(cmd::tsunami::TsunamiArgs),

    /// Build the uplink message (and optionally the report) from a snapshot file
    Build(cmd::build::BuildArgs),

    /// Split a received uplink message into labelled fields
    Parse(cmd::parse::ParseArgs),
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg: CodecConfig = cli.missing_style.into();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args, &cfg),
        Commands::Decode(args) => cmd::decode::run(args, &cfg),
        Commands::SutronDay(args) => cmd::sutron_day::run(args),
        Commands::Tsunami(args) => cmd::tsunami::run(args, &cfg),
        Commands::Build(args) => cmd::build::run(args, &cfg),
        Commands::Parse(args) => cmd::parse::run(args, &cfg),
    }
}
