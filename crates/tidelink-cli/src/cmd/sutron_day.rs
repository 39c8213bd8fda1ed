// crates/tidelink-cli/src/cmd/sutron_day.rs

use anyhow::{bail, Context};
use clap::Args;
use tidelink_core::composite::calendar::{day_of_year, encode_sutron_day, sutron_day};

#[derive(Args)]
pub struct SutronDayArgs {
    /// Calendar date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["julian_day", "year"])]
    pub date: Option<String>,

    /// Day of year (1..=366); requires --year
    #[arg(long, requires = "year")]
    pub julian_day: Option<u16>,

    #[arg(long, requires = "julian_day")]
    pub year: Option<i32>,
}

pub fn run(args: SutronDayArgs) -> anyhow::Result<()> {
    let (julian_day, year) = match (args.date.as_deref(), args.julian_day, args.year) {
        (Some(d), _, _) => {
            let (y, m, dd) = crate::io::snapshot::parse_date(d).with_context(|| format!("parse date {d}"))?;
            (day_of_year(y, m, dd)?, y)
        }
        (None, Some(j), Some(y)) => (j, y),
        _ => bail!("either --date or --julian-day with --year is required"),
    };

    let day = sutron_day(julian_day, year);
    println!("{} {}", day, encode_sutron_day(day));
    Ok(())
}
