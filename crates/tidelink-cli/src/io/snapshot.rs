// crates/tidelink-cli/src/io/snapshot.rs
//
// Station snapshot file: one record per line, '#' starts a comment.
// Readings are written `value:right_digits`, or `-` / `-:right_digits`
// for a missing sample; -99999 is also treated as missing.
//
//   station 99999991
//   time 2022-08-09 14:40:35
//   dat 12.345:3
//   sns 7:0
//   mwwl 4.123:3 0.012:3 3:0 4.120:3      level std out redundant
//   aqt 4.1:3 0.01:3 2:0 21.5:1 21.7:1 4.1:3
//   bwl 4.0:3 0.02:3 1:0 -
//   wind 3.2:1 270:0 5.1:1
//   at 21.5:1 | wt .. | ctwt .. | baro 1013.2:1 | cond 35.12:2
//   bat 12.6:2 | bbat 12.4:2
//   tsunami 14:36 4.123:3 4.120:3 4.118:3 4.121:3 4.119:3 4.122:3
//   battery 12.9                             transmitter volts

use anyhow::{anyhow, bail, Context, Result};
use tidelink_core::composite::Timestamp;
use tidelink_core::message::{BatteryKind, Group, Header, TemperatureProbe, WaterLevelSensor};
use tidelink_core::Reading;

/// Everything needed to render one reporting cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub header: Header,
    pub groups: Vec<Group>,
    pub battery: Option<f64>,
}

pub fn load_snapshot(path: &str) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read snapshot {path}"))?;
    parse_snapshot(&text).with_context(|| format!("parse snapshot {path}"))
}

pub fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let mut station: Option<String> = None;
    let mut time: Option<Timestamp> = None;
    let mut datum = None;
    let mut station_number = None;
    let mut groups = Vec::new();
    let mut battery = None;

    for (n, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut toks = line.split_whitespace();
        let Some(key) = toks.next() else { continue };
        let args: Vec<&str> = toks.collect();

        let rec = parse_record(key, &args, &mut station, &mut time)
            .with_context(|| format!("line {}: {line}", n + 1))?;
        match rec {
            Record::None => {}
            Record::Datum(r) => datum = Some(r),
            Record::StationNumber(r) => station_number = Some(r),
            Record::Group(g) => groups.push(g),
            Record::Battery(v) => battery = Some(v),
        }
    }

    let station_id = station.ok_or_else(|| anyhow!("missing `station` record"))?;
    let time = time.ok_or_else(|| anyhow!("missing `time` record"))?;

    Ok(Snapshot {
        header: Header { station_id, time, datum, station_number },
        groups,
        battery,
    })
}

enum Record {
    None,
    Datum(Reading),
    StationNumber(Reading),
    Group(Group),
    Battery(f64),
}

fn parse_record(
    key: &str,
    args: &[&str],
    station: &mut Option<String>,
    time: &mut Option<Timestamp>,
) -> Result<Record> {
    let readings = |n: usize| -> Result<Vec<Reading>> {
        if args.len() != n {
            bail!("`{key}` takes {n} readings, got {}", args.len());
        }
        args.iter().map(|a| parse_reading(a)).collect()
    };

    Ok(match key {
        "station" => {
            let [id] = args else { bail!("`station` takes one id") };
            *station = Some(id.to_string());
            Record::None
        }
        "time" => {
            let [d, t] = args else { bail!("`time` takes YYYY-MM-DD HH:MM:SS") };
            *time = Some(parse_timestamp(d, t)?);
            Record::None
        }
        "dat" => Record::Datum(readings(1)?[0]),
        "sns" => Record::StationNumber(readings(1)?[0]),
        "aqt" => {
            let r = readings(6)?;
            Record::Group(Group::Aqt {
                level: r[0],
                std_dev: r[1],
                outliers: r[2],
                aux1: r[3],
                aux2: r[4],
                redundant: r[5],
            })
        }
        "mwwl" | "bwl" => {
            let r = readings(4)?;
            let sensor = if key == "mwwl" { WaterLevelSensor::Microwave } else { WaterLevelSensor::Backup };
            Record::Group(Group::WaterLevel {
                sensor,
                level: r[0],
                std_dev: r[1],
                outliers: r[2],
                redundant: r[3],
            })
        }
        "wind" => {
            let r = readings(3)?;
            Record::Group(Group::Wind { speed: r[0], direction: r[1], gust: r[2] })
        }
        "at" | "wt" | "ctwt" => {
            let probe = match key {
                "at" => TemperatureProbe::Air,
                "wt" => TemperatureProbe::Water,
                _ => TemperatureProbe::CtWater,
            };
            Record::Group(Group::Temperature { probe, reading: readings(1)?[0] })
        }
        "baro" => Record::Group(Group::Barometer(readings(1)?[0])),
        "cond" => Record::Group(Group::Conductivity(readings(1)?[0])),
        "bat" | "bbat" => {
            let kind = if key == "bat" { BatteryKind::Main } else { BatteryKind::Backup };
            Record::Group(Group::Battery { kind, reading: readings(1)?[0] })
        }
        "tsunami" => {
            let Some((stamp, rest)) = args.split_first() else {
                bail!("`tsunami` takes HH:MM and 6 readings")
            };
            if rest.len() != 6 {
                bail!("`tsunami` takes 6 readings, got {}", rest.len());
            }
            let (hour, minute) = parse_hm(stamp)?;
            let mut samples = [Reading::missing(0); 6];
            for (dst, a) in samples.iter_mut().zip(rest.iter()) {
                *dst = parse_reading(a)?;
            }
            Record::Group(Group::Tsunami { hour, minute, samples })
        }
        "battery" => {
            let [v] = args else { bail!("`battery` takes one voltage") };
            Record::Battery(v.parse().with_context(|| format!("parse voltage {v:?}"))?)
        }
        other => bail!("unknown record `{other}`"),
    })
}

/// `value:right_digits`, `-`, or `-:right_digits`.
pub fn parse_reading(tok: &str) -> Result<Reading> {
    let (value, rd) = match tok.split_once(':') {
        Some((v, rd)) => (v, rd.parse::<u8>().with_context(|| format!("right digits in {tok:?}"))?),
        None => (tok, 0),
    };
    if value == "-" {
        return Ok(Reading::missing(rd));
    }
    let v: f64 = value.parse().with_context(|| format!("value in {tok:?}"))?;
    Ok(Reading::from_host(v, rd))
}

/// `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<(i32, u8, u8)> {
    let mut it = s.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (it.next(), it.next(), it.next()) else {
        bail!("expected YYYY-MM-DD, got {s:?}");
    };
    Ok((y.parse()?, m.parse()?, d.parse()?))
}

fn parse_hm(s: &str) -> Result<(u8, u8)> {
    let (h, m) = s.split_once(':').ok_or_else(|| anyhow!("expected HH:MM, got {s:?}"))?;
    Ok((h.parse()?, m.parse()?))
}

pub fn parse_timestamp(date: &str, time: &str) -> Result<Timestamp> {
    let (year, month, day) = parse_date(date)?;
    let mut it = time.splitn(3, ':');
    let (Some(h), Some(mi), Some(s)) = (it.next(), it.next(), it.next()) else {
        bail!("expected HH:MM:SS, got {time:?}");
    };
    Ok(Timestamp::new(year, month, day, h.parse()?, mi.parse()?, s.parse()?)?)
}
