// crates/tidelink-core/src/report.rs
//
// Fixed-column station report (CRLF line endings):
//
//   NOS <station> MM/DD/YYYY HH:MM:SS
//   <flag><columns>          one line per group
//   SNS / DAT lines
//   U1<value>                one line per tsunami sample
//
//   REPORT COMPLETE

use crate::channel::{Reading, MISSING_VALUE};
use crate::message::build::Header;
use crate::message::group::{Group, TemperatureProbe, WaterLevelSensor};

pub const EOL: &str = "\r\n";
pub const FLAGGED: &str = "  Data flagged as bad or missing";
pub const FLAGGED_NARROW: &str = " Data flagged as bad or missing";
pub const NOT_AVAILABLE: &str = " data not available";
pub const FOOTER: &str = "\r\nREPORT COMPLETE\r\n";

#[inline]
fn v(r: &Reading) -> f64 {
    r.value.unwrap_or(MISSING_VALUE)
}

fn any_missing(rs: &[&Reading]) -> bool {
    rs.iter().any(|r| r.is_missing())
}

fn single(out: &mut String, flag: &str, r: &Reading) {
    out.push_str(flag);
    match r.value {
        Some(x) => {
            out.push_str(&format!("{x:>11.1}"));
        }
        None => out.push_str(FLAGGED),
    }
    out.push_str(EOL);
}

/// Report line(s) for one group. `microwave_index` numbers microwave water
/// level groups from 1 (flags `Y1 8`, `Y2 8`, ...).
pub fn render_group(out: &mut String, group: &Group, microwave_index: usize) {
    match group {
        Group::Aqt { level, std_dev, outliers, aux1, aux2, .. } => {
            out.push_str("A1 1");
            if any_missing(&[level, std_dev, outliers]) {
                out.push_str(FLAGGED);
            } else {
                out.push_str(&format!(
                    "{:>11.3}{:>9.3}{:>10.0}{:>10.1}{:>10.1}",
                    v(level),
                    v(std_dev),
                    v(outliers),
                    v(aux1),
                    v(aux2)
                ));
            }
            out.push_str(EOL);
        }
        Group::WaterLevel { sensor, level, std_dev, outliers, .. } => {
            match sensor {
                WaterLevelSensor::Microwave => {
                    out.push_str(&format!("Y{microwave_index} 8"));
                }
                WaterLevelSensor::Backup => out.push_str("B1 2"),
            }
            if any_missing(&[level, std_dev, outliers]) {
                out.push_str(FLAGGED);
            } else {
                out.push_str(&format!("{:>11.3}{:>9.3}{:>10.0}", v(level), v(std_dev), v(outliers)));
            }
            out.push_str(EOL);
        }
        Group::Wind { speed, direction, gust } => {
            out.push_str("C1 3");
            if any_missing(&[speed, direction, gust]) {
                out.push_str(FLAGGED);
            } else {
                out.push_str(&format!("{:>11.1}{:>9.0}{:>10.1}", v(speed), v(direction), v(gust)));
            }
            out.push_str(EOL);
        }
        Group::Temperature { probe, reading } => {
            let flag = match probe {
                TemperatureProbe::Air => "D1 4",
                TemperatureProbe::Water => "E1 5",
                TemperatureProbe::CtWater => "E2 5",
            };
            single(out, flag, reading);
        }
        Group::Barometer(r) => single(out, "F1 6", r),
        Group::Battery { reading, .. } => single(out, "L1 <", reading),
        Group::Conductivity(r) => {
            out.push_str("G1 -7");
            match r.value {
                Some(x) => {
                    out.push_str(&format!("{x:>10.2}"));
                }
                None => out.push_str(FLAGGED_NARROW),
            }
            out.push_str(EOL);
        }
        Group::Tsunami { samples, .. } => {
            for s in samples {
                out.push_str("U1");
                match s.value {
                    Some(x) => {
                        out.push_str(&format!("{x:>11.3}"));
                    }
                    None => out.push_str(NOT_AVAILABLE),
                }
                out.push_str(EOL);
            }
        }
    }
}

fn labelled(out: &mut String, label: &str, r: &Reading) {
    out.push_str(label);
    match r.value {
        Some(x) => {
            out.push_str(&format!("{x:>10.3}"));
        }
        None => out.push_str(NOT_AVAILABLE),
    }
    out.push_str(EOL);
}

pub fn render_report(header: &Header, groups: &[Group]) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(&format!(
        "NOS {} {} {}{EOL}",
        header.station_id,
        header.time.report_date(),
        header.time.report_time()
    ));

    let mut microwave = 0usize;
    for g in groups.iter().filter(|g| !matches!(g, Group::Tsunami { .. })) {
        if matches!(g, Group::WaterLevel { sensor: WaterLevelSensor::Microwave, .. }) {
            microwave += 1;
        }
        render_group(&mut out, g, microwave);
    }

    if let Some(r) = &header.station_number {
        labelled(&mut out, "SNS", r);
    }
    if let Some(r) = &header.datum {
        labelled(&mut out, "DAT", r);
    }

    for g in groups.iter().filter(|g| matches!(g, Group::Tsunami { .. })) {
        render_group(&mut out, g, 0);
    }

    out.push_str(FOOTER);
    out
}
