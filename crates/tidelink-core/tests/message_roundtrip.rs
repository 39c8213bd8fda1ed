// crates/tidelink-core/tests/message_roundtrip.rs

use tidelink_core::composite::Timestamp;
use tidelink_core::message::{
    build_uplink, insert_tx_battery, parse_uplink, tx_battery_field, BatteryKind, Group, Header,
    ParseLayout, WaterLevelSensor,
};
use tidelink_core::{CodecConfig, Decoded, Reading, TideError};

const GOLDEN: &str = "P99999991@@d0VgN8A@[@LC#A@X<Sl ";

fn header() -> Header {
    Header::new("99999991", Timestamp::new(2022, 8, 9, 14, 36, 0).unwrap())
}

fn microwave() -> Group {
    Group::WaterLevel {
        sensor: WaterLevelSensor::Microwave,
        level: Reading::new(4.123, 3),
        std_dev: Reading::new(0.012, 3),
        outliers: Reading::new(3.0, 0),
        redundant: Reading::new(4.120, 3),
    }
}

fn battery(kind: BatteryKind, volts: f64) -> Group {
    Group::Battery { kind, reading: Reading::new(volts, 2) }
}

fn bare_layout() -> ParseLayout {
    ParseLayout { datum: false, station_number: false, ..ParseLayout::default() }
}

#[test]
fn golden_message() {
    let cfg = CodecConfig::default();
    let msg = build_uplink(&header(), &[microwave(), battery(BatteryKind::Main, 12.6)], &cfg);
    assert_eq!(msg, GOLDEN);
    assert_eq!(insert_tx_battery(&msg, 12.9), "P99999991@@d0VgN8A@[@LC#A@X<Sl b");
}

#[test]
fn tx_battery_clamps_to_floor() {
    assert_eq!(tx_battery_field(12.9), "b");
    assert_eq!(tx_battery_field(9.5), "@");
    assert_eq!(tx_battery_field(3.0), "@");
    assert_eq!(tx_battery_field(20.0), "?");
}

#[test]
fn two_batteries_drop_the_first_space() {
    let cfg = CodecConfig::default();
    let groups = [
        microwave(),
        battery(BatteryKind::Main, 12.6),
        battery(BatteryKind::Backup, 13.0),
    ];
    let msg = build_uplink(&header(), &groups, &cfg);
    assert!(msg.ends_with("<Sl <TT "));
    let sent = insert_tx_battery(&msg, 12.9);
    assert!(sent.ends_with("<Sl<TT b"), "{sent}");
    assert_eq!(sent.matches(' ').count(), 1);

    // Marker characters inside field values are not group boundaries.
    let parsed = parse_uplink(&sent, &bare_layout()).unwrap();
    let markers: Vec<_> = parsed.groups.iter().map(|g| g.marker).collect();
    assert_eq!(markers, ["8", "<", "<"]);
    assert_eq!(parsed.tx_battery.as_ref().unwrap().field, "b");
}

#[test]
fn message_without_space_is_unchanged() {
    assert_eq!(insert_tx_battery("P1234@@", 12.0), "P1234@@");
}

#[test]
fn parse_recovers_fields() {
    let cfg = CodecConfig::default();
    let sent = format!("{}\r\n", insert_tx_battery(GOLDEN, 12.9));
    let parsed = parse_uplink(&sent, &bare_layout()).unwrap();

    assert_eq!(parsed.station_id, "99999991");
    let get = |label: &str| parsed.field(label).unwrap().field.as_str();
    assert_eq!(get("system"), "@@");
    assert_eq!(get("minute"), "d");
    assert_eq!(get("day_counter"), "Vg");
    assert_eq!(get("hour"), "N");
    assert_eq!(get("mwwl"), "A@[");
    assert_eq!(get("mwwl_redundant"), "A@X");
    assert_eq!(get("battery"), "Sl");
    assert_eq!(get("tx_battery"), "b");

    let day = parsed.field("day_counter").unwrap().decode(0, &cfg).unwrap();
    assert_eq!(day, Decoded::Value(1447.0));
    let level = parsed.field("mwwl").unwrap().decode(3, &cfg).unwrap();
    assert_eq!(level, Decoded::Value(4.123));
    let volts = parsed.field("battery").unwrap().decode(2, &cfg).unwrap();
    assert_eq!(volts, Decoded::Value(12.6));
}

#[test]
fn header_carries_datum_and_station_number() {
    let cfg = CodecConfig::default();
    let mut h = header();
    h.datum = Some(Reading::new(1.234, 3));
    h.station_number = Some(Reading::new(5.0, 0));
    let msg = build_uplink(&h, &[battery(BatteryKind::Main, 12.6)], &cfg);
    assert!(msg.starts_with("P99999991@SR@E@@d0VgN"), "{msg}");

    let parsed = parse_uplink(&msg, &ParseLayout::default()).unwrap();
    assert_eq!(parsed.field("dat").unwrap().field, "@SR");
    assert_eq!(parsed.field("sns").unwrap().field, "@E");
    assert!(parsed.tx_battery.is_none());
}

#[test]
fn every_group_kind_parses_back() {
    use tidelink_core::message::TemperatureProbe;
    let cfg = CodecConfig::default();
    let groups = vec![
        Group::Aqt {
            level: Reading::new(4.123, 3),
            std_dev: Reading::new(0.012, 3),
            outliers: Reading::new(3.0, 0),
            aux1: Reading::new(21.5, 1),
            aux2: Reading::missing(1),
            redundant: Reading::new(4.120, 3),
        },
        microwave(),
        Group::WaterLevel {
            sensor: WaterLevelSensor::Backup,
            level: Reading::new(4.0, 3),
            std_dev: Reading::new(0.0, 3),
            outliers: Reading::new(0.0, 0),
            redundant: Reading::missing(3),
        },
        Group::Wind {
            speed: Reading::new(3.2, 1),
            direction: Reading::new(270.0, 0),
            gust: Reading::new(5.1, 1),
        },
        Group::Temperature { probe: TemperatureProbe::Air, reading: Reading::new(-5.2, 1) },
        Group::Temperature { probe: TemperatureProbe::Water, reading: Reading::new(21.5, 1) },
        Group::Barometer(Reading::new(1013.2, 1)),
        Group::Conductivity(Reading::new(35.12, 2)),
        battery(BatteryKind::Main, 12.6),
        Group::Tsunami { hour: 14, minute: 36, samples: [Reading::new(4.123, 3); 6] },
    ];
    let msg = insert_tx_battery(&build_uplink(&header(), &groups, &cfg), 12.9);
    let parsed = parse_uplink(&msg, &bare_layout()).unwrap();

    let markers: Vec<_> = parsed.groups.iter().map(|g| g.marker).collect();
    assert_eq!(markers, ["1", "8", "2", "3", "4", "5", "6", "-7", "<", "T"]);
    assert_eq!(parsed.field("aqt2").unwrap().field, "//");
    assert_eq!(parsed.field("bwl_redundant").unwrap().field, "///");
    assert_eq!(parsed.field("baro").unwrap().field, "aT");
    assert_eq!(parsed.field("conductivity").unwrap().field, "@vx");
    assert_eq!(parsed.field("tx_battery").unwrap().field, "b");

    let burst = parsed.groups.last().unwrap().tsunami().unwrap();
    assert_eq!(burst.concat(), "NdPA{A{A{A{A{A{");
    assert_eq!(burst.decode(3, &cfg).unwrap(), [Decoded::Value(4.123); 6]);
    assert!(parsed.groups[0].tsunami().is_none());
}

#[test]
fn malformed_messages_are_rejected() {
    let layout = bare_layout();
    let unknown = parse_uplink("P99999991@@d0VgN9AAA", &layout).unwrap_err();
    assert!(matches!(unknown, TideError::MessageFormat(_)), "{unknown}");

    let truncated = parse_uplink("P99999991@@d0VgN8A@", &layout).unwrap_err();
    assert!(matches!(truncated, TideError::MessageFormat(_)), "{truncated}");

    assert!(parse_uplink("X99999991@@d0VgN", &layout).is_err());
    assert!(parse_uplink("P99999991@@d1VgN", &layout).is_err());
    assert!(parse_uplink("", &layout).is_err());
}

fn tsunami() -> Group {
    Group::Tsunami { hour: 14, minute: 36, samples: [Reading::new(4.123, 3); 6] }
}

#[test]
fn tsunami_after_battery_without_tx_field() {
    let cfg = CodecConfig::default();
    let msg = build_uplink(&header(), &[battery(BatteryKind::Main, 12.6), tsunami()], &cfg);
    assert!(msg.ends_with("<Sl TNdPA{A{A{A{A{A{"), "{msg}");

    let parsed = parse_uplink(&msg, &bare_layout()).unwrap();
    assert!(parsed.tx_battery.is_none());
    let markers: Vec<_> = parsed.groups.iter().map(|g| g.marker).collect();
    assert_eq!(markers, ["<", "T"]);
}

#[test]
fn tx_field_equal_to_tsunami_marker() {
    let cfg = CodecConfig::default();
    assert_eq!(tx_battery_field(11.5), "T");
    let built = build_uplink(&header(), &[battery(BatteryKind::Main, 12.6), tsunami()], &cfg);
    let sent = insert_tx_battery(&built, 11.5);
    assert!(sent.ends_with("<Sl TTNdPA{A{A{A{A{A{"), "{sent}");

    let parsed = parse_uplink(&sent, &bare_layout()).unwrap();
    assert_eq!(parsed.tx_battery.as_ref().unwrap().field, "T");
    let burst = parsed.groups.last().unwrap().tsunami().unwrap();
    assert_eq!(burst.concat(), "NdPA{A{A{A{A{A{");
}
