// crates/tidelink-core/tests/channel_fields.rs

use tidelink_core::channel::{decode_channel, encode_channel, scale, BARO_BIAS};
use tidelink_core::{ChannelKind, CodecConfig, Decoded, MissingStyle, Reading, SignMode, Width};

fn enc(kind: ChannelKind, value: f64, rd: u8) -> String {
    encode_channel(kind, Reading::new(value, rd), &CodecConfig::default())
}

#[test]
fn field_table() {
    use ChannelKind::*;
    let cases = [
        (WaterLevel, Width::THREE, SignMode::SignedOverflow),
        (Conductivity, Width::THREE, SignMode::SignedOverflow),
        (Datum, Width::THREE, SignMode::SignedOverflow),
        (Temperature, Width::TWO, SignMode::SignedOverflow),
        (AuxTemperature, Width::TWO, SignMode::SignedOverflow),
        (StationNumber, Width::TWO, SignMode::SignedOverflow),
        (StdDev, Width::TWO, SignMode::UnsignedOnly),
        (WindSpeed, Width::TWO, SignMode::UnsignedOnly),
        (WindDirection, Width::TWO, SignMode::UnsignedOnly),
        (WindGust, Width::TWO, SignMode::UnsignedOnly),
        (Battery, Width::TWO, SignMode::UnsignedOnly),
        (Barometer, Width::TWO, SignMode::UnsignedOnly),
        (Outliers, Width::ONE, SignMode::UnsignedOnly),
    ];
    for (kind, width, sign) in cases {
        let spec = kind.spec();
        assert_eq!((spec.width, spec.sign), (width, sign), "{kind:?}");
        assert_eq!(spec.bias, if kind == Barometer { BARO_BIAS } else { 0 }, "{kind:?}");
    }
}

#[test]
fn labels_map_to_kinds() {
    assert_eq!(ChannelKind::from_label("MWWL2"), Some(ChannelKind::WaterLevel));
    assert_eq!(ChannelKind::from_label("BWLSTD"), Some(ChannelKind::StdDev));
    assert_eq!(ChannelKind::from_label("AQTOUT"), Some(ChannelKind::Outliers));
    assert_eq!(ChannelKind::from_label("CTWT"), Some(ChannelKind::Temperature));
    assert_eq!(ChannelKind::from_label("BBAT"), Some(ChannelKind::Battery));
    assert_eq!(ChannelKind::from_label("BARO"), Some(ChannelKind::Barometer));
    assert_eq!(ChannelKind::from_label("baro"), None);
    assert_eq!(ChannelKind::from_label(""), None);
}

#[test]
fn scaling_rounds_binary_fractions() {
    assert_eq!(scale(4.123, 3), 4123);
    assert_eq!(scale(35.12, 2), 3512);
    assert_eq!(scale(-5.2, 1), -52);
    assert_eq!(scale(7.0, 0), 7);
}

#[test]
fn known_channel_fields() {
    use ChannelKind::*;
    assert_eq!(enc(WaterLevel, 4.123, 3), "A@[");
    assert_eq!(enc(StdDev, 0.012, 3), "@L");
    assert_eq!(enc(Outliers, 3.0, 0), "C");
    assert_eq!(enc(Temperature, 21.5, 1), "CW");
    assert_eq!(enc(Temperature, -5.2, 1), "?L");
    assert_eq!(enc(Conductivity, 35.12, 2), "@vx");
    assert_eq!(enc(WindSpeed, 3.2, 1), "@`");
    assert_eq!(enc(WindDirection, 270.0, 0), "DN");
    assert_eq!(enc(WindGust, 5.1, 1), "@s");
    assert_eq!(enc(Battery, 12.6, 2), "Sl");
}

#[test]
fn barometer_is_biased_by_8000() {
    let cfg = CodecConfig::default();
    assert_eq!(enc(ChannelKind::Barometer, 1013.2, 1), "aT");
    assert_eq!(
        decode_channel(ChannelKind::Barometer, "aT", 1, &cfg).unwrap(),
        Decoded::Value(1013.2)
    );
    // Below 800.0 mbar the biased value is negative in an unsigned field.
    assert_eq!(enc(ChannelKind::Barometer, 700.0, 1), "`@");
}

#[test]
fn out_of_range_values_saturate() {
    use ChannelKind::*;
    assert_eq!(enc(Outliers, 99.0, 0), "?");
    assert_eq!(enc(Temperature, 300.0, 1), "_?");
    assert_eq!(enc(Temperature, -300.0, 1), "`@");
    assert_eq!(enc(WaterLevel, 200.0, 3), "_??");
    assert_eq!(enc(StdDev, -0.001, 3), "`@");
}

#[test]
fn missing_readings_use_width_markers() {
    let slashes = CodecConfig::default();
    let legacy = CodecConfig::new(MissingStyle::Legacy);
    let host_missing = Reading::from_host(-99999.0, 3);
    assert!(host_missing.is_missing());
    assert!(Reading::from_host(f64::NAN, 1).is_missing());

    assert_eq!(encode_channel(ChannelKind::WaterLevel, host_missing, &slashes), "///");
    assert_eq!(encode_channel(ChannelKind::Barometer, host_missing, &slashes), "//");
    assert_eq!(encode_channel(ChannelKind::Outliers, host_missing, &slashes), "/");
    assert_eq!(encode_channel(ChannelKind::WaterLevel, host_missing, &legacy), "???");

    assert_eq!(
        decode_channel(ChannelKind::WaterLevel, "///", 3, &slashes).unwrap(),
        Decoded::Missing
    );
}

#[test]
fn channel_decode_inverts_encode() {
    let cfg = CodecConfig::default();
    for (kind, value, rd) in [
        (ChannelKind::WaterLevel, -12.345, 3),
        (ChannelKind::Temperature, 21.5, 1),
        (ChannelKind::Battery, 12.6, 2),
        (ChannelKind::Conductivity, 35.12, 2),
    ] {
        let field = enc(kind, value, rd);
        let back = decode_channel(kind, &field, rd, &cfg).unwrap().value().unwrap();
        assert!((back - value).abs() < 1e-9, "{kind:?}: {back} != {value}");
    }
}
