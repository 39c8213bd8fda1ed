// crates/tidelink-core/src/message/layout.rs
//
// Static field layouts of the uplink message, used by the parser. The
// builder derives the same layout from `Group` and `ChannelKind`.

use crate::channel::{ChannelKind, FieldSpec};
use crate::pseudo::{SignMode, Width};

const SIGNED: SignMode = SignMode::SignedOverflow;
const UNSIGNED: SignMode = SignMode::UnsignedOnly;

pub const HOUR: FieldSpec = FieldSpec::new(Width::ONE, SIGNED, 0);
pub const MINUTE: FieldSpec = FieldSpec::new(Width::ONE, UNSIGNED, 0);
pub const DAY_COUNTER: FieldSpec = FieldSpec::new(Width::TWO, UNSIGNED, 0);
pub const SYSTEM: FieldSpec = FieldSpec::new(Width::TWO, UNSIGNED, 0);
pub const TX_BATTERY: FieldSpec = FieldSpec::new(Width::ONE, UNSIGNED, 0);
pub const REDUNDANT: FieldSpec = FieldSpec::new(Width::THREE, SIGNED, 0);
pub const TSUNAMI_OFFSET: FieldSpec = FieldSpec::new(Width::ONE, SIGNED, 0);
pub const TSUNAMI_VALUE: FieldSpec = FieldSpec::new(Width::TWO, SIGNED, 0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub label: &'static str,
    pub spec: FieldSpec,
}

const fn slot(label: &'static str, spec: FieldSpec) -> Slot {
    Slot { label, spec }
}

const fn channel(label: &'static str, kind: ChannelKind) -> Slot {
    slot(label, kind.spec())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupLayout {
    pub marker: &'static str,
    pub fields: &'static [Slot],
    /// Companion marker and slot for the redundant value.
    pub redundant: Option<(&'static str, Slot)>,
    /// Battery groups are followed by a space.
    pub trailing_space: bool,
}

const fn group(marker: &'static str, fields: &'static [Slot]) -> GroupLayout {
    GroupLayout { marker, fields, redundant: None, trailing_space: false }
}

use ChannelKind as K;

const AQT_FIELDS: &[Slot] = &[
    channel("aqt", K::WaterLevel),
    channel("aqt_std", K::StdDev),
    channel("aqt_out", K::Outliers),
    channel("aqt1", K::AuxTemperature),
    channel("aqt2", K::AuxTemperature),
];

const MWWL_FIELDS: &[Slot] = &[
    channel("mwwl", K::WaterLevel),
    channel("mwwl_std", K::StdDev),
    channel("mwwl_out", K::Outliers),
];

const BWL_FIELDS: &[Slot] = &[
    channel("bwl", K::WaterLevel),
    channel("bwl_std", K::StdDev),
    channel("bwl_out", K::Outliers),
];

const WIND_FIELDS: &[Slot] = &[
    channel("wind_speed", K::WindSpeed),
    channel("wind_direction", K::WindDirection),
    channel("wind_gust", K::WindGust),
];

const AIR_TEMP_FIELDS: &[Slot] = &[channel("air_temp", K::Temperature)];
const WATER_TEMP_FIELDS: &[Slot] = &[channel("water_temp", K::Temperature)];
const BARO_FIELDS: &[Slot] = &[channel("baro", K::Barometer)];
const COND_FIELDS: &[Slot] = &[channel("conductivity", K::Conductivity)];
const BATTERY_FIELDS: &[Slot] = &[channel("battery", K::Battery)];

const TSUNAMI_FIELDS: &[Slot] = &[
    slot("tsunami_hour", HOUR),
    slot("tsunami_minute", MINUTE),
    slot("tsunami_offset", TSUNAMI_OFFSET),
    slot("tsunami_1", TSUNAMI_VALUE),
    slot("tsunami_2", TSUNAMI_VALUE),
    slot("tsunami_3", TSUNAMI_VALUE),
    slot("tsunami_4", TSUNAMI_VALUE),
    slot("tsunami_5", TSUNAMI_VALUE),
    slot("tsunami_6", TSUNAMI_VALUE),
];

pub const GROUPS: &[GroupLayout] = &[
    GroupLayout {
        redundant: Some((">", slot("aqt_redundant", REDUNDANT))),
        ..group("1", AQT_FIELDS)
    },
    GroupLayout {
        redundant: Some(("#", slot("mwwl_redundant", REDUNDANT))),
        ..group("8", MWWL_FIELDS)
    },
    GroupLayout {
        redundant: Some(("\"", slot("bwl_redundant", REDUNDANT))),
        ..group("2", BWL_FIELDS)
    },
    group("3", WIND_FIELDS),
    group("4", AIR_TEMP_FIELDS),
    group("5", WATER_TEMP_FIELDS),
    group("6", BARO_FIELDS),
    group("-7", COND_FIELDS),
    GroupLayout {
        trailing_space: true,
        ..group("<", BATTERY_FIELDS)
    },
    group("T", TSUNAMI_FIELDS),
];

/// Layout whose marker starts `rest`.
pub fn lookup(rest: &str) -> Option<&'static GroupLayout> {
    GROUPS.iter().find(|g| rest.starts_with(g.marker))
}
