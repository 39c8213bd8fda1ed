// crates/tidelink-core/src/message/mod.rs
//
// Satellite uplink message:
//
//   'P' station_id [dat(3)] [sns(2)] "@@" minute(1) '0' day(2) hour(1)
//   group*
//
// Each group is a marker followed by fixed-width fields (see `layout`).
// Battery groups end with a space; at transmit time the transmitter
// battery field is inserted after the last space.

pub mod build;
pub mod group;
pub mod layout;
pub mod parse;

pub use build::{build_uplink, insert_tx_battery, tx_battery_field, Header};
pub use group::{BatteryKind, Group, TemperatureProbe, WaterLevelSensor};
pub use parse::{parse_uplink, ParseLayout, ParsedField, ParsedGroup, ParsedMessage};
