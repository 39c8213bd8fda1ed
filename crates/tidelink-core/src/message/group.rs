// crates/tidelink-core/src/message/group.rs

use crate::channel::{encode_channel, ChannelKind, Reading};
use crate::composite::{encode_redundant, TsunamiBurst};
use crate::pseudo::CodecConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WaterLevelSensor {
    Microwave,
    Backup,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemperatureProbe {
    Air,
    Water,
    CtWater,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BatteryKind {
    Main,
    Backup,
}

/// One sensor family's readings for a reporting cycle. Groups are encoded
/// in the order the caller supplies them; the primary sensor goes first.
#[derive(Clone, Debug, PartialEq)]
pub enum Group {
    Aqt {
        level: Reading,
        std_dev: Reading,
        outliers: Reading,
        aux1: Reading,
        aux2: Reading,
        redundant: Reading,
    },
    WaterLevel {
        sensor: WaterLevelSensor,
        level: Reading,
        std_dev: Reading,
        outliers: Reading,
        redundant: Reading,
    },
    Wind {
        speed: Reading,
        direction: Reading,
        gust: Reading,
    },
    Temperature {
        probe: TemperatureProbe,
        reading: Reading,
    },
    Barometer(Reading),
    Conductivity(Reading),
    Battery {
        kind: BatteryKind,
        reading: Reading,
    },
    Tsunami {
        hour: u8,
        minute: u8,
        samples: [Reading; 6],
    },
}

impl Group {
    pub fn marker(&self) -> &'static str {
        match self {
            Group::Aqt { .. } => "1",
            Group::WaterLevel { sensor: WaterLevelSensor::Microwave, .. } => "8",
            Group::WaterLevel { sensor: WaterLevelSensor::Backup, .. } => "2",
            Group::Wind { .. } => "3",
            Group::Temperature { probe: TemperatureProbe::Air, .. } => "4",
            Group::Temperature { .. } => "5",
            Group::Barometer(_) => "6",
            Group::Conductivity(_) => "-7",
            Group::Battery { .. } => "<",
            Group::Tsunami { .. } => "T",
        }
    }

    /// Marker that precedes the redundant (backup) value, if the group has one.
    pub fn redundant_marker(&self) -> Option<&'static str> {
        match self {
            Group::Aqt { .. } => Some(">"),
            Group::WaterLevel { sensor: WaterLevelSensor::Microwave, .. } => Some("#"),
            Group::WaterLevel { sensor: WaterLevelSensor::Backup, .. } => Some("\""),
            _ => None,
        }
    }

    pub fn encode_into(&self, cfg: &CodecConfig, out: &mut String) {
        use ChannelKind as K;
        out.push_str(self.marker());
        match self {
            Group::Aqt { level, std_dev, outliers, aux1, aux2, redundant } => {
                out.push_str(&encode_channel(K::WaterLevel, *level, cfg));
                out.push_str(&encode_channel(K::StdDev, *std_dev, cfg));
                out.push_str(&encode_channel(K::Outliers, *outliers, cfg));
                out.push_str(&encode_channel(K::AuxTemperature, *aux1, cfg));
                out.push_str(&encode_channel(K::AuxTemperature, *aux2, cfg));
                push_redundant(self, *redundant, cfg, out);
            }
            Group::WaterLevel { level, std_dev, outliers, redundant, .. } => {
                out.push_str(&encode_channel(K::WaterLevel, *level, cfg));
                out.push_str(&encode_channel(K::StdDev, *std_dev, cfg));
                out.push_str(&encode_channel(K::Outliers, *outliers, cfg));
                push_redundant(self, *redundant, cfg, out);
            }
            Group::Wind { speed, direction, gust } => {
                out.push_str(&encode_channel(K::WindSpeed, *speed, cfg));
                out.push_str(&encode_channel(K::WindDirection, *direction, cfg));
                out.push_str(&encode_channel(K::WindGust, *gust, cfg));
            }
            Group::Temperature { reading, .. } => {
                out.push_str(&encode_channel(K::Temperature, *reading, cfg));
            }
            Group::Barometer(r) => out.push_str(&encode_channel(K::Barometer, *r, cfg)),
            Group::Conductivity(r) => out.push_str(&encode_channel(K::Conductivity, *r, cfg)),
            Group::Battery { reading, .. } => {
                out.push_str(&encode_channel(K::Battery, *reading, cfg));
                out.push(' ');
            }
            Group::Tsunami { hour, minute, samples } => {
                let burst = TsunamiBurst::from_readings(*hour, *minute, samples);
                out.push_str(&burst.encode(cfg).concat());
            }
        }
    }

    pub fn encode(&self, cfg: &CodecConfig) -> String {
        let mut s = String::new();
        self.encode_into(cfg, &mut s);
        s
    }
}

fn push_redundant(group: &Group, redundant: Reading, cfg: &CodecConfig, out: &mut String) {
    if let Some(m) = group.redundant_marker() {
        out.push_str(m);
        out.push_str(&encode_redundant(redundant, cfg));
    }
}
