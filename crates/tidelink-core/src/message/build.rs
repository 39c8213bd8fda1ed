// crates/tidelink-core/src/message/build.rs

use tracing::debug;

use crate::channel::{encode_channel, ChannelKind, Reading};
use crate::composite::calendar::{encode_hour, encode_minute, encode_sutron_day};
use crate::composite::Timestamp;
use crate::message::group::Group;
use crate::pseudo::{encode, CodecConfig, SignMode, Width};

/// Start-of-message character.
pub const START: char = 'P';

/// System status field; always zero.
pub const SYSTEM_FIELD: &str = "@@";

/// Precedes the day counter and hour.
pub const TIME_TAG: char = '0';

/// Transmitter battery floor in volts; the field carries tenths above it.
pub const TX_BATTERY_FLOOR: f64 = 9.5;

/// Station identity and the primary reading's timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub station_id: String,
    pub time: Timestamp,
    pub datum: Option<Reading>,
    pub station_number: Option<Reading>,
}

impl Header {
    pub fn new(station_id: impl Into<String>, time: Timestamp) -> Self {
        Self {
            station_id: station_id.into(),
            time,
            datum: None,
            station_number: None,
        }
    }

    pub fn encode_into(&self, cfg: &CodecConfig, out: &mut String) {
        out.push(START);
        out.push_str(&self.station_id);
        if let Some(r) = self.datum {
            out.push_str(&encode_channel(ChannelKind::Datum, r, cfg));
        }
        if let Some(r) = self.station_number {
            out.push_str(&encode_channel(ChannelKind::StationNumber, r, cfg));
        }
        out.push_str(SYSTEM_FIELD);
        out.push_str(&encode_minute(self.time.minute));
        out.push(TIME_TAG);
        out.push_str(&encode_sutron_day(self.time.sutron_day()));
        out.push_str(&encode_hour(self.time.hour));
    }
}

/// Assemble the uplink message from a header and groups in transmission
/// order.
pub fn build_uplink(header: &Header, groups: &[Group], cfg: &CodecConfig) -> String {
    let mut msg = String::with_capacity(64);
    header.encode_into(cfg, &mut msg);
    for g in groups {
        g.encode_into(cfg, &mut msg);
    }
    debug!(station = %header.station_id, groups = groups.len(), len = msg.len(), "uplink message built");
    msg
}

/// Transmitter battery field: tenths of a volt above 9.5 V, one character,
/// unsigned. Readings below the floor clamp to it.
pub fn tx_battery_field(volts: f64) -> String {
    let v = volts.max(TX_BATTERY_FLOOR);
    let tenths = ((v - TX_BATTERY_FLOOR) * 10.0).round() as i64;
    encode(tenths, Width::ONE, SignMode::UnsignedOnly)
}

/// Insert the transmitter battery field after the last space. With exactly
/// two battery groups the first separating space is dropped. A message
/// without any space is returned unchanged.
pub fn insert_tx_battery(msg: &str, volts: f64) -> String {
    let Some(idx) = msg.rfind(' ') else {
        return msg.to_string();
    };
    let field = tx_battery_field(volts);

    let mut out = String::with_capacity(msg.len() + field.len());
    out.push_str(&msg[..=idx]);
    out.push_str(&field);
    out.push_str(&msg[idx + 1..]);

    if msg.matches(' ').count() == 2 {
        out = out.replacen(' ', "", 1);
    }
    out
}
