// crates/tidelink-core/src/message/parse.rs
//
// Sequential uplink parser for verification tooling. Markers are only
// recognized at group boundaries: 'T' is also an alphabet character, so a
// scan for marker characters anywhere in the message would misfire.

use tracing::debug;

use crate::channel::{ChannelKind, FieldSpec};
use crate::composite::TsunamiFields;
use crate::error::{Result, TideError};
use crate::message::build::{START, TIME_TAG};
use crate::message::layout::{self, GroupLayout, Slot};
use crate::pseudo::{CodecConfig, Decoded};

/// Which optional header fields the sender includes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseLayout {
    pub station_id_len: usize,
    pub datum: bool,
    pub station_number: bool,
    /// The transmitter battery field follows the last space.
    pub tx_battery: bool,
}

impl Default for ParseLayout {
    fn default() -> Self {
        Self {
            station_id_len: 8,
            datum: true,
            station_number: true,
            tx_battery: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedField {
    pub label: &'static str,
    pub field: String,
    pub spec: FieldSpec,
}

impl ParsedField {
    fn new(slot: Slot, field: &str) -> Self {
        Self {
            label: slot.label,
            field: field.to_string(),
            spec: slot.spec,
        }
    }

    pub fn decode(&self, right_digits: u8, cfg: &CodecConfig) -> Result<Decoded> {
        self.spec.decode(&self.field, right_digits, cfg)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedGroup {
    pub marker: &'static str,
    pub fields: Vec<ParsedField>,
}

impl ParsedGroup {
    /// The burst fields, when this is a tsunami group.
    pub fn tsunami(&self) -> Option<TsunamiFields> {
        if self.marker != "T" {
            return None;
        }
        let joined: String = self.fields.iter().map(|f| f.field.as_str()).collect();
        TsunamiFields::split(&joined).ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMessage {
    pub station_id: String,
    pub header: Vec<ParsedField>,
    pub groups: Vec<ParsedGroup>,
    pub tx_battery: Option<ParsedField>,
}

impl ParsedMessage {
    /// Every field in message order, header first.
    pub fn fields(&self) -> impl Iterator<Item = &ParsedField> + '_ {
        self.header
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.fields.iter()))
            .chain(self.tx_battery.iter())
    }

    pub fn field(&self, label: &str) -> Option<&ParsedField> {
        self.fields().find(|f| f.label == label)
    }
}

#[derive(Copy, Clone)]
struct Cursor<'a> {
    msg: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.msg[self.pos..]
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a str> {
        if self.msg.len() < self.pos + n {
            return Err(TideError::MessageFormat(format!(
                "truncated {what} at offset {}: need {n} chars, {} left",
                self.pos,
                self.msg.len() - self.pos
            )));
        }
        let s = &self.msg[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    fn expect(&mut self, lit: &str) -> Result<()> {
        if !self.rest().starts_with(lit) {
            return Err(TideError::MessageFormat(format!(
                "expected {lit:?} at offset {}, found {:?}",
                self.pos,
                self.rest().chars().next()
            )));
        }
        self.pos += lit.len();
        Ok(())
    }

    fn slot(&mut self, slot: Slot) -> Result<ParsedField> {
        let f = self.take(slot.spec.width.chars(), slot.label)?;
        Ok(ParsedField::new(slot, f))
    }
}

pub fn parse_uplink(msg: &str, layout: &ParseLayout) -> Result<ParsedMessage> {
    let msg = msg.trim_end_matches(['\r', '\n']);
    if !msg.is_ascii() {
        return Err(TideError::MessageFormat("message is not ascii".into()));
    }

    let mut c = Cursor { msg, pos: 0 };
    c.expect(&START.to_string())?;
    let station_id = c.take(layout.station_id_len, "station id")?.to_string();

    let mut header = Vec::with_capacity(6);
    if layout.datum {
        header.push(c.slot(Slot { label: "dat", spec: ChannelKind::Datum.spec() })?);
    }
    if layout.station_number {
        header.push(c.slot(Slot { label: "sns", spec: ChannelKind::StationNumber.spec() })?);
    }
    header.push(c.slot(Slot { label: "system", spec: layout::SYSTEM })?);
    header.push(c.slot(Slot { label: "minute", spec: layout::MINUTE })?);
    c.expect(&TIME_TAG.to_string())?;
    header.push(c.slot(Slot { label: "day_counter", spec: layout::DAY_COUNTER })?);
    header.push(c.slot(Slot { label: "hour", spec: layout::HOUR })?);

    let (groups, tx_battery) = parse_body(&mut c, layout.tx_battery)?;

    debug!(station = %station_id, groups = groups.len(), "uplink message parsed");
    Ok(ParsedMessage { station_id, header, groups, tx_battery })
}

/// Groups up to the end of the message. The transmitter battery field
/// follows the final battery space, unless what follows that space already
/// parses as complete groups on its own ('T' is both a legal field value
/// and the tsunami marker).
fn parse_body(c: &mut Cursor<'_>, tx_battery: bool) -> Result<(Vec<ParsedGroup>, Option<ParsedField>)> {
    let mut groups = Vec::new();
    let mut tx = None;
    while !c.rest().is_empty() {
        let g = layout::lookup(c.rest()).ok_or_else(|| {
            TideError::MessageFormat(format!(
                "unknown group marker {:?} at offset {}",
                c.rest().chars().next(),
                c.pos
            ))
        })?;
        groups.push(parse_group(c, g)?);

        if g.trailing_space && c.rest().starts_with(' ') {
            c.pos += 1;
            if tx_battery && !c.rest().is_empty() && !c.rest().contains(' ') {
                let mut trial = *c;
                if parse_body(&mut trial, false).is_err() {
                    tx = Some(c.slot(Slot { label: "tx_battery", spec: layout::TX_BATTERY })?);
                }
            }
        }
    }
    Ok((groups, tx))
}

fn parse_group(c: &mut Cursor<'_>, g: &'static GroupLayout) -> Result<ParsedGroup> {
    c.expect(g.marker)?;
    let mut fields = Vec::with_capacity(g.fields.len() + 1);
    for &slot in g.fields {
        fields.push(c.slot(slot)?);
    }
    if let Some((marker, slot)) = g.redundant {
        c.expect(marker)?;
        fields.push(c.slot(slot)?);
    }
    Ok(ParsedGroup { marker: g.marker, fields })
}
