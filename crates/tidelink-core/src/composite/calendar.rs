// crates/tidelink-core/src/composite/calendar.rs

use crate::error::{Result, TideError};
use crate::pseudo::{encode, SignMode, Width};

/// First year counted by the day counter (day 0 is 1984-12-31).
pub const EPOCH_YEAR: i32 = 1985;

/// The day counter wraps every 4096 days (about 11.2 years).
pub const DAY_COUNTER_MODULUS: i64 = 4096;

/// Days since 1984-12-31, modulo 4096.
///
/// `365*(year-1985) + floor((year-1985)/4) + julian_day`. The leap term is a
/// plain every-fourth-year approximation, which matches the Gregorian
/// calendar from 1901 to 2099. Floor division and Euclidean modulo keep
/// years before the epoch in range as well.
pub fn sutron_day(julian_day: u16, year: i32) -> u16 {
    let y = year as i64 - EPOCH_YEAR as i64;
    let days = 365 * y + y.div_euclid(4) + julian_day as i64;
    days.rem_euclid(DAY_COUNTER_MODULUS) as u16
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day of year (1..=366) for a calendar date.
pub fn day_of_year(year: i32, month: u8, day: u8) -> Result<u16> {
    if !(1..=12).contains(&month) {
        return Err(TideError::Validation(format!("month must be in 1..=12, got {month}")));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(TideError::Validation(format!(
            "day {day} out of range for {year:04}-{month:02}"
        )));
    }
    Ok(ordinal(year, month, day))
}

#[inline]
fn ordinal(year: i32, month: u8, day: u8) -> u16 {
    let leap = u16::from(month > 2 && is_leap_year(year));
    DAYS_BEFORE_MONTH[(month - 1) as usize] + leap + day as u16
}

/// Calendar date and time of a reading, as the logger's clock reports it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        day_of_year(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TideError::Validation(format!(
                "time out of range: {hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(Self { year, month, day, hour, minute, second })
    }

    pub fn julian_day(&self) -> u16 {
        ordinal(self.year, self.month.clamp(1, 12), self.day)
    }

    pub fn sutron_day(&self) -> u16 {
        sutron_day(self.julian_day(), self.year)
    }

    /// `MM/DD/YYYY`, as used in the report header.
    pub fn report_date(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }

    /// `HH:MM:SS`.
    pub fn report_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// -------------------- field encoders --------------------

/// Hour of day, one character, signed.
pub fn encode_hour(hour: u8) -> String {
    encode(hour as i64, Width::ONE, SignMode::SignedOverflow)
}

/// Minute of hour, one character, unsigned.
pub fn encode_minute(minute: u8) -> String {
    encode(minute as i64, Width::ONE, SignMode::UnsignedOnly)
}

/// Day counter, two characters, unsigned.
pub fn encode_sutron_day(day: u16) -> String {
    encode(day as i64, Width::TWO, SignMode::UnsignedOnly)
}
