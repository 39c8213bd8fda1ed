// crates/tidelink-core/src/channel/reading.rs

/// The host's "no valid sample" value.
pub const MISSING_VALUE: f64 = -99999.0;

/// One sample as the host supplies it: a float plus the channel's decimal
/// precision. `value == None` means no valid sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reading {
    pub value: Option<f64>,
    pub right_digits: u8,
}

impl Reading {
    pub fn new(value: f64, right_digits: u8) -> Self {
        Self { value: Some(value), right_digits }
    }

    pub fn missing(right_digits: u8) -> Self {
        Self { value: None, right_digits }
    }

    /// Translate the host's `-99999.0` (and any non-finite value) to missing.
    pub fn from_host(value: f64, right_digits: u8) -> Self {
        if value == MISSING_VALUE || !value.is_finite() {
            Self::missing(right_digits)
        } else {
            Self::new(value, right_digits)
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    /// `round(value * 10^right_digits)`, or `None` when missing.
    pub fn scaled(&self) -> Option<i64> {
        self.value.map(|v| scale(v, self.right_digits))
    }
}

/// Decimal-scale a value to an integer. Rounds rather than truncates:
/// `4.123 * 1000` is `4122.9999...` in binary floating point.
#[inline]
pub fn scale(value: f64, right_digits: u8) -> i64 {
    (value * 10f64.powi(right_digits as i32)).round() as i64
}
