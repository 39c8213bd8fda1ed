pub mod error;

pub mod pseudo;
pub mod composite;
pub mod channel;
pub mod message;
pub mod report;

pub use crate::channel::{ChannelKind, FieldSpec, Reading};
pub use crate::error::{Result, TideError};
pub use crate::pseudo::{CodecConfig, Decoded, MissingStyle, Saturation, SignMode, Width};
