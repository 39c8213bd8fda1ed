// crates/tidelink-core/src/composite/mod.rs
//
// Multi-field structures built from repeated scalar codec calls:
// time-of-day and day counter fields, redundant (backup) values and the
// six-value tsunami burst with shared-baseline compression.

pub mod calendar;
pub mod redundant;
pub mod tsunami;

pub use calendar::{sutron_day, Timestamp};
pub use redundant::encode_redundant;
pub use tsunami::{TsunamiBurst, TsunamiFields};
