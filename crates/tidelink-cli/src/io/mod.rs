// crates/tidelink-cli/src/io/mod.rs

pub mod snapshot;
