//! Output module for island records
//!
//! This module handles:
//! - Writing records to the JSON output file
//! - Reading a previously written file back
//! - Summary statistics over a record set

mod json;
pub mod stats;

pub use json::{read_records, to_json_string, write_records};
pub use stats::{print_statistics, IslandStatistics};
