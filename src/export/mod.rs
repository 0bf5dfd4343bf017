//! Output writers.
//!
//! Records and insights are written as pretty-printed JSON files. Parent
//! directories are created on demand and write failures are returned to the
//! caller.

mod json;

pub use json::{save_ads_records, save_insights, write_json};
