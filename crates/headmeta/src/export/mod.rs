//! Export of a finished scan.
//!
//! The only supported format is a single JSON document mapping relative
//! file paths to their metadata records.

mod json;

pub use json::{to_json_string, write_json_file};
