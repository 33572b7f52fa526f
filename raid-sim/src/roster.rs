use std::fs;

use anyhow::{Context, Result};
use raid_splitter::Attendee;

/// Read an attendee list exported from the attendance table.
pub fn load(path: &str) -> Result<Vec<Attendee>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("{path} is not a valid attendee list"))
}
