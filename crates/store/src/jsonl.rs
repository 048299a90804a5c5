use log::debug;
use serde::de::DeserializeOwned;

/// Parse newline-delimited JSON, skipping blank and malformed lines.
///
/// Fixture exports routinely carry truncated trailing lines; a record that
/// fails to parse is dropped (counted in a debug log), never fatal.
#[must_use]
pub fn parse_jsonl<T: DeserializeOwned>(text: &str) -> Vec<T> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                debug!("skipping malformed jsonl line: {err}");
            }
        }
    }
    if skipped > 0 {
        debug!("parse_jsonl: skipped {skipped} malformed line(s)");
    }
    records
}
