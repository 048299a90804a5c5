use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use sumlens_protocol::Sample;

use crate::cursor::Cursor;
use crate::jsonl::parse_jsonl;

/// Benchmark samples loaded from a `.jsonl` fixture, with a navigation
/// cursor.
#[derive(Debug)]
pub struct SampleStore {
    samples: Vec<Sample>,
    cursor: Cursor,
}

impl SampleStore {
    /// Load a fixture file. Malformed lines are skipped, not fatal; an
    /// unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading samples fixture {}", path.display()))?;
        let samples: Vec<Sample> = parse_jsonl(&text);
        info!("loaded {} sample(s) from {}", samples.len(), path.display());
        Ok(Self::from_samples(samples))
    }

    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let cursor = Cursor::new(samples.len());
        Self { samples, cursor }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample under the cursor, if any are loaded.
    #[must_use]
    pub fn current(&self) -> Option<&Sample> {
        self.samples.get(self.cursor.index())
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn load_reads_jsonl_and_positions_cursor_at_start() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "{}",
            r#"{"buggy_code": "a", "instruction": "first"}"#
        )
        .unwrap();
        writeln!(file, "not json").unwrap();
        writeln!(
            file,
            "{}",
            r#"{"buggy_code": "b", "instruction": "second"}"#
        )
        .unwrap();

        let store = SampleStore::load(file.path()).expect("load");
        assert_eq!(store.len(), 2);
        assert_eq!(store.current().map(|s| s.instruction.as_str()), Some("first"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/samples.jsonl");
        assert!(SampleStore::load(missing).is_err());
    }

    #[test]
    fn navigation_moves_current() {
        let mut store = SampleStore::from_samples(vec![
            Sample {
                instruction: "one".to_string(),
                ..Default::default()
            },
            Sample {
                instruction: "two".to_string(),
                ..Default::default()
            },
        ]);
        store.cursor_mut().next();
        assert_eq!(store.current().map(|s| s.instruction.as_str()), Some("two"));
    }
}
