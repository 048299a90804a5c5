//! # Summary Lens Store
//!
//! Fixture ingestion and navigation for the viewer: benchmark samples from
//! `.jsonl` files, annotation tasks from paired input/output JSON arrays,
//! and a clamped cursor over whichever collection is loaded.
//!
//! This is the only crate in the workspace that touches the filesystem; the
//! engines stay pure.

mod cursor;
mod jsonl;
mod samples;
mod tasks;

pub use cursor::Cursor;
pub use jsonl::parse_jsonl;
pub use samples::SampleStore;
pub use tasks::TaskStore;
