//! # Summary Lens Protocol
//!
//! Serde data model for benchmark fixtures: samples, annotation tasks, and
//! the summary-to-code mapping records consumed by the resolver.
//!
//! Fixture JSON comes from an offline annotation pipeline and is loosely
//! typed (absent fields, numbers encoded as strings). Every leniency lives
//! here, validated once at ingestion, so downstream crates work with plain
//! `Option`s and never re-check field presence.

mod error;
mod keys;
mod mapping;
mod sample;
mod task;

pub use error::ProtocolError;
pub use keys::{Granularity, Structure, SummaryKey, SummaryObject};
pub use mapping::{CodeSegment, MappingSet, SummaryCodeMapping};
pub use sample::{Sample, TestResult};
pub use task::{MergedTask, TaskInput, TaskOutput, TaskVersion, VersionAnnotation};
