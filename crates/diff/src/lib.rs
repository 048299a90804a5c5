//! # Summary Lens Diff
//!
//! Character-level text diffing with semantic cleanup.
//!
//! The raw LCS diff (via the `similar` crate) is correct but visually noisy:
//! it happily produces long chains of one-character alternating edits. The
//! cleanup pipeline coalesces those fragments into fewer, larger spans that
//! read like the change a human would describe, which is what the viewer
//! displays.
//!
//! All offsets are `char` offsets, not byte offsets. Mapping regions and
//! overlay tokens elsewhere in the workspace share that convention.

mod cleanup;
mod engine;
mod types;

pub use engine::{diff, diff_runs};
pub use types::{reconstruct_new, reconstruct_old, DiffKind, DiffOp, DiffRun, RunKind};
