//! # Summary Lens Resolve
//!
//! The region resolver: turns declared summary-to-code mapping records into
//! concrete character ranges inside a code blob.
//!
//! Declared snippets are messy (approximate, duplicated, multi-line,
//! whitespace-inexact, occasionally misquoted), so resolution runs an ordered
//! fallback chain per segment, from cheap and exact to fuzzy:
//!
//! 1. line-hinted exact match
//! 2. multi-line window match
//! 3. exact substring
//! 4. trimmed substring
//! 5. bitap approximate match (short snippets)
//! 6. windowed edit-distance scan (long snippets)
//!
//! The first strategy that produces an acceptable match wins for that
//! segment. A segment no strategy can place is logged and skipped; the
//! mapping's phrase still renders, just without a code highlight.
//!
//! Whether matches may overlap already-claimed spans is an explicit
//! [`OverlapPolicy`]: the strict variant backs the one-mapping-per-char
//! overlay view, the permissive variant the show-everything view.
//!
//! All offsets are char offsets, matching `sumlens-diff`.

mod bitap;
mod distance;
mod phrase;
mod region;
mod resolver;
mod strategies;
mod text;

pub use bitap::match_bitap;
pub use distance::levenshtein;
pub use phrase::resolve_phrase_regions;
pub use region::{filter_active, OverlapPolicy, Region};
pub use resolver::resolve_regions;
