//! # Summary Lens Overlay
//!
//! Composes diff coloring and mapping highlights into a renderable token
//! stream.
//!
//! Two layers stack: the diff layer marks which chars of the new text were
//! inserted, and the mapping layer marks which chars belong to which
//! summary-to-code mapping. A mapped token wraps the diff-colored fragments
//! it covers, so diff coloring is never lost under a highlight.
//!
//! The renderer is pure: the hover-driven active mapping index is owned by
//! the presentation layer and passed in by value on every call. Re-rendering
//! with a different active index changes highlight states only, never the
//! text or the region boundaries.

mod palette;
mod render;
mod token;

pub use palette::{color_for, Rgb, PALETTE};
pub use render::{render_code, render_overlay};
pub use token::{
    CodeToken, Highlight, HighlightMode, OverlayToken, PlainSpans, SpanHighlighter, TextFragment,
};
