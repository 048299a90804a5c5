use sumlens_diff::{diff_runs, DiffRun};
use sumlens_protocol::SummaryCodeMapping;
use sumlens_resolve::{resolve_phrase_regions, resolve_regions, OverlapPolicy, Region};

use crate::palette::color_for;
use crate::token::{
    CodeToken, Highlight, HighlightMode, OverlayToken, SpanHighlighter, TextFragment,
};

/// Compose the summary overlay: diff coloring layered under mapping
/// highlights.
///
/// Regions come from the strict resolver: in this view each char belongs to
/// at most one mapping. `active` selects which mapping renders at full
/// intensity; everything else fades (or hides, under
/// [`HighlightMode::Spotlight`]). Concatenating the returned tokens' text
/// always reproduces `new` exactly, whatever `active` is.
#[must_use]
pub fn render_overlay(
    old: &str,
    new: &str,
    mappings: &[SummaryCodeMapping],
    active: Option<usize>,
    mode: HighlightMode,
) -> Vec<OverlayToken> {
    let runs = diff_runs(old, new);
    let regions = resolve_phrase_regions(new, mappings, OverlapPolicy::Strict);
    let chars: Vec<char> = new.chars().collect();

    let mut tokens: Vec<OverlayToken> = Vec::new();
    let mut pos = 0usize;

    for region in &regions {
        if pos < region.start {
            tokens.extend(
                fragments_between(&chars, &runs, pos, region.start)
                    .into_iter()
                    .map(OverlayToken::Plain),
            );
        }

        let highlight = highlight_for(region.mapping_index, active, mode);
        tokens.push(OverlayToken::Mapped {
            mapping_index: region.mapping_index,
            highlight,
            color: color_for(region.mapping_index),
            fragments: fragments_between(&chars, &runs, region.start, region.end),
        });
        pos = region.end;
    }

    if pos < chars.len() {
        tokens.extend(
            fragments_between(&chars, &runs, pos, chars.len())
                .into_iter()
                .map(OverlayToken::Plain),
        );
    }

    tokens
}

/// Code-only overlay: mapping highlights over one code version, no diff
/// layer. Each span's text is handed independently to the tokenize/colorize
/// collaborator; pass [`crate::PlainSpans`] to keep the raw text.
#[must_use]
pub fn render_code(
    code: &str,
    mappings: &[SummaryCodeMapping],
    active: Option<usize>,
    mode: HighlightMode,
    highlighter: &dyn SpanHighlighter,
) -> Vec<CodeToken> {
    let regions = resolve_regions(code, mappings, OverlapPolicy::Strict);
    let chars: Vec<char> = code.chars().collect();

    let mut tokens: Vec<CodeToken> = Vec::new();
    let mut pos = 0usize;

    for region in &regions {
        if pos < region.start {
            tokens.push(CodeToken {
                text: highlighter.highlight_span(&slice(&chars, pos, region.start)),
                mapping: None,
            });
        }
        let highlight = highlight_for(region.mapping_index, active, mode);
        tokens.push(CodeToken {
            text: highlighter.highlight_span(&slice(&chars, region.start, region.end)),
            mapping: Some((region.mapping_index, highlight, color_for(region.mapping_index))),
        });
        pos = region.end;
    }

    if pos < chars.len() {
        tokens.push(CodeToken {
            text: highlighter.highlight_span(&slice(&chars, pos, chars.len())),
            mapping: None,
        });
    }

    tokens
}

fn highlight_for(mapping_index: usize, active: Option<usize>, mode: HighlightMode) -> Highlight {
    if active == Some(mapping_index) {
        Highlight::Full
    } else {
        match mode {
            HighlightMode::ShowAll => Highlight::Faded,
            HighlightMode::Spotlight => Highlight::Hidden,
        }
    }
}

/// Diff-colored fragments covering `[start, end)`, clipped from the runs.
fn fragments_between(
    chars: &[char],
    runs: &[DiffRun],
    start: usize,
    end: usize,
) -> Vec<TextFragment> {
    let mut fragments = Vec::new();
    for run in runs {
        if run.end <= start {
            continue;
        }
        if run.start >= end {
            break;
        }
        let clip_start = run.start.max(start);
        let clip_end = run.end.min(end);
        if clip_start >= clip_end {
            continue;
        }
        fragments.push(TextFragment {
            text: slice(chars, clip_start, clip_end),
            kind: run.kind,
        });
    }
    fragments
}

fn slice(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}
