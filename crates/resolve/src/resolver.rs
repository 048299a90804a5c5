use log::debug;
use sumlens_protocol::{CodeSegment, SummaryCodeMapping};

use crate::region::{Claims, OverlapPolicy, Region};
use crate::strategies::{self, Span};
use crate::text::CodeText;

/// Resolve every mapping's code segments into char regions of `code`.
///
/// Deterministic for identical inputs. Segments that no strategy can place
/// are skipped; their mapping index remains valid for the segments that did
/// match. Output is sorted by `start`, ties by `mapping_index`.
#[must_use]
pub fn resolve_regions(
    code: &str,
    mappings: &[SummaryCodeMapping],
    policy: OverlapPolicy,
) -> Vec<Region> {
    let indexed = CodeText::new(code);
    let mut claims = Claims::new(policy);
    let mut regions: Vec<Region> = Vec::new();

    for (mapping_index, mapping) in mappings.iter().enumerate() {
        for segment in &mapping.code_segments {
            if segment.code.is_empty() {
                continue;
            }
            match resolve_segment(&indexed, segment, &claims) {
                Some(spans) => {
                    for (start, end) in spans {
                        claims.claim(start, end);
                        regions.push(Region {
                            start,
                            end,
                            mapping_index,
                        });
                    }
                }
                None => debug!(
                    "mapping {mapping_index}: segment not found in code ({} chars): {:?}",
                    segment.code.chars().count(),
                    preview(&segment.code),
                ),
            }
        }
    }

    regions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.mapping_index.cmp(&b.mapping_index))
    });
    regions
}

/// First matching strategy wins. Single-shot strategies whose candidate
/// collides with a claimed span are rejected here and the chain moves on;
/// the substring strategies retry later occurrences internally.
fn resolve_segment(code: &CodeText, segment: &CodeSegment, claims: &Claims) -> Option<Vec<Span>> {
    let verbatim = segment.code.as_str();
    let trimmed = verbatim.trim();

    // 1. Line-hinted exact match.
    if let Some(line_hint) = segment.line {
        let spans = strategies::line_hinted(code, verbatim, line_hint);
        if let Some(spans) = claimable(spans, claims) {
            return Some(spans);
        }
    }

    // 2. Multi-line window match.
    if let Some(spans) = claimable(strategies::multi_line(code, verbatim), claims) {
        return Some(spans);
    }

    // 3. Exact substring.
    if let Some(spans) = strategies::substring(code, verbatim, claims) {
        return Some(spans);
    }

    // 4. Trimmed substring, only when trimming changed anything.
    if trimmed != verbatim {
        if let Some(spans) = strategies::substring(code, trimmed, claims) {
            return Some(spans);
        }
    }

    // 5/6. Fuzzy fallbacks, biased toward the hinted line when present.
    let expected_loc = segment
        .line
        .and_then(|line| code.line(line as usize - 1))
        .map_or(0, |(start, _)| start);
    if let Some(spans) = claimable(strategies::fuzzy_short(code, trimmed, expected_loc), claims) {
        return Some(spans);
    }
    if let Some(spans) = claimable(strategies::fuzzy_long(code, trimmed), claims) {
        return Some(spans);
    }

    None
}

fn claimable(spans: Option<Vec<Span>>, claims: &Claims) -> Option<Vec<Span>> {
    let spans = spans?;
    if spans.is_empty() || claims.conflicts_any(&spans) {
        None
    } else {
        Some(spans)
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 40;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{head}…")
    }
}
