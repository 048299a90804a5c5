//! The ordered matching strategies. Each takes the indexed code and a
//! segment query and returns the char spans it would claim, or `None` when
//! it does not apply or finds nothing.

use crate::bitap::{match_bitap, MAX_PATTERN};
use crate::distance::levenshtein;
use crate::region::Claims;
use crate::text::CodeText;

/// `[start, end)` char span.
pub(crate) type Span = (usize, usize);

/// Minimum window score for the long-snippet scan.
const LONG_MATCH_MIN_SCORE: f64 = 0.85;

/// Strategy 1: exact match inside the hinted line.
///
/// Searches the 1-based hinted line for the verbatim snippet, falling back
/// to the trimmed snippet. A hint pointing past the last line, or a snippet
/// absent from that line, yields `None`.
pub(crate) fn line_hinted(code: &CodeText, snippet: &str, line_hint: u32) -> Option<Vec<Span>> {
    let (line_start, line_text) = code.line(line_hint as usize - 1)?;

    let verbatim = line_text
        .find(snippet)
        .map(|byte| (byte, snippet.chars().count()));
    let fallback = || {
        let trimmed = snippet.trim();
        if trimmed.is_empty() {
            return None;
        }
        line_text
            .find(trimmed)
            .map(|byte| (byte, trimmed.chars().count()))
    };
    let (byte_in_line, needle_chars) = verbatim.or_else(fallback)?;

    let chars_before = line_text[..byte_in_line].chars().count();
    let start = line_start + chars_before;
    Some(vec![(start, start + needle_chars)])
}

/// Strategy 2: multi-line snippets matched line by line.
///
/// Both sides are split into trimmed lines; a window slides over the code's
/// lines looking for a contiguous run where each code line contains the
/// corresponding snippet line. Emits one span per matched (non-blank) line,
/// inside that line's boundaries, rather than one contiguous block.
pub(crate) fn multi_line(code: &CodeText, snippet: &str) -> Option<Vec<Span>> {
    if !snippet.contains('\n') {
        return None;
    }
    let snippet_lines: Vec<&str> = snippet.lines().map(str::trim).collect();
    if snippet_lines.is_empty() {
        return None;
    }

    let code_lines: Vec<(usize, &str)> = code.lines().collect();
    if snippet_lines.len() > code_lines.len() {
        return None;
    }

    for window_start in 0..=(code_lines.len() - snippet_lines.len()) {
        let window = &code_lines[window_start..window_start + snippet_lines.len()];
        let all_match = snippet_lines
            .iter()
            .zip(window)
            .all(|(needle, (_, line))| line.contains(needle));
        if !all_match {
            continue;
        }

        let mut spans = Vec::new();
        for (needle, (line_start, line)) in snippet_lines.iter().zip(window) {
            if needle.is_empty() {
                continue;
            }
            // contains() above guarantees find() succeeds.
            let byte = match line.find(needle) {
                Some(b) => b,
                None => continue,
            };
            let chars_before = line[..byte].chars().count();
            let start = line_start + chars_before;
            spans.push((start, start + needle.chars().count()));
        }
        if spans.is_empty() {
            return None;
        }
        return Some(spans);
    }
    None
}

/// Strategies 3 and 4: literal substring search.
///
/// Strict policy: the first occurrence whose span is unclaimed. Permissive
/// policy: every occurrence.
pub(crate) fn substring(code: &CodeText, needle: &str, claims: &Claims) -> Option<Vec<Span>> {
    if needle.is_empty() {
        return None;
    }
    if claims.is_strict() {
        code.occurrences(needle)
            .find(|&(start, end)| !claims.conflicts(start, end))
            .map(|span| vec![span])
    } else {
        let spans: Vec<Span> = code.occurrences(needle).collect();
        if spans.is_empty() {
            None
        } else {
            Some(spans)
        }
    }
}

/// Strategy 5: bitap approximate match for snippets at or under the 64-char
/// bound. `expected_loc` biases the search (the hinted line's offset when a
/// hint exists, else 0).
pub(crate) fn fuzzy_short(code: &CodeText, snippet: &str, expected_loc: usize) -> Option<Vec<Span>> {
    let pattern: Vec<char> = snippet.chars().collect();
    if pattern.is_empty() || pattern.len() > MAX_PATTERN {
        return None;
    }
    let start = match_bitap(code.chars(), &pattern, expected_loc)?;
    let end = (start + pattern.len()).min(code.char_len());
    if start >= end {
        return None;
    }
    Some(vec![(start, end)])
}

/// Strategy 6: long snippets located by sliding a 64-char window across the
/// code and scoring each window's edit distance against the snippet's first
/// 64 chars. The best window wins if its score reaches 0.85; the claimed
/// span extends to the snippet length, clamped to the end of the code.
pub(crate) fn fuzzy_long(code: &CodeText, snippet: &str) -> Option<Vec<Span>> {
    let pattern: Vec<char> = snippet.chars().collect();
    if pattern.len() <= MAX_PATTERN {
        return None;
    }
    let target = &pattern[..MAX_PATTERN];
    let code_chars = code.chars();
    if code_chars.is_empty() {
        return None;
    }

    let mut best: Option<(f64, usize)> = None;
    for start in 0..code_chars.len() {
        let window = &code_chars[start..(start + MAX_PATTERN).min(code_chars.len())];
        let distance = levenshtein(window, target);
        let score = (window.len() as f64 - distance as f64) / window.len() as f64;
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, start));
        }
    }

    let (score, start) = best?;
    if score < LONG_MATCH_MIN_SCORE {
        return None;
    }
    let end = (start + pattern.len()).min(code_chars.len());
    if start >= end {
        return None;
    }
    Some(vec![(start, end)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::OverlapPolicy;
    use pretty_assertions::assert_eq;

    const CODE: &str = "def f():\n    x = 1\n    return x\n";

    #[test]
    fn line_hint_selects_the_hinted_occurrence() {
        // "x" appears on lines 2 and 3; the hint must win over first-match.
        let code = CodeText::new("x = 1\ny = 2\nx = 1\n");
        let spans = line_hinted(&code, "x = 1", 3).expect("hinted match");
        assert_eq!(spans, vec![(12, 17)]);
    }

    #[test]
    fn line_hint_falls_back_to_trimmed_text() {
        let code = CodeText::new(CODE);
        // Verbatim has trailing whitespace that the line does not.
        let spans = line_hinted(&code, "x = 1  ", 2).expect("trimmed match");
        assert_eq!(spans, vec![(13, 18)]);
    }

    #[test]
    fn line_hint_out_of_range_is_none() {
        let code = CodeText::new(CODE);
        assert_eq!(line_hinted(&code, "x = 1", 99), None);
    }

    #[test]
    fn multi_line_emits_per_line_spans() {
        let code = CodeText::new(CODE);
        let spans = multi_line(&code, "x = 1\n    return x").expect("window match");
        // "x = 1" inside line 2, "return x" inside line 3.
        assert_eq!(spans, vec![(13, 18), (23, 31)]);
    }

    #[test]
    fn multi_line_requires_contiguous_lines() {
        let code = CodeText::new("a = 1\nunrelated\nb = 2\n");
        assert_eq!(multi_line(&code, "a = 1\nb = 2"), None);
    }

    #[test]
    fn substring_strict_skips_claimed_spans() {
        let code = CodeText::new("x = 1; x = 1;");
        let mut claims = Claims::new(OverlapPolicy::Strict);
        claims.claim(0, 5);
        let spans = substring(&code, "x = 1", &claims).expect("second occurrence");
        assert_eq!(spans, vec![(7, 12)]);
    }

    #[test]
    fn substring_permissive_returns_all_occurrences() {
        let code = CodeText::new("x = 1; x = 1;");
        let claims = Claims::new(OverlapPolicy::Permissive);
        let spans = substring(&code, "x = 1", &claims).expect("occurrences");
        assert_eq!(spans, vec![(0, 5), (7, 12)]);
    }

    #[test]
    fn fuzzy_short_places_misquoted_snippet() {
        let code = CodeText::new("total_amount = price * qty\n");
        let spans = fuzzy_short(&code, "total_amount=price*qty", 0).expect("fuzzy");
        let (start, end) = spans[0];
        assert!(start <= 4);
        assert!(end > start);
        assert!(end <= code.char_len());
    }

    #[test]
    fn fuzzy_long_accepts_only_close_windows() {
        let body = "fn compute_totals(items: &[Item]) -> u64 { items.iter().map(|i| i.price * i.qty).sum() }";
        let code = CodeText::new(body);
        // Same text with one char changed, longer than the 64-char bound.
        let snippet = body.replacen("totals", "totale", 1);
        assert!(snippet.chars().count() > 64);
        let spans = fuzzy_long(&code, &snippet).expect("long fuzzy");
        assert_eq!(spans[0].0, 0);

        let noise = "x".repeat(80);
        assert_eq!(fuzzy_long(&code, &noise), None);
    }
}
