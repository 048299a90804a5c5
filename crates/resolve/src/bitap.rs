//! Bitap approximate pattern matching, in the diff-match-patch `match_main`
//! tradition: find where a short pattern most plausibly occurs in a text,
//! tolerating a bounded error rate and penalizing distance from an expected
//! location.

use std::collections::HashMap;

/// Longest pattern the bit-parallel search supports (one bit per char).
pub(crate) const MAX_PATTERN: usize = 64;

/// Accept a candidate only if its combined error/distance score stays at or
/// under this.
const MATCH_THRESHOLD: f64 = 0.5;

/// How far from the expected location a match may drift before the distance
/// penalty equals a full error.
const MATCH_DISTANCE: usize = 1000;

/// Best location of `pattern` in `text` near `expected_loc`, as a char
/// offset, or `None` when nothing scores under the acceptance threshold.
///
/// Patterns longer than [`MAX_PATTERN`] chars are rejected outright; callers
/// fall back to the windowed long-snippet scan.
#[must_use]
pub fn match_bitap(text: &[char], pattern: &[char], expected_loc: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > MAX_PATTERN {
        return None;
    }
    if text.is_empty() {
        return None;
    }
    let loc = expected_loc.min(text.len());

    // Shortcut: an exact occurrence at the expected location.
    if loc + pattern.len() <= text.len() && &text[loc..loc + pattern.len()] == pattern {
        return Some(loc);
    }

    let alphabet = build_alphabet(pattern);
    let match_mask: u64 = 1 << (pattern.len() - 1);
    let score = |errors: usize, pos: usize| -> f64 {
        let accuracy = errors as f64 / pattern.len() as f64;
        let proximity = loc.abs_diff(pos);
        accuracy + proximity as f64 / MATCH_DISTANCE as f64
    };

    // Prime the threshold with any exact occurrences near the expected
    // location, so the error-tolerant scan only has to beat them.
    let mut score_threshold = MATCH_THRESHOLD;
    if let Some(pos) = find_sub(text, pattern, 0) {
        score_threshold = score_threshold.min(score(0, pos));
        if let Some(later) = find_sub(text, pattern, pos + 1) {
            score_threshold = score_threshold.min(score(0, later));
        }
    }

    let mut best_loc: Option<usize> = None;
    let mut bin_max = pattern.len() + text.len();
    let mut last_rd: Vec<u64> = Vec::new();

    for d in 0..pattern.len() {
        // Binary search for the widest window still able to beat the
        // current threshold at this error level.
        let mut bin_min = 0usize;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if score(d, loc + bin_mid) <= score_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = 1.max(loc.saturating_sub(bin_mid).saturating_add(1));
        let finish = (loc + bin_mid).min(text.len()) + pattern.len();

        let mut rd = vec![0u64; finish + 2];
        rd[finish + 1] = (1u64 << d) - 1;

        let mut j = finish;
        while j >= start {
            let char_match = if j - 1 < text.len() {
                *alphabet.get(&text[j - 1]).unwrap_or(&0)
            } else {
                0
            };
            rd[j] = if d == 0 {
                ((rd[j + 1] << 1) | 1) & char_match
            } else {
                (((rd[j + 1] << 1) | 1) & char_match)
                    | (((last_rd[j + 1] | last_rd[j]) << 1) | 1)
                    | last_rd[j + 1]
            };
            if rd[j] & match_mask != 0 {
                let candidate_score = score(d, j - 1);
                if candidate_score <= score_threshold {
                    score_threshold = candidate_score;
                    best_loc = Some(j - 1);
                    if j - 1 > loc {
                        // Match past the expected location: keep scanning
                        // left for a mirror candidate.
                        start = 1.max((2 * loc).saturating_sub(j - 1));
                    } else {
                        break;
                    }
                }
            }
            j -= 1;
        }

        // No point raising the error level if even a perfect hit at the
        // expected location could not beat the threshold.
        if score(d + 1, loc) > score_threshold {
            break;
        }
        last_rd = rd;
    }

    best_loc
}

/// Bitmask per pattern char: bit i set means the char appears at position i.
fn build_alphabet(pattern: &[char]) -> HashMap<char, u64> {
    let mut alphabet: HashMap<char, u64> = HashMap::new();
    for (i, &ch) in pattern.iter().enumerate() {
        *alphabet.entry(ch).or_insert(0) |= 1 << i;
    }
    alphabet
}

/// First occurrence of `needle` in `haystack[from..]`, as an absolute offset.
fn find_sub(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() || needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn exact_match_is_found() {
        let text = chars("total_amount = price * qty");
        let pattern = chars("price");
        assert_eq!(match_bitap(&text, &pattern, 0), Some(15));
    }

    #[test]
    fn approximate_match_tolerates_missing_spaces() {
        let text = chars("total_amount = price * qty");
        let pattern = chars("total_amount=price*qty");
        let loc = match_bitap(&text, &pattern, 0).expect("fuzzy match");
        // Start may drift by up to the error count, but must stay near 0.
        assert!(loc <= 4, "loc = {loc}");
    }

    #[test]
    fn hopeless_pattern_is_rejected() {
        let text = chars("def frobnicate(): pass");
        let pattern = chars("zzzzzzzzzzzzzzzz");
        assert_eq!(match_bitap(&text, &pattern, 0), None);
    }

    #[test]
    fn over_long_pattern_is_rejected() {
        let text = chars("abc");
        let pattern = chars(&"x".repeat(MAX_PATTERN + 1));
        assert_eq!(match_bitap(&text, &pattern, 0), None);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(match_bitap(&[], &chars("x"), 0), None);
        assert_eq!(match_bitap(&chars("x"), &[], 0), None);
    }

    #[test]
    fn expected_location_breaks_ties() {
        // Pattern occurs twice; the hint pulls the match to the second
        // occurrence.
        let text_str = format!("x = 1;{}x = 1;", " ".repeat(35));
        let text = chars(&text_str);
        let pattern = chars("x = 1");
        let near_second = match_bitap(&text, &pattern, 41).expect("match");
        assert_eq!(near_second, 41);
    }
}
