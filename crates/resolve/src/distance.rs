/// Levenshtein edit distance between two char slices, two-row DP.
///
/// Callers keep both sides at or under the 64-char fuzzy window, so the
/// quadratic cost is bounded.
#[must_use]
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        levenshtein(&a, &b)
    }

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(dist("kitten", "kitten"), 0);
    }

    #[test]
    fn classic_cases() {
        assert_eq!(dist("kitten", "sitting"), 3);
        assert_eq!(dist("flaw", "lawn"), 2);
        assert_eq!(dist("", "abc"), 3);
        assert_eq!(dist("abc", ""), 3);
    }

    #[test]
    fn whitespace_removal_costs_the_removed_chars() {
        assert_eq!(dist("total = price * qty", "total=price*qty"), 4);
    }
}
