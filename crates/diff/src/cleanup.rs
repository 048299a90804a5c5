//! Post-processing of raw LCS edit scripts.
//!
//! Two passes, in the spirit of diff-match-patch's semantic cleanup:
//!
//! 1. `merge`: coalesce adjacent runs of the same kind and factor common
//!    prefixes/suffixes of paired delete+insert blocks back into the
//!    surrounding equalities.
//! 2. `semantic`: delete short equalities that sit between larger edits on
//!    both sides, turning `del a, eq x, ins b` chatter into one coherent
//!    replacement, then re-merge.

use crate::types::{DiffKind, DiffOp};

/// Full cleanup pipeline. Idempotent.
pub fn cleanup(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    semantic(merge(ops))
}

/// Common prefix length of two strings, in chars.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Common suffix length of two strings, in chars.
fn common_suffix_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn skip_chars(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}

fn push_equal(out: &mut Vec<DiffOp>, text: String) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.kind == DiffKind::Equal => last.text.push_str(&text),
        _ => out.push(DiffOp::equal(text)),
    }
}

/// Coalesce adjacent same-kind runs; within each delete+insert block, factor
/// shared leading/trailing text into the neighbouring equalities, ordering
/// the remaining delete before the insert.
pub fn merge(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut out: Vec<DiffOp> = Vec::new();
    let mut del = String::new();
    let mut ins = String::new();

    // Sentinel equality flushes the final edit block.
    for op in ops.into_iter().chain(std::iter::once(DiffOp::equal(""))) {
        match op.kind {
            DiffKind::Delete => del.push_str(&op.text),
            DiffKind::Insert => ins.push_str(&op.text),
            DiffKind::Equal => {
                let mut eq_text = op.text;
                if !del.is_empty() && !ins.is_empty() {
                    let prefix = common_prefix_len(&del, &ins);
                    if prefix > 0 {
                        push_equal(&mut out, take_chars(&del, prefix));
                        del = skip_chars(&del, prefix);
                        ins = skip_chars(&ins, prefix);
                    }
                    let suffix = common_suffix_len(&del, &ins);
                    if suffix > 0 {
                        let del_len = del.chars().count();
                        let ins_len = ins.chars().count();
                        eq_text = format!("{}{eq_text}", skip_chars(&del, del_len - suffix));
                        del = take_chars(&del, del_len - suffix);
                        ins = take_chars(&ins, ins_len - suffix);
                    }
                }
                if !del.is_empty() {
                    out.push(DiffOp::delete(std::mem::take(&mut del)));
                }
                if !ins.is_empty() {
                    out.push(DiffOp::insert(std::mem::take(&mut ins)));
                }
                push_equal(&mut out, eq_text);
            }
        }
    }
    out
}

/// Eliminate equalities that are no longer than the larger edit on either
/// side of them. The freed text is re-expressed as a delete+insert pair,
/// which `merge` then fuses with its neighbours.
pub fn semantic(mut ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut changes = false;
    // Indices of candidate equalities; the top is the one under consideration.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    // Edit sizes before and after the candidate equality.
    let mut ins_before = 0usize;
    let mut del_before = 0usize;
    let mut ins_after = 0usize;
    let mut del_after = 0usize;

    let mut ptr = 0usize;
    while ptr < ops.len() {
        if ops[ptr].kind == DiffKind::Equal {
            equalities.push(ptr);
            ins_before = ins_after;
            del_before = del_after;
            ins_after = 0;
            del_after = 0;
            last_equality = Some(ptr);
            ptr += 1;
            continue;
        }

        let len = ops[ptr].char_len();
        match ops[ptr].kind {
            DiffKind::Insert => ins_after += len,
            DiffKind::Delete => del_after += len,
            DiffKind::Equal => unreachable!(),
        }

        let eliminate = last_equality.is_some_and(|eq| {
            let eq_len = ops[eq].char_len();
            eq_len > 0
                && eq_len <= ins_before.max(del_before)
                && eq_len <= ins_after.max(del_after)
        });

        if eliminate {
            let eq = last_equality.take().expect("checked above");
            let text = ops[eq].text.clone();
            ops[eq] = DiffOp::delete(text.clone());
            ops.insert(eq + 1, DiffOp::insert(text));

            // Drop the eliminated equality and rewind to the one before it;
            // the split may have made that one eliminable too.
            equalities.pop();
            equalities.pop();
            ptr = equalities.last().map_or(0, |&e| e + 1);
            ins_before = 0;
            del_before = 0;
            ins_after = 0;
            del_after = 0;
            changes = true;
            continue;
        }

        ptr += 1;
    }

    if changes {
        merge(ops)
    } else {
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{reconstruct_new, reconstruct_old};
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_coalesces_adjacent_runs() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::equal("b"),
            DiffOp::delete("x"),
            DiffOp::delete("y"),
        ];
        let merged = merge(ops);
        assert_eq!(merged, vec![DiffOp::equal("ab"), DiffOp::delete("xy")]);
    }

    #[test]
    fn merge_factors_common_prefix_and_suffix() {
        // delete "abcde" / insert "abfde" share "ab" and "de".
        let ops = vec![DiffOp::delete("abcde"), DiffOp::insert("abfde")];
        let merged = merge(ops);
        assert_eq!(
            merged,
            vec![
                DiffOp::equal("ab"),
                DiffOp::delete("c"),
                DiffOp::insert("f"),
                DiffOp::equal("de"),
            ]
        );
    }

    #[test]
    fn semantic_drops_small_sandwiched_equality() {
        let ops = vec![
            DiffOp::delete("abc"),
            DiffOp::equal("x"),
            DiffOp::insert("defg"),
        ];
        let cleaned = semantic(ops);
        assert_eq!(
            cleaned,
            vec![DiffOp::delete("abcx"), DiffOp::insert("xdefg")]
        );
    }

    #[test]
    fn semantic_keeps_large_equality() {
        let ops = vec![
            DiffOp::delete("ab"),
            DiffOp::equal("a stable middle"),
            DiffOp::insert("cd"),
        ];
        let cleaned = semantic(ops.clone());
        assert_eq!(cleaned, ops);
    }

    #[test]
    fn cleanup_preserves_both_reconstructions() {
        let ops = vec![
            DiffOp::delete("one"),
            DiffOp::equal("x"),
            DiffOp::insert("four"),
            DiffOp::equal("y"),
            DiffOp::delete("two"),
            DiffOp::insert("three"),
        ];
        let old = reconstruct_old(&ops);
        let new = reconstruct_new(&ops);
        let cleaned = cleanup(ops);
        assert_eq!(reconstruct_old(&cleaned), old);
        assert_eq!(reconstruct_new(&cleaned), new);
    }
}
