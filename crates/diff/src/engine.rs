use similar::{ChangeTag, TextDiff};

use crate::cleanup::cleanup;
use crate::types::{DiffKind, DiffOp, DiffRun, RunKind};

/// Character diff between two strings, semantically cleaned.
///
/// Equal + delete runs concatenate to `old`; equal + insert runs concatenate
/// to `new`. Identical inputs yield a single equal run; an empty side yields
/// a single insert or delete; two empty strings yield no ops.
#[must_use]
pub fn diff(old: &str, new: &str) -> Vec<DiffOp> {
    if old == new {
        if old.is_empty() {
            return Vec::new();
        }
        return vec![DiffOp::equal(old)];
    }

    let text_diff = TextDiff::from_chars(old, new);
    let mut ops: Vec<DiffOp> = Vec::new();
    for change in text_diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => DiffKind::Equal,
            ChangeTag::Insert => DiffKind::Insert,
            ChangeTag::Delete => DiffKind::Delete,
        };
        match ops.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => ops.push(DiffOp {
                kind,
                text: change.value().to_string(),
            }),
        }
    }

    cleanup(ops)
}

/// Forward-only projection of `diff(old, new)` onto the new text: delete runs
/// are dropped, the rest become `[start, end)` char spans tiling `new` from 0
/// to `new.chars().count()`.
#[must_use]
pub fn diff_runs(old: &str, new: &str) -> Vec<DiffRun> {
    let mut runs = Vec::new();
    let mut cursor = 0usize;
    for op in diff(old, new) {
        let kind = match op.kind {
            DiffKind::Delete => continue,
            DiffKind::Equal => RunKind::Equal,
            DiffKind::Insert => RunKind::Insert,
        };
        let len = op.char_len();
        runs.push(DiffRun {
            start: cursor,
            end: cursor + len,
            kind,
        });
        cursor += len;
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{reconstruct_new, reconstruct_old};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn identical_strings_yield_single_equal_run() {
        let ops = diff("same text", "same text");
        assert_eq!(ops, vec![DiffOp::equal("same text")]);
    }

    #[test]
    fn empty_old_yields_single_insert() {
        let ops = diff("", "hello");
        assert_eq!(ops, vec![DiffOp::insert("hello")]);
    }

    #[test]
    fn empty_new_yields_single_delete() {
        let ops = diff("hello", "");
        assert_eq!(ops, vec![DiffOp::delete("hello")]);
    }

    #[test]
    fn both_empty_yields_no_ops() {
        assert!(diff("", "").is_empty());
    }

    #[test]
    fn appended_suffix_is_one_insert() {
        let ops = diff("foo", "foobar");
        assert_eq!(ops, vec![DiffOp::equal("foo"), DiffOp::insert("bar")]);
    }

    #[test]
    fn cleanup_coalesces_word_replacement() {
        // Raw LCS would thread shared chars of "quick"/"slow" through tiny
        // equalities; the cleaned diff reads as one replacement.
        let ops = diff("the quick fox", "the slow fox");
        assert_eq!(
            ops,
            vec![
                DiffOp::equal("the "),
                DiffOp::delete("quick"),
                DiffOp::insert("slow"),
                DiffOp::equal(" fox"),
            ]
        );
    }

    #[test]
    fn runs_tile_the_new_text() {
        let runs = diff_runs("foo", "foobar");
        assert_eq!(
            runs,
            vec![
                DiffRun {
                    start: 0,
                    end: 3,
                    kind: RunKind::Equal
                },
                DiffRun {
                    start: 3,
                    end: 6,
                    kind: RunKind::Insert
                },
            ]
        );
    }

    #[test]
    fn runs_handle_multibyte_chars() {
        let runs = diff_runs("héllo", "héllo wörld");
        let total: usize = runs.iter().map(DiffRun::len).sum();
        assert_eq!(total, "héllo wörld".chars().count());
        assert_eq!(runs.last().map(|r| r.kind), Some(RunKind::Insert));
    }

    proptest! {
        #[test]
        fn proptest_round_trip(old in ".{0,40}", new in ".{0,40}") {
            let ops = diff(&old, &new);
            prop_assert_eq!(reconstruct_old(&ops), old);
            prop_assert_eq!(reconstruct_new(&ops), new);
        }

        #[test]
        fn proptest_runs_are_contiguous(old in ".{0,40}", new in ".{0,40}") {
            let runs = diff_runs(&old, &new);
            let mut cursor = 0usize;
            for run in &runs {
                prop_assert_eq!(run.start, cursor);
                prop_assert!(run.end > run.start);
                cursor = run.end;
            }
            prop_assert_eq!(cursor, new.chars().count());
        }

        #[test]
        fn proptest_identity_is_single_equal(text in ".{1,40}") {
            let ops = diff(&text, &text);
            prop_assert_eq!(ops.len(), 1);
            prop_assert_eq!(ops[0].kind, DiffKind::Equal);
        }
    }
}
