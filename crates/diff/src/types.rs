/// Edit operation kind in a symmetric diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

/// One run of a diff script: a kind plus the text it covers.
///
/// Concatenating `Equal` + `Delete` runs in order reconstructs the old text;
/// `Equal` + `Insert` runs reconstruct the new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    #[must_use]
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Equal,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Insert,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Delete,
            text: text.into(),
        }
    }

    /// Length of this run in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Kind of a forward-only run over the new text. Deletions have no extent in
/// the new text and are dropped when projecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Equal,
    Insert,
}

/// A contiguous `[start, end)` char span of the new text, tagged with whether
/// it was carried over or newly inserted. Runs tile the new text exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRun {
    pub start: usize,
    pub end: usize,
    pub kind: RunKind,
}

impl DiffRun {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Concatenation of equal + delete runs, i.e. the old text.
#[must_use]
pub fn reconstruct_old(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.kind != DiffKind::Insert)
        .map(|op| op.text.as_str())
        .collect()
}

/// Concatenation of equal + insert runs, i.e. the new text.
#[must_use]
pub fn reconstruct_new(ops: &[DiffOp]) -> String {
    ops.iter()
        .filter(|op| op.kind != DiffKind::Delete)
        .map(|op| op.text.as_str())
        .collect()
}
