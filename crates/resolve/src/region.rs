/// A resolved `[start, end)` char span of a specific text, tagged with the
/// index of the mapping that produced it.
///
/// Regions are a derived view: recomputed from `(text, mappings)` on demand,
/// never persisted. Invariant: `start < end <= text.chars().count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
    pub mapping_index: usize,
}

impl Region {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub const fn overlaps(&self, start: usize, end: usize) -> bool {
        !(end <= self.start || start >= self.end)
    }
}

/// Whether one resolution call may assign the same character to more than one
/// mapping. Never mixed within a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Reject candidates that overlap an already-claimed span; substring
    /// strategies retry later occurrences. Used where each char must belong
    /// to at most one mapping (the overlay walk).
    #[default]
    Strict,
    /// Accept every match; multiple mappings may cover the same chars.
    Permissive,
}

/// Spotlight filter: the regions belonging to one active mapping index.
#[must_use]
pub fn filter_active(regions: &[Region], active: usize) -> Vec<Region> {
    regions
        .iter()
        .copied()
        .filter(|r| r.mapping_index == active)
        .collect()
}

/// Claimed-span bookkeeping for [`OverlapPolicy::Strict`].
#[derive(Debug, Default)]
pub(crate) struct Claims {
    policy: OverlapPolicy,
    spans: Vec<(usize, usize)>,
}

impl Claims {
    pub(crate) fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            spans: Vec::new(),
        }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.policy == OverlapPolicy::Strict
    }

    /// Under the permissive policy nothing ever conflicts.
    pub(crate) fn conflicts(&self, start: usize, end: usize) -> bool {
        match self.policy {
            OverlapPolicy::Permissive => false,
            OverlapPolicy::Strict => self
                .spans
                .iter()
                .any(|&(a, b)| !(end <= a || start >= b)),
        }
    }

    pub(crate) fn conflicts_any(&self, spans: &[(usize, usize)]) -> bool {
        spans.iter().any(|&(s, e)| self.conflicts(s, e))
    }

    pub(crate) fn claim(&mut self, start: usize, end: usize) {
        if self.policy == OverlapPolicy::Strict {
            self.spans.push((start, end));
        }
    }
}
