/// Clamped navigation over a fixed-size collection.
///
/// Mirrors the viewer's prev/next/jump controls: movement never leaves
/// `0..len`, and an empty collection pins the cursor at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Jump to an index, clamped to the collection bounds.
    pub fn goto(&mut self, index: usize) {
        if self.len == 0 {
            self.index = 0;
        } else {
            self.index = index.min(self.len - 1);
        }
    }
}
