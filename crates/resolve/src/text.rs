//! Char-offset indexing over a code blob.
//!
//! Strategies search with byte-based `str` operations but report char
//! offsets; this wrapper owns the conversions so they happen in one place.

/// A code string with its char/byte index and line table, built once per
/// resolution call.
pub(crate) struct CodeText<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus a trailing sentinel at `text.len()`.
    char_bytes: Vec<usize>,
    /// Char offset of the start of each line (split on `'\n'`).
    line_starts: Vec<usize>,
}

impl<'a> CodeText<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut char_bytes: Vec<usize> = Vec::new();
        let mut chars: Vec<char> = Vec::new();
        let mut line_starts = vec![0usize];
        for (i, (byte, ch)) in text.char_indices().enumerate() {
            char_bytes.push(byte);
            chars.push(ch);
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        char_bytes.push(text.len());

        Self {
            text,
            chars,
            char_bytes,
            line_starts,
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in chars.
    pub(crate) fn char_len(&self) -> usize {
        self.char_bytes.len() - 1
    }

    /// Char offset for a byte offset that falls on a char boundary.
    pub(crate) fn char_index(&self, byte: usize) -> usize {
        self.char_bytes
            .binary_search(&byte)
            .unwrap_or_else(|insert| insert)
    }

    /// Lines of the text, as `(char offset of line start, line text)`.
    pub(crate) fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.text
            .split('\n')
            .zip(self.line_starts.iter().copied())
            .map(|(line, start)| (start, line))
    }

    /// One line by 0-based index.
    pub(crate) fn line(&self, index: usize) -> Option<(usize, &'a str)> {
        self.lines().nth(index)
    }

    /// Char spans of every occurrence of `needle`, in order. Counts
    /// overlapping occurrences: the search resumes one char past each match
    /// start, so `"aa"` occurs twice in `"aaa"`.
    pub(crate) fn occurrences<'b>(
        &'b self,
        needle: &'b str,
    ) -> impl Iterator<Item = (usize, usize)> + 'b {
        let needle_chars = needle.chars().count();
        let mut from = 0usize;
        std::iter::from_fn(move || {
            if needle.is_empty() || from > self.text.len() {
                return None;
            }
            let byte = self.text[from..].find(needle)? + from;
            let first = self.text[byte..].chars().next().map_or(1, char::len_utf8);
            from = byte + first;
            let start = self.char_index(byte);
            Some((start, start + needle_chars))
        })
    }
}
