use sumlens_diff::RunKind;

use crate::palette::Rgb;

/// A diff-colored leaf: a substring plus whether it was carried over or
/// inserted relative to the old text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    pub kind: RunKind,
}

/// Intensity of a mapping highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The active mapping: full-intensity background.
    Full,
    /// Inactive mapping under [`HighlightMode::ShowAll`]: low-opacity tint.
    Faded,
    /// Inactive mapping under [`HighlightMode::Spotlight`]: no highlight is
    /// drawn, but the token keeps its text and boundaries.
    Hidden,
}

/// Which inactive mappings are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightMode {
    /// Every mapping is tinted; the active one at full intensity.
    #[default]
    ShowAll,
    /// Only the active mapping is highlighted.
    Spotlight,
}

/// One token of the composed summary overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayToken {
    /// Text outside any mapping region.
    Plain(TextFragment),
    /// A mapping region wrapping its diff-colored fragments.
    Mapped {
        mapping_index: usize,
        highlight: Highlight,
        color: Rgb,
        fragments: Vec<TextFragment>,
    },
}

impl OverlayToken {
    /// The token's text, concatenated over nested fragments.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Plain(fragment) => fragment.text.clone(),
            Self::Mapped { fragments, .. } => {
                fragments.iter().map(|f| f.text.as_str()).collect()
            }
        }
    }
}

/// One token of a code-only overlay (no diff layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeToken {
    pub text: String,
    /// `None` outside mapping regions.
    pub mapping: Option<(usize, Highlight, Rgb)>,
}

/// External tokenize-and-colorize collaborator. The core hands each code
/// token's text over independently; language grammars live behind this seam.
pub trait SpanHighlighter {
    fn highlight_span(&self, code: &str) -> String;
}

/// Identity collaborator: spans pass through unstyled.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainSpans;

impl SpanHighlighter for PlainSpans {
    fn highlight_span(&self, code: &str) -> String {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_token_text_concatenates_fragments() {
        let token = OverlayToken::Mapped {
            mapping_index: 0,
            highlight: Highlight::Full,
            color: Rgb { r: 0, g: 0, b: 0 },
            fragments: vec![
                TextFragment {
                    text: "foo".to_string(),
                    kind: RunKind::Equal,
                },
                TextFragment {
                    text: "bar".to_string(),
                    kind: RunKind::Insert,
                },
            ],
        };
        assert_eq!(token.text(), "foobar");
    }

    #[test]
    fn plain_spans_pass_code_through() {
        let code = "let x = 1;";
        assert_eq!(PlainSpans.highlight_span(code), code);
    }
}
