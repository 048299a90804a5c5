//! ANSI rendering for diff ops, overlay tokens, and verdicts.
//!
//! `console` disables styling automatically when stdout is not a tty, so
//! piped output stays plain text.

use console::style;
use sumlens_diff::{DiffKind, DiffOp, RunKind};
use sumlens_overlay::{CodeToken, Highlight, OverlayToken, Rgb, TextFragment};
use sumlens_protocol::TestResult;

pub(crate) fn styled_diff(ops: &[DiffOp]) -> String {
    let mut out = String::new();
    for op in ops {
        match op.kind {
            DiffKind::Equal => out.push_str(&op.text),
            DiffKind::Insert => out.push_str(&style(&op.text).green().to_string()),
            DiffKind::Delete => {
                out.push_str(&style(&op.text).red().strikethrough().to_string());
            }
        }
    }
    out
}

pub(crate) fn styled_overlay(tokens: &[OverlayToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            OverlayToken::Plain(frag) => out.push_str(&styled_fragment(frag)),
            OverlayToken::Mapped {
                highlight,
                color,
                fragments,
                ..
            } => {
                for frag in fragments {
                    out.push_str(&styled_mapped_fragment(frag, *highlight, *color));
                }
            }
        }
    }
    out
}

pub(crate) fn styled_code(tokens: &[CodeToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.mapping {
            None | Some((_, Highlight::Hidden, _)) => out.push_str(&token.text),
            Some((_, Highlight::Full, color)) => out.push_str(
                &style(&token.text)
                    .black()
                    .on_color256(ansi256(color))
                    .to_string(),
            ),
            Some((_, Highlight::Faded, _)) => {
                out.push_str(&style(&token.text).dim().to_string());
            }
        }
    }
    out
}

pub(crate) fn verdict(result: TestResult) -> String {
    match result {
        TestResult::Pass => style("PASS").green().to_string(),
        TestResult::Fail => style("FAIL").red().to_string(),
        TestResult::Unknown => "?".to_string(),
    }
}

pub(crate) fn verdict_short(result: TestResult) -> String {
    match result {
        TestResult::Pass => style("P").green().to_string(),
        TestResult::Fail => style("F").red().to_string(),
        TestResult::Unknown => "?".to_string(),
    }
}

fn styled_fragment(frag: &TextFragment) -> String {
    match frag.kind {
        RunKind::Equal => frag.text.clone(),
        RunKind::Insert => style(&frag.text).green().to_string(),
    }
}

fn styled_mapped_fragment(frag: &TextFragment, highlight: Highlight, color: Rgb) -> String {
    match highlight {
        // Inserted chars stay distinguishable under the mapping background
        Highlight::Full => {
            let mut styled = style(&frag.text).black().on_color256(ansi256(color));
            if frag.kind == RunKind::Insert {
                styled = styled.underlined();
            }
            styled.to_string()
        }
        Highlight::Faded => match frag.kind {
            RunKind::Equal => style(&frag.text).dim().to_string(),
            RunKind::Insert => style(&frag.text).green().dim().to_string(),
        },
        Highlight::Hidden => styled_fragment(frag),
    }
}

/// Nearest 6x6x6 color-cube index for a palette color.
fn ansi256(color: Rgb) -> u8 {
    let quant = |c: u8| u8::try_from(u16::from(c) * 5 / 255).unwrap_or(5);
    16 + 36 * quant(color.r) + 6 * quant(color.g) + quant(color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ansi256_maps_cube_corners() {
        assert_eq!(ansi256(Rgb { r: 0, g: 0, b: 0 }), 16);
        assert_eq!(
            ansi256(Rgb {
                r: 255,
                g: 255,
                b: 255
            }),
            231
        );
    }

    #[test]
    fn styled_diff_keeps_all_text() {
        // Styling may wrap text in escapes but never drops characters.
        console::set_colors_enabled(false);
        let ops = vec![
            DiffOp::equal("the "),
            DiffOp::delete("quick"),
            DiffOp::insert("slow"),
            DiffOp::equal(" fox"),
        ];
        assert_eq!(styled_diff(&ops), "the quickslow fox");
    }
}
