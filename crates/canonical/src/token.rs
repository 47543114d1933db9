use serde::{Deserialize, Serialize};

use crate::config::NormalizeConfig;
use crate::normalize::normalize;

/// A whitespace-delimited run of the raw input, aligned with its canonical form.
///
/// `raw_start`/`raw_end` are half-open UTF-8 byte offsets into the *original,
/// unnormalized* string, so `&raw[raw_start..raw_end]` is exactly what the
/// user typed for this token. `text` is the canonical form of that run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSpan {
    /// Byte offset (inclusive) in the raw input.
    pub raw_start: usize,
    /// Byte offset (exclusive) in the raw input.
    pub raw_end: usize,
    /// Normalized token text; never empty for an emitted span.
    pub text: String,
    /// Flipped by the matching engine once the span has produced a match.
    pub matched: bool,
}

/// Builds the raw index map: one [`TokenSpan`] per maximal non-whitespace run.
///
/// Runs whose canonical form is empty (pure punctuation, symbols, or
/// non-Latin script) are dropped entirely; they contribute no span. Spans are
/// non-overlapping and strictly increasing in `raw_start`.
pub fn build_index_map(raw: &str, cfg: &NormalizeConfig) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in raw.char_indices() {
        if ch.is_whitespace() {
            if let Some(run_start) = start.take() {
                push_span(&mut spans, raw, run_start, idx, cfg);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(run_start) = start {
        push_span(&mut spans, raw, run_start, raw.len(), cfg);
    }

    spans
}

fn push_span(spans: &mut Vec<TokenSpan>, raw: &str, start: usize, end: usize, cfg: &NormalizeConfig) {
    let text = normalize(&raw[start..end], cfg);
    if text.is_empty() {
        return;
    }
    spans.push(TokenSpan {
        raw_start: start,
        raw_end: end,
        text,
        matched: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(raw: &str) -> Vec<TokenSpan> {
        build_index_map(raw, &NormalizeConfig::default())
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(map("").is_empty());
        assert!(map("  \t\n ").is_empty());
    }

    #[test]
    fn spans_bound_the_raw_runs_exactly() {
        let raw = "  tu \t ek   chutiya  ";
        let spans = map(raw);
        let slices: Vec<&str> = spans
            .iter()
            .map(|s| &raw[s.raw_start..s.raw_end])
            .collect();
        assert_eq!(slices, vec!["tu", "ek", "chutiya"]);
        for span in &spans {
            assert!(span.raw_start < span.raw_end);
            assert!(!span.matched);
        }
    }

    #[test]
    fn spans_are_strictly_increasing() {
        let spans = map("ek do teen chaar");
        for pair in spans.windows(2) {
            assert!(pair[0].raw_end <= pair[1].raw_start);
            assert!(pair[0].raw_start < pair[1].raw_start);
        }
    }

    #[test]
    fn punctuation_attached_to_a_word_stays_in_the_span() {
        let raw = "chutiya!!!";
        let spans = map(raw);
        assert_eq!(spans.len(), 1);
        assert_eq!(&raw[spans[0].raw_start..spans[0].raw_end], "chutiya!!!");
        // '!' maps to 'i' before the symbol strip, then the run collapses.
        assert_eq!(spans[0].text, "chutiyai");
    }

    #[test]
    fn pure_symbol_runs_are_dropped() {
        let raw = "ek *** do";
        let spans = map(raw);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["ek", "do"]);
    }

    #[test]
    fn offsets_are_bytes_in_multibyte_input() {
        let raw = "nam\u{0101}ste chutiya"; // ā is 2 bytes in UTF-8
        let spans = map(raw);
        assert_eq!(spans.len(), 2);
        assert_eq!(&raw[spans[0].raw_start..spans[0].raw_end], "nam\u{0101}ste");
        assert_eq!(spans[0].text, "namaste");
        assert_eq!(&raw[spans[1].raw_start..spans[1].raw_end], "chutiya");
    }

    #[test]
    fn normalized_token_can_differ_in_length_from_its_span() {
        let raw = "chuuutiyaaa";
        let spans = map(raw);
        assert_eq!(spans[0].text, "chutiya");
        assert_eq!(spans[0].raw_end - spans[0].raw_start, raw.len());
    }
}
