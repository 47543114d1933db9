use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use canonical::{build_index_map, normalize, NormalizeConfig, TokenSpan};
use lexicon::TermLexicon;
use tracing::debug;

use crate::similarity::similarity;
use crate::types::{MatchError, MatchKind, MatchRecord, ScanConfig, ScanReport};


/// Two-phase matching engine over raw-span aligned tokens.
///
/// Holds a shared read-only lexicon plus the scan and normalization configs.
/// A single [`scan`](MatchEngine::scan) call owns its own token spans and
/// performs no I/O, so independent inputs can be scanned from any number of
/// threads without coordination.
pub struct MatchEngine {
    lexicon: Arc<TermLexicon>,
    scan_cfg: ScanConfig,
    normalize_cfg: NormalizeConfig,
}

impl MatchEngine {
    /// Builds an engine with default configs. Defaults are always valid.
    pub fn new(lexicon: TermLexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            scan_cfg: ScanConfig::default(),
            normalize_cfg: NormalizeConfig::default(),
        }
    }

    /// Builds an engine from a shared lexicon handle and explicit configs.
    pub fn with_configs(
        lexicon: Arc<TermLexicon>,
        scan_cfg: ScanConfig,
        normalize_cfg: NormalizeConfig,
    ) -> Result<Self, MatchError> {
        scan_cfg.validate()?;
        Ok(Self {
            lexicon,
            scan_cfg,
            normalize_cfg,
        })
    }

    pub fn lexicon(&self) -> &TermLexicon {
        &self.lexicon
    }

    /// Scans one raw input string.
    ///
    /// Infallible: every input, including empty or pure-symbol strings,
    /// yields a valid (possibly empty) report. Absence of a match is not an
    /// error.
    pub fn scan(&self, raw: &str) -> ScanReport {
        let started = Instant::now();
        let normalized_text = normalize(raw, &self.normalize_cfg);
        let mut spans = build_index_map(raw, &self.normalize_cfg);
        if spans.is_empty() || self.lexicon.is_empty() {
            return ScanReport::empty(normalized_text);
        }

        let mut found = Vec::new();
        self.exact_pass(&mut spans, &mut found);
        self.fuzzy_pass(&mut spans, &mut found);
        let matches = assemble(found);

        debug!(
            elapsed_micros = started.elapsed().as_micros() as u64,
            token_count = spans.len(),
            match_count = matches.len(),
            "scan_complete"
        );

        ScanReport {
            normalized_text,
            count: matches.len(),
            matches,
        }
    }

    /// Phase one: exact equality between normalized tokens and single-token
    /// terms, scanned in the lexicon's deterministic order. A span matches
    /// at most one term and never reverts.
    fn exact_pass(&self, spans: &mut [TokenSpan], found: &mut Vec<MatchRecord>) {
        for term in self.lexicon.single_token_terms() {
            for span in spans.iter_mut().filter(|s| !s.matched) {
                if span.text == term {
                    found.push(MatchRecord {
                        start: span.raw_start,
                        end: span.raw_end,
                        term: term.to_string(),
                        kind: MatchKind::Exact,
                    });
                    span.matched = true;
                }
            }
        }
    }

    /// Phase two: approximate fallback on whatever phase one left unmatched.
    /// First qualifying term wins under the fixed lexicon order; a perfect
    /// 1.0 ratio is excluded since exact equality was already handled.
    fn fuzzy_pass(&self, spans: &mut [TokenSpan], found: &mut Vec<MatchRecord>) {
        for span in spans.iter_mut().filter(|s| !s.matched) {
            if span.text.chars().count() < self.scan_cfg.min_fuzzy_len {
                continue;
            }
            for term in self.lexicon.single_token_terms() {
                let ratio = similarity(&span.text, term);
                if ratio >= self.scan_cfg.similarity_threshold && ratio < 1.0 {
                    found.push(MatchRecord {
                        start: span.raw_start,
                        end: span.raw_end,
                        term: term.to_string(),
                        kind: MatchKind::Fuzzy { ratio },
                    });
                    span.matched = true;
                    break;
                }
            }
        }
    }
}

/// Result assembly: deterministic sort (start, end, term, kind), then dedup
/// by full value equality so no two records share span, term, and kind.
fn assemble(mut found: Vec<MatchRecord>) -> Vec<MatchRecord> {
    found.sort_by(compare_records);
    found.dedup();
    found
}

fn compare_records(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| a.end.cmp(&b.end))
        .then_with(|| a.term.cmp(&b.term))
        .then_with(|| a.kind.rank().cmp(&b.kind.rank()))
        .then_with(|| match (&a.kind, &b.kind) {
            (MatchKind::Fuzzy { ratio: ra }, MatchKind::Fuzzy { ratio: rb }) => ra.total_cmp(rb),
            _ => Ordering::Equal,
        })
}
