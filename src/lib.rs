//! Workspace umbrella crate for GaaliGuard.
//!
//! GaaliGuard scans free-form text for offensive Hinglish vocabulary written
//! in a mixed-script, phonetically-obfuscated register — leetspeak
//! substitutions, stretched letters, diacritics — and reports the exact byte
//! spans in the *original* input where matches occur, together with the
//! matched term and a match-quality tag.
//!
//! The pipeline is split across three stage crates, re-exported here so
//! callers can operate with a single dependency:
//!
//! - [`canonical`]: normalization and raw-span token alignment
//! - [`lexicon`]: the immutable offensive-term lexicon and its loader
//! - [`matcher`]: the two-phase exact + fuzzy matching engine
//!
//! ```
//! use gaaliguard::{MatchEngine, MatchKind, TermLexicon};
//!
//! let engine = MatchEngine::new(TermLexicon::new(["chutiya"]));
//! let report = engine.scan("tu ek ch00tiya hai");
//! assert_eq!(report.count, 1);
//! assert!(matches!(report.matches[0].kind, MatchKind::Fuzzy { .. }));
//! ```

pub use canonical::{build_index_map, normalize, NormalizeConfig, TokenSpan, LEET_SUBSTITUTIONS};
pub use lexicon::{load_terms, LexiconError, TermLexicon, BASELINE_VARIANTS};
pub use matcher::{
    similarity, MatchEngine, MatchError, MatchKind, MatchRecord, ScanConfig, ScanReport,
};

/// One-shot convenience: build a default engine over `terms` and scan a
/// single input. Callers scanning more than once should build a
/// [`MatchEngine`] and reuse it; the lexicon is sorted once at construction.
pub fn scan_once<I, S>(terms: I, input: &str) -> ScanReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MatchEngine::new(TermLexicon::new(terms)).scan(input)
}
