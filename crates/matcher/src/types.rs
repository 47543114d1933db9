use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a span matched a lexicon term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatchKind {
    /// The normalized token equals the term character-for-character.
    Exact,
    /// Ratcliff/Obershelp similarity in `[threshold, 1.0)`.
    Fuzzy {
        /// Similarity ratio that qualified the match.
        ratio: f64,
    },
}

impl MatchKind {
    /// Fixed rank for deterministic ordering: exact sorts before fuzzy.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            MatchKind::Exact => 0,
            MatchKind::Fuzzy { .. } => 1,
        }
    }
}

/// A single detected span in the raw input.
///
/// `start`/`end` are half-open byte offsets copied verbatim from the token
/// span that produced the match; `&raw[start..end]` is always exactly one
/// whitespace-delimited token of the original input — matches are never
/// partial-token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub start: usize,
    pub end: usize,
    /// The lexicon term that matched.
    pub term: String,
    pub kind: MatchKind,
}

/// Result of scanning one input string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    /// Canonical normalization of the whole raw input, independent of
    /// tokenization.
    pub normalized_text: String,
    /// Deduplicated matches, sorted by start offset (ties: end, term, kind).
    pub matches: Vec<MatchRecord>,
    /// Always equals `matches.len()`.
    pub count: usize,
}

impl ScanReport {
    pub(crate) fn empty(normalized_text: String) -> Self {
        Self {
            normalized_text,
            matches: Vec::new(),
            count: 0,
        }
    }
}

/// Configuration for a matching engine.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs. Validated once at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Semantic version of the matching behavior.
    pub version: u32,
    /// Minimum Ratcliff/Obershelp ratio for a fuzzy hit. A perfect 1.0 is
    /// excluded regardless: exact equality is already caught in phase one,
    /// so a 1.0 ratio in the fuzzy phase indicates only formatting
    /// artifacts, not a new find.
    #[serde(default = "ScanConfig::default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Tokens with a normalized char-length below this never fuzzy-match;
    /// short function words produce too many false positives.
    #[serde(default = "ScanConfig::default_min_fuzzy_len")]
    pub min_fuzzy_len: usize,
}

impl ScanConfig {
    pub(crate) fn default_similarity_threshold() -> f64 {
        0.80
    }

    pub(crate) fn default_min_fuzzy_len() -> usize {
        3
    }

    /// Validate the configuration before use.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !self.similarity_threshold.is_finite()
            || self.similarity_threshold <= 0.0
            || self.similarity_threshold > 1.0
        {
            return Err(MatchError::InvalidConfig(
                "similarity_threshold must be in (0.0, 1.0]".into(),
            ));
        }
        if self.min_fuzzy_len == 0 {
            return Err(MatchError::InvalidConfig(
                "min_fuzzy_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            version: 1,
            similarity_threshold: Self::default_similarity_threshold(),
            min_fuzzy_len: Self::default_min_fuzzy_len(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Scanning itself is infallible — a pure CPU-bound pass over immutable
/// inputs — so the only failure surface is configuration.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid scan config: {0}")]
    InvalidConfig(String),
}
