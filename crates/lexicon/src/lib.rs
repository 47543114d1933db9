//! GaaliGuard term lexicon.
//!
//! An immutable, deduplicated collection of candidate offensive terms. The
//! lexicon is built once at process start (usually via [`load_terms`]) and
//! shared read-only with every scan; it is never mutated after construction.
//!
//! Terms are stored in a fixed deterministic order — descending character
//! length, lexicographic tie-break — so that both matcher phases scan terms
//! identically across runs and platforms, and which-term-wins ties in the
//! fuzzy phase are byte-for-byte reproducible.
//!
//! Terms containing internal whitespace are phrases. They are retained in
//! the lexicon but never participate in matching (both phases compare whole
//! single tokens); see the regression tests in the matcher crate.

mod loader;

pub use crate::loader::{load_terms, LexiconError, BASELINE_VARIANTS};

use serde::{Deserialize, Serialize};

/// Immutable, deduplicated set of candidate terms in deterministic scan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermLexicon {
    terms: Vec<String>,
}

impl TermLexicon {
    /// Builds a lexicon from any collection of candidate strings.
    ///
    /// Entries are trimmed, case-folded, and deduplicated; empty entries are
    /// dropped. An empty lexicon is legal and simply yields zero matches for
    /// any input.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        terms.sort_by(compare_terms);
        terms.dedup();
        Self { terms }
    }

    /// All terms, in deterministic scan order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Terms with no internal whitespace; the only terms that can match.
    pub fn single_token_terms(&self) -> impl Iterator<Item = &str> {
        self.terms().filter(|t| !is_phrase(t))
    }

    /// Multi-token phrase terms. Retained but unreachable by the matcher.
    pub fn phrase_terms(&self) -> impl Iterator<Item = &str> {
        self.terms().filter(|t| is_phrase(t))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

fn is_phrase(term: &str) -> bool {
    term.chars().any(char::is_whitespace)
}

/// Descending char length, then lexicographic. Fixes the term scan order for
/// both matcher phases.
fn compare_terms(a: &String, b: &String) -> std::cmp::Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_case_folds_and_trims() {
        let lex = TermLexicon::new(["Chutiya", "  chutiya ", "LODE", "", "   "]);
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("chutiya"));
        assert!(lex.contains("lode"));
    }

    #[test]
    fn order_is_length_desc_then_lexicographic() {
        let lex = TermLexicon::new(["lode", "madarchod", "lavde", "gandu"]);
        let terms: Vec<&str> = lex.terms().collect();
        assert_eq!(terms, vec!["madarchod", "gandu", "lavde", "lode"]);
    }

    #[test]
    fn partitions_phrases_from_single_tokens() {
        let lex = TermLexicon::new(["kute ki aulad", "chutiya"]);
        let singles: Vec<&str> = lex.single_token_terms().collect();
        let phrases: Vec<&str> = lex.phrase_terms().collect();
        assert_eq!(singles, vec!["chutiya"]);
        assert_eq!(phrases, vec!["kute ki aulad"]);
    }

    #[test]
    fn empty_lexicon_is_legal() {
        let lex = TermLexicon::new(Vec::<String>::new());
        assert!(lex.is_empty());
        assert_eq!(lex.single_token_terms().count(), 0);
    }
}
