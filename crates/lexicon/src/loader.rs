//! Word-list loading.
//!
//! The lexicon's storage format is deliberately outside the matching core:
//! this loader reads the conventional single-column CSV word list (one term
//! per line, first comma-separated field wins) and appends the manually
//! verified obfuscation variants before deduplication. Malformed entries —
//! empty lines, whitespace-only fields — are filtered here, not by the
//! matcher.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::TermLexicon;

/// Manually verified variants appended to every loaded list for robust
/// detection of common obfuscations.
pub const BASELINE_VARIANTS: [&str; 5] =
    ["kute ki aulad", "lavde", "lode", "madarchod", "chutiya"];

/// Errors surfaced while loading a term list. The matching core itself has
/// no failure paths; everything that can go wrong lives at this boundary.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The word-list file could not be read.
    #[error("failed to read term list: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads a term lexicon from a single-column CSV or plain word-list file.
///
/// Each line contributes its first comma-separated field. The
/// [`BASELINE_VARIANTS`] are always appended, so an empty file still yields
/// a usable lexicon.
pub fn load_terms(path: impl AsRef<Path>) -> Result<TermLexicon, LexiconError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut candidates: Vec<&str> = contents
        .lines()
        .map(|line| line.split(',').next().unwrap_or(line))
        .collect();
    candidates.extend(BASELINE_VARIANTS);

    let lexicon = TermLexicon::new(candidates);
    info!(
        path = %path.display(),
        term_count = lexicon.len(),
        "lexicon_loaded"
    );
    Ok(lexicon)
}
