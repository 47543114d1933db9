//! GaaliGuard matching layer.
//!
//! Orchestrates two passes over the raw-span aligned token stream produced by
//! the canonical crate:
//!
//! 1. **Exact pass** — normalized token equals a single-token lexicon term
//!    character-for-character.
//! 2. **Fuzzy pass** — whatever remains unmatched is scored against the
//!    lexicon with Ratcliff/Obershelp similarity; ratios in
//!    `[threshold, 1.0)` qualify, first hit wins under the lexicon's fixed
//!    deterministic term order.
//!
//! Both passes are pure scans with no I/O and cannot fail; absence of a
//! match is not an error. The result assembler deduplicates by full value
//! and sorts by start offset so reports are byte-for-byte reproducible
//! across runs and platforms.

mod engine;
mod similarity;
mod types;

pub use crate::engine::MatchEngine;
pub use crate::similarity::similarity;
pub use crate::types::{MatchError, MatchKind, MatchRecord, ScanConfig, ScanReport};
