//! GaaliGuard canonical text layer.
//!
//! This crate collapses the obfuscation register used for Latin-transliterated
//! Hindi/Hinglish profanity — leetspeak substitutions, stretched letters,
//! diacritics — into a deterministic canonical form, and aligns every
//! canonical token with the exact byte span it occupied in the raw input.
//!
//! ## What we do
//!
//! - Case folding and diacritic stripping (NFD + combining-mark removal)
//! - A fixed leetspeak substitution table (`0 → o`, `! → i`, ...)
//! - Anti-stretching: runs of repeated letters collapse to one
//! - Character-class restriction to lowercase ASCII letters, digits, whitespace
//! - Tokenization over the *raw* input with byte offsets, so downstream
//!   consumers can highlight exactly what the user typed
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no failure paths. Same text
//! and config always produce the same result; [`normalize`] is total and
//! idempotent.

mod config;
mod leet;
mod normalize;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::leet::LEET_SUBSTITUTIONS;
pub use crate::normalize::normalize;
pub use crate::token::{build_index_map, TokenSpan};
