use serde::{Deserialize, Serialize};

/// Configuration for the normalization pipeline.
///
/// The defaults reproduce the full de-obfuscation pipeline; individual stages
/// can be switched off for debugging or corpus analysis. Any change to the
/// default behavior must bump `version` so downstream consumers can tell
/// which normalization produced a given canonical text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization behavior.
    pub version: u32,
    /// If true, decompose to NFD and drop combining marks ("chutiyā" → "chutiya").
    pub strip_diacritics: bool,
    /// If true, apply the fixed leetspeak substitution table ("ch00tiya" → "chootiya").
    pub map_leetspeak: bool,
    /// If true, collapse runs of repeated letters ("haaaai" → "hai").
    pub collapse_repeats: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_diacritics: true,
            map_leetspeak: true,
            collapse_repeats: true,
        }
    }
}
