use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::leet;

/// Normalizes raw text into its canonical de-obfuscated form.
///
/// The pipeline runs in a fixed order; later stages assume earlier ones have
/// run (the substitution table only knows lowercase targets, and repeat
/// collapsing must see substituted characters so "he11o" ends up as "helo"):
///
/// 1. lowercase (simple locale-free case fold)
/// 2. NFD decomposition, dropping combining marks
/// 3. leetspeak substitution table
/// 4. collapse runs of 2+ identical consecutive ASCII letters
/// 5. strip everything that is not a lowercase ASCII letter, digit, or whitespace
/// 6. trim leading/trailing whitespace
///
/// Total function: every input, including empty or pure-symbol strings,
/// produces a valid (possibly empty) canonical string. Idempotent once the
/// character-class restriction has been applied.
pub fn normalize(text: &str, cfg: &NormalizeConfig) -> String {
    let lowered = text.to_lowercase();
    let decomposed: String = if cfg.strip_diacritics {
        lowered.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
    } else {
        lowered
    };

    let mut out = String::with_capacity(decomposed.len());
    // Tracks the previous post-substitution character, before class
    // filtering: the collapse step sees the same stream the original
    // regex `([a-z])\1+` saw.
    let mut prev: Option<char> = None;
    for ch in decomposed.chars() {
        let ch = if cfg.map_leetspeak {
            leet::substitute(ch)
        } else {
            ch
        };
        if cfg.collapse_repeats && ch.is_ascii_lowercase() && prev == Some(ch) {
            continue;
        }
        prev = Some(ch);
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() {
            out.push(ch);
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> String {
        normalize(text, &NormalizeConfig::default())
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(norm("  CHUTIYA  "), "chutiya");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(norm("chutiy\u{0101}"), "chutiya"); // ā as U+0101
        assert_eq!(norm("chutiya\u{0304}"), "chutiya"); // a + combining macron
    }

    #[test]
    fn maps_leetspeak_then_collapses() {
        // 0→o runs before the collapse, so the doubled o folds away.
        assert_eq!(norm("ch00tiya"), "chotiya");
        assert_eq!(norm("he11o"), "helo");
        assert_eq!(norm("b!tch"), "bitch");
        assert_eq!(norm("a$$"), "as");
    }

    #[test]
    fn collapses_stretched_letters() {
        assert_eq!(norm("haaaai"), "hai");
        assert_eq!(norm("chuuutiyaaa"), "chutiya");
    }

    #[test]
    fn collapse_is_letters_only() {
        // Digits that survive normalization are not collapsed.
        assert_eq!(norm("4499"), "4499");
    }

    #[test]
    fn collapse_does_not_cross_stripped_symbols() {
        // The symbol sits between the two a's when the collapse runs, so
        // they are not adjacent; stripping happens afterwards.
        assert_eq!(norm("a.a"), "aa");
    }

    #[test]
    fn strips_symbols_and_punctuation() {
        assert_eq!(norm("chutiya?!."), "chutiyai");
        assert_eq!(norm("***"), "");
        assert_eq!(norm("---"), "");
    }

    #[test]
    fn preserves_interior_whitespace() {
        assert_eq!(norm("tu ek\tchutiya"), "tu ek\tchutiya");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \n\t  "), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Tu EK Chutiy@ hai!!!",
            "ch00tiya",
            "  haaaai  ",
            "résumé",
            "नमस्ते", // non-Latin script normalizes away entirely
            "",
        ];
        for input in inputs {
            let once = norm(input);
            assert_eq!(norm(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn stages_can_be_disabled() {
        let cfg = NormalizeConfig {
            map_leetspeak: false,
            ..Default::default()
        };
        assert_eq!(normalize("ch00tiya", &cfg), "ch00tiya");

        let cfg = NormalizeConfig {
            collapse_repeats: false,
            ..Default::default()
        };
        assert_eq!(normalize("haaaai", &cfg), "haaaai");
    }
}
