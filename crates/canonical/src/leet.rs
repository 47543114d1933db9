//! Leetspeak substitution table.
//!
//! Obfuscation in the Hinglish register is overwhelmingly phonetic symbol
//! substitution; a fixed table handles the bulk of it without any learned
//! model. Substitutions are independent single-character replacements and
//! are not context-aware.

/// The fixed substitution table, applied after lowercasing and diacritic
/// stripping and before repeat collapsing.
pub const LEET_SUBSTITUTIONS: [(char, char); 8] = [
    ('!', 'i'),
    ('@', 'a'),
    ('$', 's'),
    ('0', 'o'),
    ('3', 'e'),
    ('5', 's'),
    ('7', 't'),
    ('1', 'l'),
];

/// Maps a single character through the table; everything else passes through.
pub(crate) fn substitute(ch: char) -> char {
    match ch {
        '!' => 'i',
        '@' => 'a',
        '$' => 's',
        '0' => 'o',
        '3' => 'e',
        '5' => 's',
        '7' => 't',
        '1' => 'l',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_and_function_agree() {
        for (from, to) in LEET_SUBSTITUTIONS {
            assert_eq!(substitute(from), to);
        }
        assert_eq!(substitute('x'), 'x');
        assert_eq!(substitute('9'), '9');
    }
}
