//! Ratcliff/Obershelp similarity.
//!
//! The threshold behavior of the fuzzy phase is sensitive to this exact
//! algorithm: find the longest common contiguous block between the two
//! strings, recurse on the left and right remainders on each side of the
//! block, and score `2M / T` where `M` is the total length of all matched
//! blocks and `T` the sum of the input lengths. Edit-distance approximations
//! do not reproduce the same boundary results.

/// Computes the Ratcliff/Obershelp similarity ratio between two strings,
/// a value in `[0.0, 1.0]` over char counts.
///
/// Two empty strings are identical and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_len(&a, &b);
    (2 * matched) as f64 / total as f64
}

/// Total length of all recursively-found longest common contiguous blocks.
fn matching_len(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }
    size
        + matching_len(&a[..a_start], &b[..b_start])
        + matching_len(&a[a_start + size..], &b[b_start + size..])
}

/// Longest common contiguous block, ties broken by earliest start in `a`,
/// then earliest start in `b`. Rolling-row dynamic scan, O(|a|·|b|) time and
/// O(|b|) space.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0usize, 0usize, 0usize);
    // prev[j] = length of the common run ending at (i - 1, j - 1).
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                cur[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = cur;
    }
    best
}
