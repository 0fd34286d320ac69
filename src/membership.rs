//! Membership deciders for the copy-pattern language.
//!
//! A word over `{a, b}` belongs to the language iff it factors as
//!
//! ```text
//! w · x · y · x · y · (w·w)^k      with w, x, y non-empty and k ≥ 1
//! ```
//!
//! Writing `m = |w|`, `p = |x|`, `q = |y|`, every member has length
//! `n = m·(2k + 1) + 2·(p + q)`, so the shortest member has length 7
//! (`m = p = q = k = 1`) and no even-length member shorter than 10 exists.
//! Because `w` is the prefix of the word, a decider never has to guess the
//! seed's content, only its length.
//!
//! Two independent deciders are provided and kept deliberately separate so
//! they can cross-check each other:
//!
//! - [`naive_decompose`] enumerates the split lengths `(m, p, q)` directly,
//!   pruning each loop as soon as the remaining suffix is too short for the
//!   echo and one doubled seed. Worst case it probes `O(n^3)` splits with an
//!   `O(n)` range check each.
//! - [`fast_decompose`] enumerates only `(m, k)`. For a fixed seed length the
//!   tail `(w·w)^k` occupies an exact multiple of `2m` symbols, and the
//!   middle `x·y·x·y` is precisely a square `t·t` with `|t| ≥ 2` (any split
//!   of `t` into non-empty `x, y` works). That collapses the two inner loops
//!   into one square test, for `O(n^2 / m)` candidates overall with an
//!   `O(n)` check each.
//!
//! Both deciders return the same verdict on every input. The decompositions
//! they report as witnesses may differ (the naive one is lexicographically
//! minimal in `(m, p, q)`, the fast one fixes `|x| = 1`), so equivalence is
//! checked on verdicts, not witnesses.
//!
//! The string front doors [`naive_accepts`] and [`fast_accepts`] fold
//! out-of-alphabet input into a negative verdict; the typed deciders take a
//! validated [`Word`] and never re-check the alphabet.

use crate::segment::{is_seed_repetition, is_square};
use crate::word::Word;

/// Length of the shortest member, `a·a·b·a·b·aa` style: `m = p = q = k = 1`.
pub const MIN_MEMBER_LEN: usize = 7;

/// Length of the shortest even-length member.
///
/// `n = m·(2k + 1) + 2·(p + q)` is even only when `m` is, so an even member
/// needs `m ≥ 2` and thus `n ≥ 2·3 + 2·2 = 10`.
pub const MIN_EVEN_MEMBER_LEN: usize = 10;

/// True iff at least one member of the given length exists.
///
/// # Example
///
/// ```rust
/// use copylang::membership::is_feasible_length;
///
/// assert!(is_feasible_length(7));
/// assert!(is_feasible_length(9));
/// assert!(!is_feasible_length(8)); // even lengths start at 10
/// assert!(is_feasible_length(10));
/// assert!(!is_feasible_length(6));
/// ```
#[inline]
pub fn is_feasible_length(length: usize) -> bool {
    length >= MIN_MEMBER_LEN && (length % 2 == 1 || length >= MIN_EVEN_MEMBER_LEN)
}

/// A witness factorization `w·x·y·x·y·(w·w)^k` of a member word.
///
/// Only segment lengths are stored; together with the word they identify
/// every split position, since the factors are contiguous. A decomposition
/// returned by [`naive_decompose`] or [`fast_decompose`] always
/// [certifies](Decomposition::certifies) the word it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Decomposition {
    /// `m = |w|`, the seed length. The seed is the word's prefix.
    pub seed_len: usize,
    /// `p = |x|`, the first echoed segment's length.
    pub x_len: usize,
    /// `q = |y|`, the second echoed segment's length.
    pub y_len: usize,
    /// `k`, how many copies of the doubled seed `w·w` form the tail.
    pub repeats: usize,
}

impl Decomposition {
    /// Total length of the word this factorization describes,
    /// `m·(2k + 1) + 2·(p + q)`.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.seed_len * (2 * self.repeats + 1) + 2 * (self.x_len + self.y_len)
    }

    /// Checks that this factorization really certifies membership of `word`.
    ///
    /// All four lengths must be positive, the lengths must sum to the word
    /// length, the echo ranges must repeat `x` and `y`, and the tail must be
    /// `(w·w)^repeats` for the word's seed prefix.
    pub fn certifies(&self, word: &Word) -> bool {
        let (m, p, q) = (self.seed_len, self.x_len, self.y_len);
        if m == 0 || p == 0 || q == 0 || self.repeats == 0 {
            return false;
        }
        if self.total_len() != word.len() {
            return false;
        }
        let s = word.symbols();
        let seed = &s[..m];
        let x = &s[m..m + p];
        let y = &s[m + p..m + p + q];
        let echo_start = m + p + q;
        let tail_start = echo_start + p + q;
        &s[echo_start..echo_start + p] == x
            && &s[echo_start + p..tail_start] == y
            && s[tail_start..].len() == self.repeats * 2 * m
            && is_seed_repetition(&s[tail_start..], seed)
    }
}

/// Decides membership of a textual word with the backtracking decider.
///
/// Out-of-alphabet characters make the word a non-member.
///
/// # Arguments
///
/// * `input` - The candidate word as text over `{a, b}`.
///
/// # Returns
///
/// `true` iff the word belongs to the language.
///
/// # Example
///
/// ```rust
/// use copylang::membership::naive_accepts;
///
/// assert!(naive_accepts("aababaa")); // a·a·b·a·b·aa
/// assert!(!naive_accepts("abababa"));
/// assert!(!naive_accepts("abcabca")); // 'c' is outside the alphabet
/// ```
pub fn naive_accepts(input: &str) -> bool {
    match Word::parse(input) {
        Some(word) => naive_decompose(&word).is_some(),
        None => false,
    }
}

/// Decides membership of a textual word with the square-collapsing decider.
///
/// Out-of-alphabet characters make the word a non-member. Agrees with
/// [`naive_accepts`] on every input.
///
/// # Example
///
/// ```rust
/// use copylang::membership::fast_accepts;
///
/// assert!(fast_accepts("aababaa"));
/// assert!(!fast_accepts("aaaaaaaa")); // even length below 10 is infeasible
/// ```
pub fn fast_accepts(input: &str) -> bool {
    match Word::parse(input) {
        Some(word) => fast_decompose(&word).is_some(),
        None => false,
    }
}

/// Searches for a factorization by enumerating all split lengths.
///
/// Seed length `m`, then `p = |x|`, then `q = |y|` are tried in ascending
/// order, so the first hit is the lexicographically smallest `(m, p, q)`
/// witness. Each loop stops as soon as the unread suffix cannot hold the
/// remaining factors.
///
/// # Arguments
///
/// * `word` - The validated candidate word.
///
/// # Returns
///
/// The first witness found, or `None` for non-members.
pub fn naive_decompose(word: &Word) -> Option<Decomposition> {
    let s = word.symbols();
    let n = s.len();
    if n < MIN_MEMBER_LEN {
        return None;
    }
    // n = m·(2k+1) + 2(p+q) ≥ 3m + 4 bounds the seed length.
    let max_seed = (n - 4) / 3;
    for m in 1..=max_seed {
        let seed = &s[..m];
        for p in 1..n {
            let end_x = m + p;
            // After x: y, the echo of x·y, and one doubled seed must fit.
            if n - end_x < p + 2 + 2 * m {
                break;
            }
            let x = &s[m..end_x];
            for q in 1..n {
                let end_y = end_x + q;
                if n - end_y < p + q + 2 * m {
                    break;
                }
                let y = &s[end_x..end_y];
                let tail_start = end_y + p + q;
                if &s[end_y..end_y + p] == x
                    && &s[end_y + p..tail_start] == y
                    && is_seed_repetition(&s[tail_start..], seed)
                {
                    return Some(Decomposition {
                        seed_len: m,
                        x_len: p,
                        y_len: q,
                        repeats: (n - tail_start) / (2 * m),
                    });
                }
            }
        }
    }
    None
}

/// Searches for a factorization by enumerating seed length and repeat count.
///
/// For each seed length `m` the tail boundary can only sit at
/// `n - k·2m` with `k ≥ 1`, leaving at least `m + 4` symbols of prefix and
/// middle. The middle is then accepted iff it is a square, because
/// `x·y·x·y = (x·y)·(x·y)` and conversely any square `t·t` with `|t| ≥ 2`
/// splits as `x = t[0]`, `y = t[1..]`. The reported witness uses that
/// leftmost split.
///
/// # Arguments
///
/// * `word` - The validated candidate word.
///
/// # Returns
///
/// A witness with `x_len == 1`, or `None` for non-members.
///
/// # Example
///
/// ```rust
/// use copylang::membership::fast_decompose;
/// use copylang::word::Word;
///
/// let word = Word::parse("aabbaabbaaa").unwrap();
/// let witness = fast_decompose(&word).unwrap();
/// assert_eq!(witness.x_len, 1);
/// assert!(witness.certifies(&word));
/// ```
pub fn fast_decompose(word: &Word) -> Option<Decomposition> {
    let s = word.symbols();
    let n = s.len();
    if n < MIN_MEMBER_LEN {
        return None;
    }
    let max_seed = (n - 4) / 3;
    for m in 1..=max_seed {
        let seed = &s[..m];
        let period = 2 * m;
        // tail_start = n - k·period, kept at or above m + 4 so the middle
        // retains square length ≥ 4.
        for k in 1..=(n - m - 4) / period {
            let tail_start = n - k * period;
            let mid = &s[m..tail_start];
            if is_square(mid) && is_seed_repetition(&s[tail_start..], seed) {
                return Some(Decomposition {
                    seed_len: m,
                    x_len: 1,
                    y_len: mid.len() / 2 - 1,
                    repeats: k,
                });
            }
        }
    }
    None
}
