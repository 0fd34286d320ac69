//! Structural predicates on symbol segments.
//!
//! Both decomposers reduce candidate splits to two questions about
//! sub-ranges of the input:
//!
//! - **Square**: a segment `s` is a *square* iff `s = t·t` for some `t`
//!   with `|t| ≥ 2`. The decomposers use this to recognize the echoed
//!   `x·y·x·y` middle, whose two halves must coincide and each contain at
//!   least two symbols (`x` and `y` are both non-empty).
//! - **Seed repetition**: a segment `s` is a repetition of seed `w` iff
//!   `s = (w·w)^k` for some `k ≥ 1`. This recognizes the doubled-seed tail
//!   without materializing `w·w`: symbol `i` of `(w·w)^k` is symbol
//!   `i mod 2|w|` of `w·w`, which folds back onto `w` itself.
//!
//! Both predicates are total over all slice inputs. Degenerate shapes
//! (empty segment, odd length, empty seed, length not a positive multiple
//! of the period) are answered `false` rather than reported as errors, so
//! callers can probe candidate ranges freely inside search loops.

use crate::word::Symbol;

/// Tests whether `segment` is a square, i.e. `t·t` for some `t` with
/// `|t| ≥ 2`.
///
/// # Arguments
///
/// * `segment` - The symbol range to test.
///
/// # Returns
///
/// `true` iff the segment has even length of at least 4 and its first half
/// equals its second half.
///
/// # Example
///
/// ```rust
/// use copylang::segment::is_square;
/// use copylang::word::Word;
///
/// let word = Word::parse("abab").unwrap();
/// assert!(is_square(word.symbols()));
///
/// let word = Word::parse("aba").unwrap();
/// assert!(!is_square(word.symbols()));
///
/// // The halves must each hold an x and a y, so length 2 is too short.
/// let word = Word::parse("aa").unwrap();
/// assert!(!is_square(word.symbols()));
/// ```
#[inline]
pub fn is_square(segment: &[Symbol]) -> bool {
    let n = segment.len();
    if n < 4 || n % 2 != 0 {
        return false;
    }
    let half = n / 2;
    segment[..half] == segment[half..]
}

/// Tests whether `segment` is `(seed·seed)^k` for some `k ≥ 1`.
///
/// The check never allocates the doubled seed: position `i` of the
/// repetition must carry symbol `(i mod 2m) mod m` of the seed, where
/// `m = |seed|`.
///
/// # Arguments
///
/// * `segment` - The symbol range to test, typically the tail of a word.
/// * `seed` - The seed `w` whose doubling is repeated.
///
/// # Returns
///
/// `true` iff `seed` is non-empty, the segment length is a positive
/// multiple of `2·|seed|`, and every position matches the seed pattern.
///
/// # Example
///
/// ```rust
/// use copylang::segment::is_seed_repetition;
/// use copylang::word::Word;
///
/// let tail = Word::parse("abababab").unwrap();
/// let seed = Word::parse("ab").unwrap();
/// // abababab = (ab·ab)^2
/// assert!(is_seed_repetition(tail.symbols(), seed.symbols()));
///
/// let tail = Word::parse("abab").unwrap();
/// let seed = Word::parse("a").unwrap();
/// assert!(!is_seed_repetition(tail.symbols(), seed.symbols()));
/// ```
pub fn is_seed_repetition(segment: &[Symbol], seed: &[Symbol]) -> bool {
    let m = seed.len();
    if m == 0 {
        return false;
    }
    let period = 2 * m;
    if segment.is_empty() || segment.len() % period != 0 {
        return false;
    }
    segment.iter().enumerate().all(|(i, &symbol)| {
        let j = i % period;
        let expected = if j < m { seed[j] } else { seed[j - m] };
        symbol == expected
    })
}
