//! Seeded generators for exact-length test samples.
//!
//! The differential harness needs words of a *chosen exact length* on both
//! sides of the language boundary:
//!
//! - [`SampleGenerator::positive`] builds a member by drawing a random
//!   shape `(m, k, p, q)` satisfying `length = m·(2k + 1) + 2·(p + q)` and
//!   filling the segments with random symbols. Shape drawing is rejection
//!   sampling (a drawn `(m, k)` pair may leave an odd remainder); after a
//!   fixed attempt budget a deterministic all-`a`/`b` shape takes over, so
//!   feasible lengths never fail.
//! - [`SampleGenerator::negative`] draws uniform random words and keeps the
//!   first one the fast decider rejects. Non-members exist at every length
//!   (`a·b^(n-1)` can never carry the doubled-seed tail), but the loop is
//!   still bounded so a systematic failure surfaces as
//!   [`SampleError::Exhausted`] instead of a hang.
//!
//! Not every length is feasible for members: the shortest member has length
//! 7, and an even-length member needs an even seed, hence length ≥ 10.
//! [`is_feasible_length`](crate::membership::is_feasible_length) captures
//! that rule; asking for an infeasible positive yields
//! [`SampleError::InfeasibleLength`].
//!
//! Generators are deterministic per seed, so any failure a harness run
//! uncovers can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::membership::{fast_decompose, is_feasible_length};
use crate::word::{Symbol, Word};

/// Shape-drawing attempts before the positive generator falls back to its
/// deterministic construction.
pub const POSITIVE_ATTEMPT_BUDGET: usize = 20_000;

/// Uniform draws before the negative generator reports exhaustion.
pub const NEGATIVE_ATTEMPT_BUDGET: usize = 10_000;

/// Errors surfaced by the sample generators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// No member of the requested length exists.
    #[error(
        "no member of length {length} exists (members have odd length ≥ 7 or even length ≥ 10)"
    )]
    InfeasibleLength {
        /// The infeasible requested length.
        length: usize,
    },

    /// The negative generator exhausted its draw budget.
    #[error("no non-member of length {length} found in {attempts} draws")]
    Exhausted {
        /// The requested length.
        length: usize,
        /// How many draws were spent.
        attempts: usize,
    },
}

/// Seeded generator for exact-length members and non-members.
///
/// # Example
///
/// ```rust
/// use copylang::membership::fast_accepts;
/// use copylang::sample::SampleGenerator;
///
/// let mut generator = SampleGenerator::new(42);
/// let member = generator.positive(13).unwrap();
/// assert_eq!(member.len(), 13);
/// assert!(fast_accepts(&member.to_string()));
///
/// let non_member = generator.negative(13).unwrap();
/// assert_eq!(non_member.len(), 13);
/// assert!(!fast_accepts(&non_member.to_string()));
/// ```
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Create a new generator with the given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a member word of exactly the requested length.
    ///
    /// # Arguments
    ///
    /// * `length` - Exact length of the word to build
    ///
    /// # Returns
    ///
    /// A member word of that length, or [`SampleError::InfeasibleLength`]
    /// when no member of that length exists.
    pub fn positive(&mut self, length: usize) -> Result<Word, SampleError> {
        if !is_feasible_length(length) {
            return Err(SampleError::InfeasibleLength { length });
        }

        let max_seed = (length - 4) / 3;
        for _ in 0..POSITIVE_ATTEMPT_BUDGET {
            let m = self.rng.gen_range(1..=max_seed);

            // m ≤ (length - 4)/3 leaves room for at least one repeat.
            let max_repeats = (length - m - 4) / (2 * m);
            let k = self.rng.gen_range(1..=max_repeats);

            // Symbols left for x·y·x·y; k ≤ max_repeats keeps this ≥ 4.
            let rem = length - m * (2 * k + 1);
            if rem % 2 != 0 {
                continue;
            }
            let t = rem / 2;
            let p = self.rng.gen_range(1..=t - 1);
            let q = t - p;

            let seed = self.random_segment(m);
            let x = self.random_segment(p);
            let y = self.random_segment(q);
            return Ok(assemble(&seed, &x, &y, k, length));
        }

        // Deterministic fallback: the smallest seed of matching parity with
        // a single doubled repeat always fits a feasible length.
        let m = if length % 2 == 1 { 1 } else { 2 };
        let t = (length - 3 * m) / 2;
        let seed = vec![Symbol::A; m];
        let x = vec![Symbol::A];
        let y = vec![Symbol::B; t - 1];
        Ok(assemble(&seed, &x, &y, 1, length))
    }

    /// Generate a non-member word of exactly the requested length.
    ///
    /// Uniform random words are drawn until the fast decider rejects one.
    ///
    /// # Arguments
    ///
    /// * `length` - Exact length of the word to build
    ///
    /// # Returns
    ///
    /// A non-member word of that length, or [`SampleError::Exhausted`] if
    /// every draw in the budget turned out to be a member.
    pub fn negative(&mut self, length: usize) -> Result<Word, SampleError> {
        for _ in 0..NEGATIVE_ATTEMPT_BUDGET {
            let word = self.random_word(length);
            if fast_decompose(&word).is_none() {
                return Ok(word);
            }
        }
        Err(SampleError::Exhausted {
            length,
            attempts: NEGATIVE_ATTEMPT_BUDGET,
        })
    }

    /// Generate a uniform random word of the given length.
    pub fn random_word(&mut self, length: usize) -> Word {
        (0..length).map(|_| self.random_symbol()).collect()
    }

    /// Generate a random word of uniform random length in `0..=max_len`.
    pub fn random_word_up_to(&mut self, max_len: usize) -> Word {
        let length = self.rng.gen_range(0..=max_len);
        self.random_word(length)
    }

    fn random_segment(&mut self, length: usize) -> Vec<Symbol> {
        (0..length).map(|_| self.random_symbol()).collect()
    }

    #[inline]
    fn random_symbol(&mut self) -> Symbol {
        Symbol::ALPHABET[self.rng.gen_range(0..Symbol::ALPHABET.len())]
    }
}

/// Concatenate `w·x·y·x·y·(w·w)^k` into a word.
fn assemble(seed: &[Symbol], x: &[Symbol], y: &[Symbol], repeats: usize, length: usize) -> Word {
    let mut symbols = Vec::with_capacity(length);
    symbols.extend_from_slice(seed);
    symbols.extend_from_slice(x);
    symbols.extend_from_slice(y);
    symbols.extend_from_slice(x);
    symbols.extend_from_slice(y);
    for _ in 0..repeats {
        symbols.extend_from_slice(seed);
        symbols.extend_from_slice(seed);
    }
    debug_assert_eq!(symbols.len(), length);
    Word::from_symbols(symbols)
}
