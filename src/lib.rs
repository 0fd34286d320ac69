//! # copylang
//!
//! Membership testing for the copy-pattern language
//!
//! ```text
//! L = { w·x·y·x·y·(w·w)^k : w, x, y ∈ {a, b}+, k ≥ 1 }
//! ```
//!
//! The language echoes two free segments and then repeats the doubled
//! prefix, making it a copy language in the spirit of the pattern languages
//! studied in:
//!
//! > Angluin, Dana. "Finding patterns common to a set of strings." Journal
//! > of Computer and System Sciences 21.1 (1980): 46-62.
//!
//! The crate provides two independent deciders (a backtracking one and a
//! square-collapsing one), a back-reference regex oracle for short words,
//! seeded exact-length sample generators, and a differential harness that
//! cross-checks all of them and reports every disagreement it finds.
//!
//! ## Example
//!
//! ```rust
//! use copylang::prelude::*;
//!
//! assert!(fast_accepts("aababaa")); // a·a·b·a·b·aa
//! assert!(!fast_accepts("abababa"));
//!
//! let word = Word::parse("aabbaabbaaa").unwrap();
//! let witness = fast_decompose(&word).unwrap();
//! assert!(witness.certifies(&word));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod harness;
pub mod membership;
pub mod oracle;
pub mod sample;
pub mod segment;
pub mod word;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::harness::{
        DifferentialHarness, Disagreement, HarnessConfig, HarnessError, HarnessReport, Phase,
    };
    pub use crate::membership::{
        fast_accepts, fast_decompose, is_feasible_length, naive_accepts, naive_decompose,
        Decomposition, MIN_EVEN_MEMBER_LEN, MIN_MEMBER_LEN,
    };
    pub use crate::oracle::{OracleError, RegexOracle};
    pub use crate::sample::{SampleError, SampleGenerator};
    pub use crate::word::{Symbol, Word};
}
