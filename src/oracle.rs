//! Reference oracle backed by a back-reference regex.
//!
//! The copy-pattern language is not regular (the `(w·w)^k` tail copies the
//! unbounded prefix), so no plain regular expression decides it. A
//! backtracking engine with back-references can: the pattern
//!
//! ```text
//! ^((?:a|b)+)((?:a|b)+)((?:a|b)+)\2\3(\1\1)+$
//! ```
//!
//! captures `w`, `x`, `y` greedily and lets `\2\3` demand the echo and
//! `(\1\1)+` demand the doubled-seed tail. The `regex` crate deliberately
//! rejects back-references, so this module uses `fancy-regex`, whose
//! backtracking engine supports them at the cost of non-linear runtime.
//!
//! That cost is the reason the oracle is a *short-word* reference only: the
//! engine may backtrack exponentially, and on adversarial inputs it can give
//! up with an error rather than loop. Callers cap the input length (the
//! differential harness does so via its oracle ceiling) and treat engine
//! errors as failures of the run, never as verdicts.

use thiserror::Error;

/// The anchored back-reference pattern deciding the language.
const BACKREFERENCE_PATTERN: &str = r"^((?:a|b)+)((?:a|b)+)((?:a|b)+)\2\3(\1\1)+$";

/// Errors surfaced by the regex oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The back-reference pattern failed to compile.
    #[error("oracle pattern failed to compile: {0}")]
    Compile(#[source] fancy_regex::Error),

    /// The engine gave up on an input, typically by exhausting its
    /// backtracking budget.
    #[error("oracle evaluation failed on input of length {length}: {source}")]
    Evaluation {
        /// Length of the offending input, in bytes.
        length: usize,
        /// Underlying engine error.
        #[source]
        source: fancy_regex::Error,
    },
}

/// A compiled membership oracle for short words.
///
/// Construction compiles the back-reference pattern once; evaluation is then
/// a single engine call per word. Verdicts are exact where the engine
/// completes, so any disagreement with the deciders on a short word is a
/// genuine bug in one of them.
///
/// # Example
///
/// ```rust
/// use copylang::oracle::RegexOracle;
///
/// let oracle = RegexOracle::new().unwrap();
/// assert!(oracle.matches("aababaa").unwrap());
/// assert!(!oracle.matches("abababa").unwrap());
/// ```
#[derive(Debug)]
pub struct RegexOracle {
    pattern: fancy_regex::Regex,
}

impl RegexOracle {
    /// Compiles the oracle pattern.
    ///
    /// # Returns
    ///
    /// The ready oracle, or [`OracleError::Compile`] if the engine rejects
    /// the pattern.
    pub fn new() -> Result<RegexOracle, OracleError> {
        let pattern =
            fancy_regex::Regex::new(BACKREFERENCE_PATTERN).map_err(OracleError::Compile)?;
        Ok(RegexOracle { pattern })
    }

    /// Decides membership of `input`.
    ///
    /// The pattern is anchored on both ends, so a match means the whole
    /// input belongs to the language; any character outside `{a, b}` simply
    /// fails to match. Engine give-ups surface as
    /// [`OracleError::Evaluation`], never as a verdict.
    pub fn matches(&self, input: &str) -> Result<bool, OracleError> {
        self.pattern
            .is_match(input)
            .map_err(|source| OracleError::Evaluation {
                length: input.len(),
                source,
            })
    }
}
