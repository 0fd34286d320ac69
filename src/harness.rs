//! Differential harness cross-checking the deciders against each other and
//! against the regex oracle.
//!
//! One run evaluates three batches of inputs:
//!
//! 1. **Targeted** words: a fixed list of hand-verified members and
//!    non-members near the length boundaries, each carrying its pinned
//!    verdict. The list includes out-of-alphabet words, which every
//!    backend must reject.
//! 2. **Random** words: uniform draws of length up to the configured
//!    maximum. The regex oracle is consulted only at or below the oracle
//!    ceiling; above it the backtracking engine is too slow to trust on a
//!    budget, so only the two deciders check each other.
//! 3. **Generated positives**: one member per feasible length up to the
//!    maximum, expected to be accepted regardless of the ceiling because the
//!    generator promises membership by construction.
//!
//! Every case where the collected verdicts are not unanimous is recorded as
//! a [`Disagreement`]; the run always completes and returns the full list in
//! its [`HarnessReport`] rather than stopping at the first mismatch, so one
//! run exposes every divergence the case budget can reach. Infrastructure
//! failures (the oracle engine giving up, sample generation failing) are
//! real errors and abort the run.
//!
//! Runs are deterministic per [`HarnessConfig::seed`]. With the `rayon`
//! feature the random batch is evaluated in parallel; the inputs and the
//! report are identical either way since all draws happen up front on one
//! seeded stream.

use std::fmt;

use thiserror::Error;

use crate::membership::{fast_accepts, is_feasible_length, naive_accepts, MIN_MEMBER_LEN};
use crate::oracle::{OracleError, RegexOracle};
use crate::sample::{SampleError, SampleGenerator};

/// Hand-verified boundary cases with their pinned verdicts.
///
/// Members carry one factorization in the comment.
const TARGETED_CASES: &[(&str, bool)] = &[
    ("", false),
    ("a", false),
    ("ab", false),
    ("aaaaaa", false),          // below minimum length
    ("abababa", false),         // echo matches but no doubled-seed tail
    ("aababab", false),
    ("aaaaaaaa", false),        // even length below 10 is infeasible
    ("bbbbbbbb", false),
    ("abcabca", false),         // 'c' is outside the alphabet
    ("aAbabaa", false),         // so is uppercase 'A'
    ("aababaa", true),          // a·a·b·a·b·aa
    ("aaaaaaa", true),          // a·a·a·a·a·aa
    ("aaaaaaaaa", true),        // a·a·a·a·a·aaaa
    ("bbbbbbbbb", true),        // b·b·b·b·b·bbbb
    ("aaababaaaa", true),       // aa·a·b·a·b·aaaa
    ("aaaaaaaaaa", true),       // aa·a·a·a·a·aaaa
    ("aabbaabbaaa", true),      // a·a·bba·a·bba·aa
    ("abbabaabababab", true),   // ab·b·a·b·a·abab·abab
];

/// Run parameters for the differential harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HarnessConfig {
    /// How many random words to draw.
    pub cases: usize,
    /// Maximum length of random words; also the top of the generated
    /// positive sweep.
    pub max_len: usize,
    /// Longest word the regex oracle is consulted on.
    pub oracle_ceiling: usize,
    /// Seed for the sample generator stream.
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cases: 2000,
            max_len: 80,
            oracle_ceiling: 40,
            seed: 0,
        }
    }
}

/// Which batch of a run produced a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Phase {
    /// Fixed boundary words with pinned verdicts.
    Targeted,
    /// Uniform random words.
    Random,
    /// Generated members, one per feasible length.
    Positive,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Targeted => "targeted",
            Phase::Random => "random",
            Phase::Positive => "positive",
        })
    }
}

/// One input on which the collected verdicts were not unanimous.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Disagreement {
    /// The batch the input came from.
    pub phase: Phase,
    /// The offending input, as text. Targeted inputs may leave the
    /// alphabet, so this is not always a parseable word.
    pub input: String,
    /// Verdict of the backtracking decider.
    pub naive: bool,
    /// Verdict of the square-collapsing decider.
    pub fast: bool,
    /// Verdict of the regex oracle, when the input was under the ceiling.
    pub oracle: Option<bool>,
    /// Pinned or promised verdict, when the batch carries one.
    pub expected: Option<bool>,
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} case \"{}\" (len {}): naive={} fast={}",
            self.phase,
            self.input,
            self.input.chars().count(),
            self.naive,
            self.fast
        )?;
        if let Some(verdict) = self.oracle {
            write!(f, " oracle={}", verdict)?;
        }
        if let Some(verdict) = self.expected {
            write!(f, " expected={}", verdict)?;
        }
        Ok(())
    }
}

/// Outcome of a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HarnessReport {
    /// Total cases evaluated across all batches.
    pub cases: usize,
    /// Every case with a non-unanimous verdict, in evaluation order.
    pub disagreements: Vec<Disagreement>,
}

impl HarnessReport {
    /// True iff no disagreement was recorded.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.disagreements.is_empty()
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            write!(f, "{} cases checked, all verdicts agree", self.cases)
        } else {
            write!(
                f,
                "{} cases checked, {} disagreement(s):",
                self.cases,
                self.disagreements.len()
            )?;
            for disagreement in &self.disagreements {
                write!(f, "\n  {}", disagreement)?;
            }
            Ok(())
        }
    }
}

/// Errors that abort a harness run.
///
/// Disagreements are never errors; they land in the report.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The regex oracle failed to compile or gave up on an input.
    #[error("oracle failure: {0}")]
    Oracle(#[from] OracleError),

    /// A sample generator could not produce a required input.
    #[error("sample generation failure: {0}")]
    Sample(#[from] SampleError),
}

/// Differential tester for the two deciders and the regex oracle.
///
/// # Example
///
/// ```rust
/// use copylang::harness::{DifferentialHarness, HarnessConfig};
///
/// let config = HarnessConfig {
///     cases: 100,
///     max_len: 24,
///     ..HarnessConfig::default()
/// };
/// let mut harness = DifferentialHarness::new(config)?;
/// let report = harness.run()?;
/// assert!(report.is_clean(), "{}", report);
/// # Ok::<(), copylang::harness::HarnessError>(())
/// ```
pub struct DifferentialHarness {
    config: HarnessConfig,
    generator: SampleGenerator,
    oracle: RegexOracle,
}

impl DifferentialHarness {
    /// Build a harness for the given configuration.
    ///
    /// # Returns
    ///
    /// The ready harness, or [`HarnessError::Oracle`] if the oracle pattern
    /// fails to compile.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        Ok(Self {
            config,
            generator: SampleGenerator::new(config.seed),
            oracle: RegexOracle::new()?,
        })
    }

    /// Build a harness with the default configuration.
    pub fn with_defaults() -> Result<Self, HarnessError> {
        Self::new(HarnessConfig::default())
    }

    /// The configuration this harness runs with.
    #[inline]
    pub fn config(&self) -> HarnessConfig {
        self.config
    }

    /// Run all three batches and collect every disagreement.
    ///
    /// The run completes even when disagreements are found. Repeated calls
    /// draw fresh cases from the same seeded stream.
    pub fn run(&mut self) -> Result<HarnessReport, HarnessError> {
        let mut report = HarnessReport {
            cases: 0,
            disagreements: Vec::new(),
        };
        self.run_targeted(&mut report)?;
        self.run_random(&mut report)?;
        self.run_positive(&mut report)?;
        Ok(report)
    }

    fn run_targeted(&self, report: &mut HarnessReport) -> Result<(), HarnessError> {
        for (text, expected) in TARGETED_CASES {
            report.cases += 1;
            if let Some(found) = judge(
                &self.oracle,
                self.config.oracle_ceiling,
                Phase::Targeted,
                (*text).to_string(),
                Some(*expected),
            )? {
                report.disagreements.push(found);
            }
        }
        Ok(())
    }

    #[cfg(not(feature = "rayon"))]
    fn run_random(&mut self, report: &mut HarnessReport) -> Result<(), HarnessError> {
        for _ in 0..self.config.cases {
            let word = self.generator.random_word_up_to(self.config.max_len);
            report.cases += 1;
            if let Some(found) = judge(
                &self.oracle,
                self.config.oracle_ceiling,
                Phase::Random,
                word.to_string(),
                None,
            )? {
                report.disagreements.push(found);
            }
        }
        Ok(())
    }

    /// Parallel variant: draws all inputs up front on the seeded stream,
    /// then judges them in parallel. Report order matches the serial path.
    #[cfg(feature = "rayon")]
    fn run_random(&mut self, report: &mut HarnessReport) -> Result<(), HarnessError> {
        use rayon::prelude::*;

        let words: Vec<String> = (0..self.config.cases)
            .map(|_| self.generator.random_word_up_to(self.config.max_len).to_string())
            .collect();
        report.cases += words.len();

        let oracle = &self.oracle;
        let ceiling = self.config.oracle_ceiling;
        let found: Vec<Option<Disagreement>> = words
            .into_par_iter()
            .map(|text| judge(oracle, ceiling, Phase::Random, text, None))
            .collect::<Result<_, _>>()?;
        report.disagreements.extend(found.into_iter().flatten());
        Ok(())
    }

    fn run_positive(&mut self, report: &mut HarnessReport) -> Result<(), HarnessError> {
        for length in MIN_MEMBER_LEN..=self.config.max_len {
            if !is_feasible_length(length) {
                continue;
            }
            let word = self.generator.positive(length)?;
            report.cases += 1;
            if let Some(found) = judge(
                &self.oracle,
                self.config.oracle_ceiling,
                Phase::Positive,
                word.to_string(),
                Some(true),
            )? {
                report.disagreements.push(found);
            }
        }
        Ok(())
    }
}

/// Judge one input: collect all applicable verdicts and compare.
///
/// The input is judged through the string front doors so out-of-alphabet
/// text gets the same invalid-symbol folding the public API promises, on
/// every backend at once.
fn judge(
    oracle: &RegexOracle,
    oracle_ceiling: usize,
    phase: Phase,
    input: String,
    expected: Option<bool>,
) -> Result<Option<Disagreement>, HarnessError> {
    let naive = naive_accepts(&input);
    let fast = fast_accepts(&input);
    let oracle_verdict = if input.chars().count() <= oracle_ceiling {
        Some(oracle.matches(&input)?)
    } else {
        None
    };

    let unanimous = oracle_verdict
        .into_iter()
        .chain(expected)
        .chain([fast])
        .all(|verdict| verdict == naive);
    if unanimous {
        Ok(None)
    } else {
        Ok(Some(Disagreement {
            phase,
            input,
            naive,
            fast,
            oracle: oracle_verdict,
            expected,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HarnessConfig {
        HarnessConfig {
            cases: 150,
            max_len: 24,
            oracle_ceiling: 20,
            seed: 0,
        }
    }

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.cases, 2000);
        assert_eq!(config.max_len, 80);
        assert_eq!(config.oracle_ceiling, 40);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_small_run_is_clean() {
        let mut harness = DifferentialHarness::new(small_config()).unwrap();
        let report = harness.run().unwrap();
        assert!(report.is_clean(), "{}", report);

        let positives = (MIN_MEMBER_LEN..=small_config().max_len)
            .filter(|&n| is_feasible_length(n))
            .count();
        assert_eq!(
            report.cases,
            TARGETED_CASES.len() + small_config().cases + positives
        );
    }

    #[test]
    fn test_runs_are_deterministic() {
        let mut first = DifferentialHarness::new(small_config()).unwrap();
        let mut second = DifferentialHarness::new(small_config()).unwrap();
        assert_eq!(first.run().unwrap(), second.run().unwrap());
    }

    #[test]
    fn test_judge_flags_broken_expectation() {
        // A deliberately wrong pinned verdict must surface as a disagreement.
        let oracle = RegexOracle::new().unwrap();
        let found = judge(&oracle, 40, Phase::Targeted, "aababaa".to_string(), Some(false))
            .unwrap()
            .expect("expectation mismatch should be recorded");
        assert_eq!(found.phase, Phase::Targeted);
        assert_eq!(found.input, "aababaa");
        assert!(found.naive);
        assert!(found.fast);
        assert_eq!(found.oracle, Some(true));
        assert_eq!(found.expected, Some(false));
    }

    #[test]
    fn test_judge_skips_oracle_above_ceiling() {
        let oracle = RegexOracle::new().unwrap();
        let found = judge(&oracle, 5, Phase::Random, "aababaa".to_string(), None).unwrap();
        // Deciders agree and no other verdict applies.
        assert!(found.is_none());
    }

    #[test]
    fn test_targeted_batch_pins_foreign_symbols() {
        // The targeted list must carry at least one out-of-alphabet word,
        // and every entry must be judged rather than skipped.
        use crate::word::Word;

        assert!(
            TARGETED_CASES
                .iter()
                .any(|(text, _)| Word::parse(text).is_none()),
            "targeted list has no out-of-alphabet entry"
        );

        let config = HarnessConfig {
            cases: 0,
            max_len: 6,
            oracle_ceiling: 40,
            seed: 0,
        };
        let mut harness = DifferentialHarness::new(config).unwrap();
        let report = harness.run().unwrap();
        assert!(report.is_clean(), "{}", report);
        assert!(report.cases >= TARGETED_CASES.len());
    }

    #[test]
    fn test_judge_foreign_symbols_rejected_everywhere() {
        // Deciders and oracle all fold invalid symbols into a negative
        // verdict, so a pinned false must come back unanimous.
        let oracle = RegexOracle::new().unwrap();
        for text in ["abcabca", "aAbabaa", "aababa\u{e9}"] {
            let found = judge(&oracle, 40, Phase::Targeted, text.to_string(), Some(false)).unwrap();
            assert!(found.is_none(), "disagreement on {:?}", text);
        }
    }

    #[test]
    fn test_disagreement_display() {
        let disagreement = Disagreement {
            phase: Phase::Targeted,
            input: "aababaa".to_string(),
            naive: true,
            fast: true,
            oracle: Some(true),
            expected: Some(false),
        };
        assert_eq!(
            disagreement.to_string(),
            "targeted case \"aababaa\" (len 7): naive=true fast=true oracle=true expected=false"
        );
    }

    #[test]
    fn test_report_display() {
        let clean = HarnessReport {
            cases: 42,
            disagreements: Vec::new(),
        };
        assert_eq!(clean.to_string(), "42 cases checked, all verdicts agree");

        let dirty = HarnessReport {
            cases: 42,
            disagreements: vec![Disagreement {
                phase: Phase::Random,
                input: "ab".to_string(),
                naive: false,
                fast: true,
                oracle: None,
                expected: None,
            }],
        };
        let rendered = dirty.to_string();
        assert!(rendered.contains("1 disagreement"));
        assert!(rendered.contains("random case \"ab\""));
    }
}
