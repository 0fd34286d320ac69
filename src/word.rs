//! Two-symbol alphabet and immutable word model.
//!
//! Every algorithm in this crate operates on a [`Word`]: a finite, zero-based,
//! random-access sequence of [`Symbol`]s. Words are never mutated after
//! construction — decomposers and predicates read sub-ranges in place via
//! [`Word::symbols`] and never copy.
//!
//! Alphabet validation happens exactly once, at the [`Word::parse`] boundary:
//! a character outside `{a, b}` makes the whole input unparseable, which the
//! membership front doors fold into a negative verdict.
//!
//! # Example
//!
//! ```rust
//! use copylang::word::{Symbol, Word};
//!
//! let word = Word::parse("aabab").expect("valid alphabet");
//! assert_eq!(word.len(), 5);
//! assert_eq!(word.symbols()[0], Symbol::A);
//! assert_eq!(word.to_string(), "aabab");
//!
//! assert!(Word::parse("aacab").is_none()); // 'c' is not in the alphabet
//! ```

use std::fmt;

use smallvec::SmallVec;

/// One of the two alphabet symbols.
///
/// The language is defined over exactly two symbols, conventionally rendered
/// `a` and `b`. `Symbol` is `Copy` (1 byte) so sub-range comparisons compile
/// down to plain memory compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Symbol {
    /// The symbol rendered as `a`.
    A,
    /// The symbol rendered as `b`.
    B,
}

impl Symbol {
    /// The full alphabet, in rendering order.
    ///
    /// Useful for drawing uniform random symbols by index.
    pub const ALPHABET: [Symbol; 2] = [Symbol::A, Symbol::B];

    /// Parse a single character, returning `None` for anything outside the
    /// alphabet (including uppercase variants).
    #[inline]
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'a' => Some(Symbol::A),
            'b' => Some(Symbol::B),
            _ => None,
        }
    }

    /// The rendering of this symbol.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Symbol::A => 'a',
            Symbol::B => 'b',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Symbol::A => "a",
            Symbol::B => "b",
        })
    }
}

/// Inline capacity for the word buffer.
///
/// Most fuzzing inputs are short; 32 symbols covers them without touching the
/// heap, the same inline budget the per-call character buffers use elsewhere
/// in the ecosystem. Longer words spill transparently.
const INLINE_SYMBOLS: usize = 32;

/// An immutable word over the two-symbol alphabet.
///
/// A `Word` is the only input type the decomposers accept at the typed level;
/// by construction it cannot contain an out-of-alphabet symbol, so the
/// algorithms never re-validate. All reads go through [`Word::symbols`],
/// which exposes the underlying slice for zero-copy `(start, length)`
/// sub-range access.
///
/// # Example
///
/// ```rust
/// use copylang::word::{Symbol, Word};
///
/// let word = Word::from_symbols(vec![Symbol::A, Symbol::B, Symbol::A]);
/// assert_eq!(&word.symbols()[1..], &[Symbol::B, Symbol::A]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Word {
    symbols: SmallVec<[Symbol; INLINE_SYMBOLS]>,
}

impl Word {
    /// Parse a textual word.
    ///
    /// Returns `None` if any character falls outside the two-symbol alphabet.
    /// The empty string parses to the empty word (which every decomposer
    /// rejects on length grounds, not alphabet grounds).
    pub fn parse(input: &str) -> Option<Word> {
        let symbols = input
            .chars()
            .map(Symbol::from_char)
            .collect::<Option<SmallVec<[Symbol; INLINE_SYMBOLS]>>>()?;
        Some(Word { symbols })
    }

    /// Build a word from already-validated symbols.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Word {
        Word {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Number of symbols in the word.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True for the empty word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The underlying symbol slice, for zero-copy sub-range reads.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl FromIterator<Symbol> for Word {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Word {
        Word::from_symbols(iter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    /// Debug renders the textual form — fuzz-failure output stays readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let word = Word::parse("abba").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(
            word.symbols(),
            &[Symbol::A, Symbol::B, Symbol::B, Symbol::A]
        );
    }

    #[test]
    fn test_parse_empty() {
        let word = Word::parse("").unwrap();
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
    }

    #[test]
    fn test_parse_rejects_foreign_symbols() {
        assert!(Word::parse("abc").is_none());
        assert!(Word::parse("aAb").is_none());
        assert!(Word::parse("ab ").is_none());
        assert!(Word::parse("ab\u{e9}").is_none());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["", "a", "b", "aababaa", "bbbbbbbbb"] {
            let word = Word::parse(text).unwrap();
            assert_eq!(word.to_string(), text);
        }
    }

    #[test]
    fn test_debug_shows_text() {
        let word = Word::parse("aab").unwrap();
        assert_eq!(format!("{:?}", word), "Word(\"aab\")");
    }

    #[test]
    fn test_from_symbols_matches_parse() {
        let built = Word::from_symbols([Symbol::A, Symbol::B, Symbol::A]);
        let parsed = Word::parse("aba").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_symbol_char_round_trip() {
        for symbol in Symbol::ALPHABET {
            assert_eq!(Symbol::from_char(symbol.to_char()), Some(symbol));
        }
        assert_eq!(Symbol::from_char('c'), None);
    }
}
