// src/models/alphabet.rs - Symbol sets identifiers are drawn from
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::AlphabetError;

/// URL-safe default alphabet (64 symbols): punctuation, digits, then letters
pub const DEFAULT_ALPHABET: &str =
    "-_0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Letters only (52 symbols). HTML element ids may not start with a digit,
/// so web-safe groups take their first character from here.
pub const ALPHA_ONLY: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Letters and digits, no punctuation (62 symbols)
pub const ALPHA_NUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest alphabet a masked random byte can index
pub const MAX_ALPHABET_LEN: usize = 256;

/// An ordered, non-empty sequence of at most 256 symbols.
///
/// Duplicate symbols are accepted. They skew the output frequency towards the
/// repeated symbol but do not break generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order
    ///
    /// ### Errors
    /// * `AlphabetError::Empty` - If `symbols` is empty
    /// * `AlphabetError::TooLong` - If `symbols` has more than 256 characters
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        Self::from_chars(symbols.chars().collect())
    }

    pub fn from_chars(symbols: Vec<char>) -> Result<Self, AlphabetError> {
        match symbols.len() {
            0 => Err(AlphabetError::Empty),
            len if len > MAX_ALPHABET_LEN => Err(AlphabetError::TooLong { len }),
            _ => Ok(Self { symbols }),
        }
    }

    /// The 64-symbol default alphabet
    pub fn url_safe() -> Self {
        Self::from_static(DEFAULT_ALPHABET)
    }

    /// The 52-symbol letters-only alphabet
    pub fn alpha_only() -> Self {
        Self::from_static(ALPHA_ONLY)
    }

    /// The 62-symbol alphanumeric alphabet
    pub fn alpha_numeric() -> Self {
        Self::from_static(ALPHA_NUMERIC)
    }

    // Only for the constants above, which are known to be in bounds
    fn from_static(symbols: &'static str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Smallest `2^k - 1` covering every index of the alphabet.
    ///
    /// Computed from the bit length of `(len - 1) | 1`, so a single-symbol
    /// alphabet still gets one bit.
    pub fn mask(&self) -> usize {
        let bits = usize::BITS - ((self.len() - 1) | 1).leading_zeros();
        (1 << bits) - 1
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::url_safe()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}
