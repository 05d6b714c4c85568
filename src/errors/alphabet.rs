use thiserror::Error;

use crate::models::alphabet::MAX_ALPHABET_LEN;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// An alphabet needs at least one symbol
    #[error("Alphabet error: alphabet must contain at least one symbol")]
    Empty,

    /// A masked byte can only address 256 symbols
    #[error("Alphabet error: alphabet has {len} symbols, at most {max} are supported", max = MAX_ALPHABET_LEN)]
    TooLong { len: usize },
}
