pub mod alphabet;
pub mod shape;

pub use alphabet::{Alphabet, ALPHA_NUMERIC, ALPHA_ONLY, DEFAULT_ALPHABET, MAX_ALPHABET_LEN};
pub use shape::IdShape;
