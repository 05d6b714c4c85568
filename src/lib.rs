//! Short, URL-safe, unbiased random identifiers.
//!
//! Symbols are picked by masking random bytes from a secure source and
//! rejecting the ones that fall outside the alphabet, so every symbol is
//! equally likely even for alphabets whose size is not a power of two.
//!
//! ```
//! let id = nanoid_gen::new_id().unwrap();
//! assert_eq!(id.len(), 21);
//!
//! let hex = nanoid_gen::Alphabet::new("0123456789abcdef").unwrap();
//! let token = nanoid_gen::generate_string(&hex, 32).unwrap();
//! assert_eq!(token.len(), 32);
//! ```

pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

pub use errors::{AlphabetError, EntropyError};
pub use models::{Alphabet, IdShape, ALPHA_NUMERIC, ALPHA_ONLY, DEFAULT_ALPHABET};
pub use services::id_generator::{
    generate_string, new_id, new_id_must, new_short_id, new_web_safe_id, try_new_web_safe_id,
    IdGenerator, DEFAULT_SIZE, SHORT_SIZE,
};
pub use utils::id_generator::format;
pub use utils::random::{ByteSource, OsByteSource, SeededByteSource};
