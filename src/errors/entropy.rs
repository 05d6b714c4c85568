use std::error::Error as StdError;

use thiserror::Error;

/// The secure random source failed to produce bytes.
///
/// This is the only error identifier generation can return. It is propagated
/// unchanged from the byte source up through every strict entry point.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The operating system random source reported a failure
    #[error("Entropy error: system random source failed")]
    Os(#[source] Box<dyn StdError + Send + Sync>),

    /// The byte source returned fewer bytes than were requested
    #[error("Entropy error: short read, expected {expected} bytes but got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The byte source is not usable at all
    #[error("Entropy error: {0}")]
    Unavailable(String),
}

impl EntropyError {
    /// Wraps any OS-level error reported by a random source.
    pub fn os<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Os(Box::new(err))
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
