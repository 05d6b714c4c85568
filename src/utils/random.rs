// src/utils/random.rs - Sources of random bytes
use std::sync::Mutex;

use log::trace;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};

use crate::errors::EntropyError;

/// Something that can hand out `len` random bytes on demand.
///
/// Identifier generation only ever talks to this trait, so tests can swap in
/// a seeded or mocked source while production code uses [`OsByteSource`].
/// Plain functions and closures with the matching signature implement it too.
#[cfg_attr(test, mockall::automock)]
pub trait ByteSource {
    /// Returns a freshly allocated buffer of exactly `len` random bytes
    ///
    /// ### Errors
    /// * `EntropyError` - If the underlying random source fails. Callers decide whether to retry.
    fn generate(&self, len: usize) -> Result<Vec<u8>, EntropyError>;
}

impl<F> ByteSource for F
where
    F: Fn(usize) -> Result<Vec<u8>, EntropyError>,
{
    fn generate(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        self(len)
    }
}

/// The operating system's cryptographically secure random source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsByteSource;

impl ByteSource for OsByteSource {
    fn generate(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut buffer = vec![0u8; len];
        OsRng.try_fill_bytes(&mut buffer).map_err(EntropyError::os)?;
        trace!("Read {} bytes from the system random source", len);
        Ok(buffer)
    }
}

/// Deterministic byte source seeded from a `u64`.
///
/// Produces the same sequence for the same seed, which makes generated
/// identifiers reproducible. Never use it for identifiers that must be
/// unguessable.
#[derive(Debug)]
pub struct SeededByteSource {
    rng: Mutex<StdRng>,
}

impl SeededByteSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ByteSource for SeededByteSource {
    fn generate(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EntropyError::unavailable("seeded random source lock poisoned"))?;

        let mut buffer = vec![0u8; len];
        rng.fill_bytes(&mut buffer);
        Ok(buffer)
    }
}
