use log::trace;

use super::random::{ByteSource, OsByteSource};
use crate::errors::EntropyError;
use crate::models::Alphabet;

/// Batch sizing factor from the reference Nano ID algorithm
const STEP_FACTOR: f64 = 1.6;

/// Number of random bytes requested per batch for `size` symbols.
///
/// Sized so one batch is usually enough once the bytes whose masked value
/// falls outside the alphabet are thrown away.
pub fn step_size(alphabet: &Alphabet, size: usize) -> usize {
    let mask = alphabet.mask();
    (STEP_FACTOR * (mask * size) as f64 / alphabet.len() as f64).ceil() as usize
}

/// Builds a `size`-symbol string from `alphabet` using bytes from `source`.
///
/// Each byte is masked down to the smallest power-of-two range covering the
/// alphabet; masked values past the end of the alphabet are rejected rather
/// than wrapped, so every symbol is equally likely. Batches are requested
/// until enough symbols have been accepted, and the function returns as soon
/// as the last symbol is appended, even mid-batch.
///
/// ### Errors
/// * `EntropyError` - The first failure from `source`, unchanged, or a short read
///   if `source` returns fewer bytes than requested
pub fn format<S>(source: &S, alphabet: &Alphabet, size: usize) -> Result<String, EntropyError>
where
    S: ByteSource + ?Sized,
{
    if size == 0 {
        return Ok(String::new());
    }

    let mask = alphabet.mask();
    let step = step_size(alphabet, size);
    let symbols = alphabet.symbols();

    let mut id = String::with_capacity(size);
    let mut count = 0;

    loop {
        let bytes = source.generate(step)?;
        if bytes.len() < step {
            return Err(EntropyError::ShortRead {
                expected: step,
                actual: bytes.len(),
            });
        }
        trace!("Mapping a batch of {} random bytes onto {} symbols", step, symbols.len());

        for byte in bytes.iter().take(step) {
            let index = *byte as usize & mask;

            if let Some(symbol) = symbols.get(index) {
                id.push(*symbol);
                count += 1;
                if count == size {
                    return Ok(id);
                }
            }
        }
    }
}

/// Generates a `size`-symbol string from `alphabet` with the system random source
pub fn generate_string(alphabet: &Alphabet, size: usize) -> Result<String, EntropyError> {
    format(&OsByteSource, alphabet, size)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::utils::random::{MockByteSource, SeededByteSource};

    #[test]
    fn test_step_size() {
        let default = Alphabet::url_safe();
        assert_eq!(step_size(&default, 21), 34);
        assert_eq!(step_size(&default, 3), 5);
        assert_eq!(step_size(&default, 0), 0);

        let abc = Alphabet::new("abc").unwrap();
        assert_eq!(step_size(&abc, 2), 4);

        let single = Alphabet::new("x").unwrap();
        assert_eq!(step_size(&single, 5), 8);
    }

    #[test]
    fn test_generate_string_length_and_charset() {
        let alphabets = [
            Alphabet::url_safe(),
            Alphabet::alpha_only(),
            Alphabet::alpha_numeric(),
            Alphabet::new("x").unwrap(),
            Alphabet::new("01").unwrap(),
            Alphabet::new("abc").unwrap(),
            Alphabet::new("αβγδε").unwrap(),
        ];

        for alphabet in &alphabets {
            for size in [0, 1, 2, 7, 21, 100] {
                let id = generate_string(alphabet, size).unwrap();
                assert_eq!(id.chars().count(), size, "alphabet {}", alphabet);
                assert!(
                    id.chars().all(|c| alphabet.contains(c)),
                    "Generated ID {} contains symbols outside {}",
                    id,
                    alphabet
                );
            }
        }
    }

    #[test]
    fn test_full_byte_alphabet() {
        let symbols: Vec<char> = (0..256u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let alphabet = Alphabet::from_chars(symbols).unwrap();

        let id = generate_string(&alphabet, 500).unwrap();
        assert_eq!(id.chars().count(), 500);
        assert!(id.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_distribution_is_uniform() {
        // Ten symbols: masked bytes 10..=15 must be rejected, not folded back
        let alphabet = Alphabet::new("0123456789").unwrap();
        let samples = 100_000;

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in generate_string(&alphabet, samples).unwrap().chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), alphabet.len());
        let expected = samples / alphabet.len();
        for (symbol, count) in counts {
            let deviation = count.abs_diff(expected) as f64 / expected as f64;
            assert!(
                deviation < 0.05,
                "Symbol {} appeared {} times, expected about {}",
                symbol,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_single_symbol_draws_are_uniform() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let draws = 20_000;

        let mut counts: HashMap<char, usize> = HashMap::new();
        for _ in 0..draws {
            let id = generate_string(&alphabet, 1).unwrap();
            *counts.entry(id.chars().next().unwrap()).or_default() += 1;
        }

        let expected = draws / alphabet.len();
        assert_eq!(counts.len(), 5);
        for count in counts.values() {
            assert!(count.abs_diff(expected) < expected / 10);
        }
    }

    #[test]
    fn test_zero_size_never_touches_source() {
        let mut source = MockByteSource::new();
        source.expect_generate().times(0);

        assert_eq!(format(&source, &Alphabet::url_safe(), 0).unwrap(), "");
    }

    #[test]
    fn test_error_propagates_without_retry() {
        let mut source = MockByteSource::new();
        source
            .expect_generate()
            .times(1)
            .returning(|_| Err(EntropyError::unavailable("entropy pool offline")));

        let err = format(&source, &Alphabet::url_safe(), 21).unwrap_err();
        assert!(matches!(err, EntropyError::Unavailable(msg) if msg == "entropy pool offline"));
    }

    #[test]
    fn test_returns_mid_batch() {
        // Default alphabet, size 3 -> one batch of 5 bytes; the first three map directly
        let mut source = MockByteSource::new();
        source
            .expect_generate()
            .withf(|len| *len == 5)
            .times(1)
            .returning(|len| Ok((0..len as u8).collect()));

        assert_eq!(format(&source, &Alphabet::url_safe(), 3).unwrap(), "-_0");
    }

    #[test]
    fn test_rejects_out_of_range_and_refills() {
        // "abc" has mask 3, so masked value 3 is out of range
        let alphabet = Alphabet::new("abc").unwrap();
        let calls = AtomicUsize::new(0);

        let source = |len: usize| -> Result<Vec<u8>, EntropyError> {
            assert_eq!(len, 4);
            match calls.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(vec![3, 7, 0b0101, 255]),
                _ => Ok(vec![0b1000, 2, 2, 2]),
            }
        };

        assert_eq!(format(&source, &alphabet, 2).unwrap(), "ba");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_high_bits_are_masked_off() {
        let alphabet = Alphabet::new("01").unwrap();
        let source = |len: usize| -> Result<Vec<u8>, EntropyError> {
            // mask 1, step ceil(1.6 * 4 / 2) = 4
            assert_eq!(len, 4);
            Ok(vec![0xFE, 0xFF, 0x10, 0x11])
        };

        assert_eq!(format(&source, &alphabet, 4).unwrap(), "0101");
    }

    #[test]
    fn test_short_read_is_an_error() {
        let source = |len: usize| -> Result<Vec<u8>, EntropyError> { Ok(vec![0; len / 2]) };

        let err = format(&source, &Alphabet::url_safe(), 21).unwrap_err();
        assert!(matches!(
            err,
            EntropyError::ShortRead {
                expected: 34,
                actual: 17
            }
        ));
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let alphabet = Alphabet::url_safe();
        let a = format(&SeededByteSource::new(2024), &alphabet, 21).unwrap();
        let b = format(&SeededByteSource::new(2024), &alphabet, 21).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 21);
    }
}
