// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::trace;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::PasswordError;

/// Uniform choice among `len` items, the only primitive password generation needs.
pub(crate) trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> Result<usize, PasswordError>;
}

/**
 * Randomness taken directly from the operating system.
 *
 * **Note:** In principle, all RNGs in Rand implementing CryptoRng are suitable as a source of
 * randomness for generating passwords (if they are properly seeded), but it is more conservative to
 * only use randomness directly from the operating system via the getrandom crate.
 *
 * Source: https://rust-random.github.io/rand/rand/distributions/struct.Alphanumeric.html#passwords.
 */
#[derive(Debug, Default)]
pub(crate) struct OsRandom;

impl RandomSource for OsRandom {
    fn choose_index(&mut self, len: usize) -> Result<usize, PasswordError> {
        debug_assert!(len > 0, "cannot choose from an empty set");

        let len = len as u64;
        // Largest multiple of `len` below u64::MAX; draws above it are rejected to avoid modulo bias.
        let zone = u64::MAX - u64::MAX % len;

        // rand's range sampling needs an infallible RNG and would panic on OS failure; keep the
        // fallible `TryRngCore` draw so the error is returned instead.
        loop {
            let value = OsRng
                .try_next_u64()
                .map_err(|e| PasswordError::Entropy(e.to_string()))?;

            if value < zone {
                return Ok((value % len) as usize);
            }

            trace!("Rejected biased draw, sampling again");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_stays_in_range() {
        let mut source = OsRandom;
        for len in [1, 2, 26, 89] {
            for _ in 0..200 {
                let index = source.choose_index(len).unwrap();
                assert!(index < len);
            }
        }
    }

    #[test]
    fn os_random_single_item() {
        let mut source = OsRandom;
        assert_eq!(source.choose_index(1).unwrap(), 0);
    }

    #[test]
    fn os_random_reaches_every_index() {
        let mut source = OsRandom;
        let mut seen = [false; 10];
        for _ in 0..2_000 {
            seen[source.choose_index(10).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
