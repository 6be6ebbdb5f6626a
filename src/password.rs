// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::{debug, trace};

use crate::error::PasswordError;
use crate::random::{OsRandom, RandomSource};

/// Password length used when none is given on the command line.
pub(crate) const DEFAULT_LENGTH: i64 = 12;

pub(crate) const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const DIGITS: &str = "0123456789";
pub(crate) const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GenerationOptions {
    pub(crate) length: i64,
    pub(crate) include_uppercase: bool,
    pub(crate) include_digits: bool,
    pub(crate) include_symbols: bool,
}

impl GenerationOptions {
    /// Whether any character class beyond the lowercase letters is enabled.
    pub(crate) fn lowercase_only(&self) -> bool {
        !(self.include_uppercase || self.include_digits || self.include_symbols)
    }

    fn validated_length(&self) -> Result<usize, PasswordError> {
        if self.length <= 0 {
            return Err(PasswordError::InvalidLength);
        }
        usize::try_from(self.length).map_err(|_| PasswordError::InvalidLength)
    }
}

/// Characters eligible for sampling: lowercase first, then uppercase, digits and symbols when
/// enabled.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub(crate) fn build(options: &GenerationOptions) -> CharacterPool {
        let mut pool: Vec<char> = LOWERCASE.chars().collect();

        if options.include_uppercase {
            pool.extend(UPPERCASE.chars());
        }
        if options.include_digits {
            pool.extend(DIGITS.chars());
        }
        if options.include_symbols {
            pool.extend(SYMBOLS.chars());
        }

        trace!("Built character pool of {} characters", pool.len());
        CharacterPool(pool)
    }

    pub(crate) fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/// Generates a password using randomness straight from the operating system.
pub(crate) fn generate(
    length: i64,
    include_uppercase: bool,
    include_digits: bool,
    include_symbols: bool,
) -> Result<String, PasswordError> {
    let options = GenerationOptions {
        length,
        include_uppercase,
        include_digits,
        include_symbols,
    };
    generate_with(&options, &mut OsRandom)
}

pub(crate) fn generate_with<R: RandomSource>(
    options: &GenerationOptions,
    source: &mut R,
) -> Result<String, PasswordError> {
    let length = options.validated_length()?;

    debug!("Generating random password of length {length}");

    let pool = CharacterPool::build(options);
    let characters = pool.as_slice();

    (0..length)
        .map(|_| {
            source
                .choose_index(characters.len())
                .map(|index| characters[index])
        })
        .collect()
}
