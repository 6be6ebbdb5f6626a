// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error;

/// Failures that can occur while generating a password.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum PasswordError {
    #[error("Password length must be a positive integer.")]
    InvalidLength,

    /// The operating system randomness source could not be read.
    #[error("Failed to read from the system randomness source: {0}")]
    Entropy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message() {
        assert_eq!(
            PasswordError::InvalidLength.to_string(),
            "Password length must be a positive integer."
        );
    }

    #[test]
    fn entropy_message_carries_cause() {
        let error = PasswordError::Entropy("device not ready".to_string());
        assert!(error.to_string().ends_with("device not ready"));
    }
}
