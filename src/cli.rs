// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::Parser;

use crate::password::{GenerationOptions, DEFAULT_LENGTH};

/// passgen - Generate a secure random password.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub(crate) struct CliArgs {
    /// Password length
    #[clap(long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub(crate) length: i64,

    #[clap(long, help = "Include uppercase letters in the password.")]
    pub(crate) uppercase: bool,

    #[clap(long, help = "Include digits in the password.")]
    pub(crate) digits: bool,

    #[clap(long, help = "Include special symbols in the password.")]
    pub(crate) symbols: bool,

    /// Print debug information to stderr
    #[clap(short, long)]
    pub(crate) verbose: bool,
}

impl CliArgs {
    pub(crate) fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            include_uppercase: self.uppercase,
            include_digits: self.digits,
            include_symbols: self.symbols,
        }
    }
}
