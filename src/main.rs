// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use crate::cli::CliArgs;
use crate::password::generate;

mod cli;
mod error;
mod password;
mod random;

const LOWERCASE_ONLY_WARNING: &str = "Warning: Generating password using only lowercase letters.";

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("Parsed arguments: {args:?}");

    if args.generation_options().lowercase_only() {
        eprintln!("{LOWERCASE_ONLY_WARNING}");
    }

    match generate(args.length, args.uppercase, args.digits, args.symbols) {
        Ok(password) => {
            println!("{password}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
