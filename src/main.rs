use std::process;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;

mod cli;
mod config;
mod error;
mod git;
mod identity;
mod prompt;
mod setup;
mod spinner;
mod validation;

fn main() {
    let cli: Cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            }
            _ => {
                eprintln!("{err}");
                process::exit(1);
            }
        },
    };

    if let Err(err) = setup::run(&cli) {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }
}
