#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod report;
pub mod rewrite;
pub mod steps;
pub mod template;
pub mod verify;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    steps::execute(cli.args)
}
