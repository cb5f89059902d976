use std::process::ExitCode;

use clap::Parser;

mod commands;
mod host;
mod printer;

use burrow_runtime::{PROGRAM_NAME, logging};
use commands::{Command, OutputOptions};

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about = "Browse and manage local files", propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    let output = &cli.output;
    match cli.command {
        Command::Drives(args) => commands::drives::run(args, output),
        Command::Ls(args) => commands::list::run(args, output),
        Command::Tree(args) => commands::tree::run(args, output),
        Command::Mkdir(args) => commands::mutate::mkdir(args, output),
        Command::Rm(args) => commands::mutate::rm(args, output),
        Command::Rename(args) => commands::mutate::rename(args, output),
        Command::Cp(args) => commands::mutate::cp(args, output),
        Command::Open(args) => commands::mutate::open(args, output),
        Command::Shell(args) => commands::shell::run(args, output),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
