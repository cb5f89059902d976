use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use super::{CommandResult, OutputOptions, absolute, finish, terminal_explorer};
use crate::printer::print_listing;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to list (defaults to the current directory)
    pub path: Option<PathBuf>,
}

pub fn run(args: ListArgs, output: &OutputOptions) -> ExitCode {
    finish("ls", execute(args, output))
}

fn execute(args: ListArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let dir = absolute(&args.path.unwrap_or_else(|| PathBuf::from(".")))?;

    let mut explorer = terminal_explorer(output, false, false);
    if !explorer.navigate_to(&dir) {
        return Ok(ExitCode::from(2));
    }

    let mut printer = output.printer_config().make_printer();
    print_listing(printer.as_mut(), "ls", Some(&dir), explorer.files())?;

    Ok(ExitCode::SUCCESS)
}
