use std::process::ExitCode;

use burrow_fs::FileItem;
use clap::Args;

use super::{CommandResult, OutputOptions, exit_code, finish, terminal_explorer};
use crate::printer::print_listing;

#[derive(Debug, Args)]
pub struct DrivesArgs {}

pub fn run(_args: DrivesArgs, output: &OutputOptions) -> ExitCode {
    finish("drives", execute(output))
}

fn execute(output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, false, false);
    explorer.load_drives();

    let roots: Vec<FileItem> = explorer
        .tree()
        .iter()
        .map(|root| {
            let mut item = root.to_file_item();
            item.name = root.name.clone();
            item
        })
        .collect();

    let mut printer = output.printer_config().make_printer();
    print_listing(printer.as_mut(), "drives", None, &roots)?;

    Ok(exit_code(&explorer))
}
