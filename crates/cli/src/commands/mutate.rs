use std::path::PathBuf;
use std::process::ExitCode;

use burrow_engine::Explorer;
use clap::Args;

use super::{CommandResult, OutputOptions, absolute, exit_code, finish, focus, terminal_explorer};
use crate::printer::print_listing;

#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Directory to create the folder in
    pub parent: PathBuf,

    /// Name of the new folder
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// File or folder to delete
    pub path: PathBuf,

    /// Do not ask for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// File or folder to rename
    pub path: PathBuf,

    /// New name, without any directory part
    pub new_name: String,
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// File or folder to copy
    pub source: PathBuf,

    /// Directories to paste into
    #[arg(required = true, num_args = 1..)]
    pub destinations: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// File to open, or folder to list
    pub path: PathBuf,
}

pub fn mkdir(args: MkdirArgs, output: &OutputOptions) -> ExitCode {
    finish("mkdir", run_mkdir(args, output))
}

fn run_mkdir(args: MkdirArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, false, false);
    if !explorer.navigate_to(absolute(&args.parent)?) {
        return Ok(exit_code(&explorer));
    }
    explorer.create_folder_named(&args.name);
    Ok(exit_code(&explorer))
}

pub fn rm(args: DeleteArgs, output: &OutputOptions) -> ExitCode {
    finish("rm", run_rm(args, output))
}

fn run_rm(args: DeleteArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, args.yes, false);
    focus(&mut explorer, &args.path)?;
    explorer.delete_selected();
    Ok(exit_code(&explorer))
}

pub fn rename(args: RenameArgs, output: &OutputOptions) -> ExitCode {
    finish("rename", run_rename(args, output))
}

fn run_rename(args: RenameArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, false, false);
    focus(&mut explorer, &args.path)?;
    explorer.rename_selected_to(&args.new_name);
    Ok(exit_code(&explorer))
}

pub fn cp(args: CopyArgs, output: &OutputOptions) -> ExitCode {
    finish("cp", run_cp(args, output))
}

fn run_cp(args: CopyArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, false, false);
    focus(&mut explorer, &args.source)?;
    explorer.copy_selected();

    let mut failures = 0;
    for dest in &args.destinations {
        if !paste_into(&mut explorer, absolute(dest)?) {
            failures += 1;
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn paste_into(explorer: &mut Explorer, dest: PathBuf) -> bool {
    if !explorer.navigate_to(dest) {
        return false;
    }
    explorer.paste();
    explorer.last_status().is_some_and(|s| s.is_success())
}

pub fn open(args: OpenArgs, output: &OutputOptions) -> ExitCode {
    finish("open", run_open(args, output))
}

fn run_open(args: OpenArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = terminal_explorer(output, false, false);
    focus(&mut explorer, &args.path)?;

    let opens_directory = explorer.selected().is_some_and(|i| i.is_dir);
    explorer.open_selected();

    if opens_directory && let Some(dir) = explorer.current_path().map(|p| p.to_path_buf()) {
        let mut printer = output.printer_config().make_printer();
        print_listing(printer.as_mut(), "ls", Some(&dir), explorer.files())?;
    }

    Ok(exit_code(&explorer))
}
