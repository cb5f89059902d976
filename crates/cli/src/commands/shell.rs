use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use burrow_engine::Explorer;
use burrow_fs::FileItem;
use burrow_runtime::default_start_dir;
use clap::Args;
use log::debug;

use super::{CommandResult, OutputOptions, absolute, finish, terminal_explorer};
use crate::printer::{ListingPrinter, print_listing};

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Directory to start in (defaults to $BURROW_START_DIR or the home directory)
    pub path: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  drives              reload and list volumes
  tree                show the loaded folder tree
  node <path>         select a tree folder (loads it on first use)
  expand <path>       load a tree folder's subfolders
  collapse <path>     mark a tree folder collapsed
  cd <dir>|..         change directory
  up                  go to the parent directory
  ls                  list the current directory
  refresh             reload the current view
  select <name>       select an entry of the listing
  unselect            clear the selection
  mkdir [name]        create a folder (asks when no name is given)
  rm [name]           delete the selected or named entry
  rename [new name]   rename the selected entry
  copy [name]         put the selected or named entry on the clipboard
  paste               copy the clipboard entry here
  open [name]         open the selected or named entry
  status              show location, selection and clipboard
  quit                leave the shell";

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

pub fn run(args: ShellArgs, output: &OutputOptions) -> ExitCode {
    finish("shell", execute(args, output))
}

fn execute(args: ShellArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let start = absolute(&args.path.unwrap_or_else(default_start_dir))?;

    let mut explorer = terminal_explorer(output, false, true);
    explorer.load_drives();
    explorer.navigate_to(&start);
    explorer.reveal_in_tree(&start);

    let mut printer = output.printer_config().make_printer();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        eprint!("{}> ", location(&explorer));
        io::stderr().flush().ok();

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read command")?;
        if read == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, arg) = input
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((input, ""));

        debug!("[shell] {cmd} {arg:?}");
        match dispatch(&mut explorer, printer.as_mut(), cmd, arg)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn location(explorer: &Explorer) -> String {
    match explorer.current_path() {
        Some(p) => p.display().to_string(),
        None => "drives".to_owned(),
    }
}

/// Resolves `arg` against the current directory.
fn resolve(explorer: &Explorer, arg: &str) -> PathBuf {
    let path = Path::new(arg);
    match explorer.current_path() {
        Some(cwd) if path.is_relative() => cwd.join(path),
        _ => path.to_path_buf(),
    }
}

/// Selects `name` when given; otherwise keeps the current selection.
fn select_if_named(explorer: &mut Explorer, name: &str) -> bool {
    if name.is_empty() {
        if explorer.selected().is_none() {
            eprintln!("nothing selected");
            return false;
        }
        return true;
    }
    if !explorer.select_item(name) {
        eprintln!("no entry named '{name}'");
        return false;
    }
    true
}

fn show_listing(explorer: &Explorer, printer: &mut dyn ListingPrinter) -> CommandResult<()> {
    print_listing(printer, "ls", explorer.current_path(), explorer.files())?;
    Ok(())
}

fn describe(item: Option<&FileItem>) -> String {
    item.map(|i| i.full_path.display().to_string())
        .unwrap_or_else(|| "-".to_owned())
}

fn dispatch(
    explorer: &mut Explorer,
    printer: &mut dyn ListingPrinter,
    cmd: &str,
    arg: &str,
) -> CommandResult<Flow> {
    match cmd {
        "help" | "?" => eprintln!("{HELP}"),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "drives" => {
            explorer.load_drives();
            printer.print_tree(explorer.tree())?;
        }
        "tree" => printer.print_tree(explorer.tree())?,
        "node" => {
            let path = resolve(explorer, arg);
            explorer.select_tree_node(&path);
            show_listing(explorer, printer)?;
        }
        "expand" => {
            let path = resolve(explorer, arg);
            explorer.expand_node(&path);
            printer.print_tree(explorer.tree())?;
        }
        "collapse" => {
            let path = resolve(explorer, arg);
            explorer.collapse_node(&path);
        }
        "cd" if arg == ".." => explorer.navigate_up(),
        "cd" => {
            let path = resolve(explorer, arg);
            if explorer.navigate_to(&path) {
                explorer.reveal_in_tree(&path);
            }
        }
        "up" => explorer.navigate_up(),
        "ls" => show_listing(explorer, printer)?,
        "refresh" => explorer.refresh(),
        "select" => {
            select_if_named(explorer, arg);
        }
        "unselect" => explorer.clear_selection(),
        "mkdir" if arg.is_empty() => explorer.create_folder(),
        "mkdir" => explorer.create_folder_named(arg),
        "rm" => {
            if select_if_named(explorer, arg) {
                explorer.delete_selected();
            }
        }
        "rename" if arg.is_empty() => explorer.rename_selected(),
        "rename" => explorer.rename_selected_to(arg),
        "copy" => {
            if select_if_named(explorer, arg) {
                explorer.copy_selected();
            }
        }
        "paste" => explorer.paste(),
        "open" => {
            if select_if_named(explorer, arg) {
                let is_dir = explorer.selected().is_some_and(|i| i.is_dir);
                explorer.open_selected();
                if is_dir {
                    show_listing(explorer, printer)?;
                }
            }
        }
        "status" => {
            eprintln!("location:  {}", location(explorer));
            eprintln!("selected:  {}", describe(explorer.selected()));
            eprintln!("clipboard: {}", describe(explorer.clipboard()));
            if let Some(status) = explorer.last_status() {
                eprintln!("last:      {status}");
            }
        }
        other => eprintln!("unknown command '{other}', try 'help'"),
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
