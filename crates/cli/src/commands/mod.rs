pub mod drives;
pub mod list;
pub mod mutate;
pub mod shell;
pub mod tree;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use burrow_engine::{Explorer, Outcome};
use burrow_fs::{SystemVolumes, VolumeSource};
use clap::{Args, Subcommand};

use crate::host::{StdinPrompt, SystemLauncher};
use crate::printer::{ColorChoice, OutputFormat, PrinterConfig, StatusPrinter, StderrWriter};

pub use drives::DrivesArgs;
pub use list::ListArgs;
pub use mutate::{CopyArgs, DeleteArgs, MkdirArgs, OpenArgs, RenameArgs};
pub use shell::ShellArgs;
pub use tree::TreeArgs;

/// Common error type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output listings and status as NDJSON (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: String,
}

impl OutputOptions {
    pub fn printer_config(&self) -> PrinterConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        PrinterConfig { format, color }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List mounted volumes.
    Drives(DrivesArgs),

    /// List the entries of a directory, folders first.
    ///
    /// Example:
    ///   burrow ls ~/Downloads
    ///   burrow ls --json /var/log
    Ls(ListArgs),

    /// Print the folder tree below a directory.
    Tree(TreeArgs),

    /// Create a folder.
    Mkdir(MkdirArgs),

    /// Delete a file or a folder with all its contents.
    Rm(DeleteArgs),

    /// Rename a file or folder in place.
    Rename(RenameArgs),

    /// Copy a file or folder into one or more directories.
    ///
    /// Example:
    ///   burrow cp report.pdf ~/backup /mnt/usb
    Cp(CopyArgs),

    /// Open a file with its default application.
    Open(OpenArgs),

    /// Browse interactively.
    Shell(ShellArgs),
}

/// Builds an explorer wired to the terminal: stdin prompts, status on stderr,
/// and the desktop launcher.
pub fn terminal_explorer(output: &OutputOptions, assume_yes: bool, show_loads: bool) -> Explorer {
    explorer_over(Box::new(SystemVolumes), output, assume_yes, show_loads)
}

pub fn explorer_over(
    volumes: Box<dyn VolumeSource>,
    output: &OutputOptions,
    assume_yes: bool,
    show_loads: bool,
) -> Explorer {
    let cfg = output.printer_config();
    Explorer::new(volumes)
        .with_prompt(StdinPrompt::new(assume_yes))
        .with_status_sink(StatusPrinter::new(cfg.format, StderrWriter).with_loads(show_loads))
        .with_launcher(SystemLauncher)
}

/// Lists the parent of `path` and selects `path` in it.
pub fn focus(explorer: &mut Explorer, path: &Path) -> CommandResult<()> {
    let path = absolute(path)?;
    let parent = path
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;

    if !explorer.navigate_to(parent) {
        return Err(anyhow!("cannot list {}", parent.display()));
    }
    if !explorer.select_item(&name) {
        return Err(anyhow!("{} not found", path.display()));
    }
    Ok(())
}

pub fn absolute(path: &Path) -> CommandResult<PathBuf> {
    std::path::absolute(path).with_context(|| format!("cannot resolve {}", path.display()))
}

/// Exit code for the last reported status: 0 success, 1 nothing done, 2 failure.
pub fn exit_code(explorer: &Explorer) -> ExitCode {
    match explorer.last_status().map(|s| &s.outcome) {
        Some(Outcome::Succeeded { .. }) => ExitCode::SUCCESS,
        Some(Outcome::Skipped { .. }) | None => ExitCode::from(1),
        Some(Outcome::Failed { .. }) => ExitCode::from(2),
    }
}

/// Shared error wrapper for command entry points.
pub fn finish(kind: &str, result: CommandResult<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("[{kind}] {e:#}");
            eprintln!("[{kind}] {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
