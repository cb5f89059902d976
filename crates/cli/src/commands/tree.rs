use std::path::{Path, PathBuf};
use std::process::ExitCode;

use burrow_engine::Explorer;
use burrow_fs::{StaticVolumes, Volume, VolumeKind};
use clap::Args;

use super::{CommandResult, OutputOptions, absolute, explorer_over, finish, terminal_explorer};

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Directory to start from (defaults to every mounted volume)
    pub path: Option<PathBuf>,

    /// How many folder levels to load below each root
    #[arg(long, short = 'd', default_value = "2")]
    pub depth: usize,
}

pub fn run(args: TreeArgs, output: &OutputOptions) -> ExitCode {
    finish("tree", execute(args, output))
}

fn execute(args: TreeArgs, output: &OutputOptions) -> CommandResult<ExitCode> {
    let mut explorer = match &args.path {
        Some(path) => {
            let root = absolute(path)?;
            let volume = Volume {
                label: String::new(),
                kind: VolumeKind::Fixed,
                mount_point: root,
            };
            explorer_over(Box::new(StaticVolumes(vec![volume])), output, false, false)
        }
        None => terminal_explorer(output, false, false),
    };

    explorer.load_drives();
    if explorer.tree().is_empty() {
        return Ok(ExitCode::from(2));
    }

    expand_levels(&mut explorer, args.depth);

    let mut printer = output.printer_config().make_printer();
    printer.print_tree(explorer.tree())?;

    Ok(ExitCode::SUCCESS)
}

/// Expands the tree breadth-first, `depth` levels below the roots.
pub fn expand_levels(explorer: &mut Explorer, depth: usize) {
    let mut frontier: Vec<PathBuf> = explorer
        .tree()
        .iter()
        .map(|r| r.full_path.clone())
        .collect();

    for _ in 0..depth {
        let mut next = Vec::new();
        for path in &frontier {
            explorer.expand_node(path);
            next.extend(child_paths(explorer, path));
        }
        frontier = next;
    }
}

fn child_paths(explorer: &Explorer, path: &Path) -> Vec<PathBuf> {
    explorer
        .node(path)
        .map(|n| n.children.iter().map(|c| c.full_path.clone()).collect())
        .unwrap_or_default()
}
