use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use burrow_engine::{FileLauncher, Prompt};
use log::debug;

/// Asks questions on stderr and reads answers from stdin.
pub struct StdinPrompt {
    /// Answer every confirmation with "yes" without asking.
    assume_yes: bool,
}

impl StdinPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
            Err(e) => {
                debug!("[prompt] read failed: {e}");
                None
            }
        }
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        self.read_line()
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
    }

    fn prompt_text(&mut self, title: &str, default_value: &str) -> Option<String> {
        eprint!("{title} [{default_value}]: ");
        let _ = io::stderr().flush();
        let answer = self.read_line()?;
        if answer.is_empty() {
            Some(default_value.to_owned())
        } else {
            Some(answer)
        }
    }
}

/// Opens files with the desktop's default application.
pub struct SystemLauncher;

impl FileLauncher for SystemLauncher {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()> {
        debug!("[launcher] opening {:?}", path);
        open::that(path)
    }
}
