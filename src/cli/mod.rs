//! Console front end of the circulation desk

pub mod menu;

use std::io::{self, BufRead, Write};

use crate::error::AppResult;

pub use menu::run;

/// Line-oriented terminal used by the menus
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Show `prompt` and read one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>>;

    fn print(&mut self, message: &str);
}

/// Console bound to the process stdin/stdout
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.stdout, "{}", prompt)?;
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, message: &str) {
        // A closed stdout shows up on the next read
        let _ = writeln!(self.stdout, "{}", message);
    }
}
