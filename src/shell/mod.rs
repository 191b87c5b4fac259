//! Line-oriented command shell around a [`Spreadsheet`].
//!
//! The shell understands three commands:
//! - `SET <cell> <value>` stores a value
//! - `GET <cell>` prints what the cell displays
//! - `QUIT` ends the session

mod command;

pub use command::Command;

use cellgrid_core::Spreadsheet;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const INTRO_MESSAGE: &str = "
            Welcome to Spreadsheet Simulator!

Use following commands to interact with the shell:
SET <cellId> <value>
GET <cellId>
QUIT
---

";
pub const ERROR_MESSAGE: &str = "wrong command passed";
pub const EXIT_MESSAGE: &str = "exiting";

/// The outcome of one command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    Output(String),
    Failure(String),
    Quit,
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Output(s) | Reply::Failure(s) => f.write_str(s),
            Reply::Quit => f.write_str(EXIT_MESSAGE),
        }
    }
}

/// Holds the spreadsheet for the length of a session.
#[derive(Default)]
pub struct Shell {
    sheet: Spreadsheet,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self) -> &Spreadsheet {
        &self.sheet
    }

    /// Execute a single command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let Some(command) = Command::parse(line) else {
            debug!(line, "unrecognized command");
            return Reply::Failure(ERROR_MESSAGE.to_string());
        };
        debug!(?command, "executing command");

        match command {
            Command::Quit => Reply::Quit,
            Command::Get { cell_id } => match self.sheet.get(&cell_id) {
                Ok(value) => Reply::Output(value.to_string()),
                Err(e) => Reply::Failure(format!("error: {}", e)),
            },
            Command::Set { cell_id, value } => match self.sheet.set(&cell_id, &value) {
                Ok(()) => Reply::Output(format!("value: {} set in cell: {}", value, cell_id)),
                Err(e) => Reply::Failure(format!("error: {}", e)),
            },
        }
    }

    /// Run an interactive session until `QUIT` or end of input.
    /// Every reply is followed by a `>` prompt line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W, banner: bool) -> io::Result<()> {
        if banner {
            writeln!(output, "{}", INTRO_MESSAGE)?;
        }
        output.flush()?;

        for line in input.lines() {
            let reply = self.execute(&line?);
            if reply == Reply::Quit {
                writeln!(output, "{}", reply)?;
                break;
            }
            writeln!(output, "{}\n>", reply)?;
            output.flush()?;
        }
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_then_get() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("SET B1 2"),
            Reply::Output("value: 2 set in cell: B1".to_string())
        );
        shell.execute("SET C1 3");
        shell.execute("SET A1 =B1+C1");
        assert_eq!(shell.execute("GET A1"), Reply::Output("5".to_string()));
        assert_eq!(shell.execute("GET D4"), Reply::Output(String::new()));
    }

    #[test]
    fn test_wrong_command() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("HELLO"),
            Reply::Failure(ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_engine_errors_are_reported() {
        let mut shell = Shell::new();
        shell.execute("SET A1 =B1");
        let reply = shell.execute("SET B1 =A1");
        assert!(reply.is_failure());
        assert!(reply.to_string().starts_with("error: unsupported operation"));
        assert_eq!(shell.sheet().len(), 1);
    }

    #[test]
    fn test_run_session() {
        let mut shell = Shell::new();
        let input = "SET A1 7\nGET A1\nQUIT\nGET A1\n";
        let mut output = Vec::new();
        shell.run(input.as_bytes(), &mut output, false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "value: 7 set in cell: A1\n>\n7\n>\nexiting\n");
    }

    #[test]
    fn test_run_prints_banner() {
        let mut shell = Shell::new();
        let mut output = Vec::new();
        shell.run("".as_bytes(), &mut output, true).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Welcome to Spreadsheet Simulator!"));
    }

    #[test]
    fn test_banner_leaves_blank_lines_before_first_reply() {
        assert!(INTRO_MESSAGE.starts_with("\n            Welcome"));
        assert!(INTRO_MESSAGE.ends_with("QUIT\n---\n\n"));

        let mut shell = Shell::new();
        let mut output = Vec::new();
        shell.run("QUIT\n".as_bytes(), &mut output, true).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("---\n\n\nexiting\n"), "{output:?}");
    }
}
