//! Parsing of shell command lines.

use regex::Regex;
use std::sync::OnceLock;

/// A command accepted by the shell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Set { cell_id: String, value: String },
    Get { cell_id: String },
    Quit,
}

fn get_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^GET ([A-Z]{1,2}[0-9]{1,2})$").expect("GET command regex must compile")
    })
}

fn set_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^SET ([A-Z]{1,2}[0-9]{1,2}) (.*)$").expect("SET command regex must compile")
    })
}

impl Command {
    /// Parse one input line. Surrounding whitespace is ignored; the value of
    /// a `SET` is everything after the cell identifier and may contain spaces.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line == "QUIT" {
            return Some(Command::Quit);
        }
        if let Some(caps) = get_re().captures(line) {
            return Some(Command::Get {
                cell_id: caps[1].to_string(),
            });
        }
        if let Some(caps) = set_re().captures(line) {
            return Some(Command::Set {
                cell_id: caps[1].to_string(),
                value: caps[2].to_string(),
            });
        }
        None
    }
}
