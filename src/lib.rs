//! cellgrid - Minimal spreadsheet cell engine with a command shell.

pub mod shell;

pub use shell::{Command, Reply, Shell};
