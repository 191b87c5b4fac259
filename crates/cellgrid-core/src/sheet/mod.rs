//! Spreadsheet state and the write/read contract.

mod eval;
mod ops;
mod state;

pub use state::Spreadsheet;
