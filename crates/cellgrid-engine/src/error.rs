//! Error types for the cellgrid engine.

use thiserror::Error;

use crate::engine::{AggregateOp, CellRef};

/// Failures raised while validating or evaluating cells.
///
/// Every variant is an "unsupported operation" with a specific reason.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("unsupported operation: circular dependency at {cell} ({})", format_path(.path))]
    CircularDependency { cell: CellRef, path: Vec<CellRef> },

    #[error("unsupported operation: cell {0} does not hold a number")]
    NotANumber(CellRef),

    #[error("unsupported operation: division by zero")]
    DivisionByZero,

    #[error("unsupported operation: number out of range")]
    Overflow,

    #[error("unsupported operation: {0} over an empty range")]
    EmptyRange(AggregateOp),

    #[error("unsupported operation: unknown operator '{0}'")]
    UnknownOperator(char),
}

fn format_path(path: &[CellRef]) -> String {
    path.iter()
        .map(CellRef::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type Result<T> = std::result::Result<T, EngineError>;
