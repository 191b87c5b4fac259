//! Error types for cellgrid core.

use thiserror::Error;

use cellgrid_engine::EngineError;

/// Errors that can occur while writing or reading cells
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellGridError {
    #[error("invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, CellGridError>;
