//! cellgrid-core - Spreadsheet model that owns the grid.

pub mod error;
pub mod sheet;

pub use error::{CellGridError, Result};
pub use sheet::Spreadsheet;

pub use cellgrid_engine::engine::{CellRef, DisplayValue, Value};
pub use cellgrid_engine::EngineError;
