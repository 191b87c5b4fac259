use cellgrid_engine::engine::{Cell, CellRef, Grid};

use crate::error::{CellGridError, Result};

/// A single sheet of cells.
///
/// The grid is not exposed outside this crate: every mutation goes through
/// [`Spreadsheet::set_cell`] so that it is validated, and every read through
/// [`Spreadsheet::get_cell`].
pub struct Spreadsheet {
    pub(crate) grid: Grid,
}

impl Spreadsheet {
    pub fn new() -> Self {
        Spreadsheet { grid: Grid::new() }
    }

    /// Number of cells that hold a value.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        self.grid.contains_key(cell_ref)
    }

    /// The classified contents of a cell, if it was ever written.
    pub fn cell(&self, cell_ref: &CellRef) -> Option<Cell> {
        self.grid.get(cell_ref).map(|entry| entry.clone())
    }

    /// The input a cell was written with, as opposed to what it displays.
    pub fn raw_input(&self, cell_ref: &CellRef) -> Option<String> {
        self.grid.get(cell_ref).map(|entry| entry.raw.clone())
    }

    /// Parse a cell identifier coming from outside the engine.
    pub fn parse_cell_id(cell_id: &str) -> Result<CellRef> {
        CellRef::from_str(cell_id).ok_or_else(|| CellGridError::InvalidCellRef(cell_id.to_string()))
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}
