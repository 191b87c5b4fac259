use cellgrid_engine::engine::{CellRef, DisplayValue, display_value, validate};
use tracing::trace;

use super::Spreadsheet;
use crate::error::Result;

impl Spreadsheet {
    /// Display value of the cell named `cell_id`.
    pub fn get(&self, cell_id: &str) -> Result<DisplayValue> {
        let cell_ref = Self::parse_cell_id(cell_id)?;
        self.get_cell(&cell_ref)
    }

    /// Get the display value for a cell, revalidating it first.
    pub fn get_cell(&self, cell_ref: &CellRef) -> Result<DisplayValue> {
        validate(cell_ref, &self.grid)?;
        let value = display_value(cell_ref, &self.grid)?;
        trace!(cell = %cell_ref, %value, "evaluated cell");
        Ok(value)
    }
}
