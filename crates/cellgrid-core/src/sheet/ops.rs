use cellgrid_engine::engine::{Cell, CellRef, validate};
use tracing::{debug, info};

use super::Spreadsheet;
use crate::error::Result;

impl Spreadsheet {
    /// Store `input` in the cell named `cell_id`.
    pub fn set(&mut self, cell_id: &str, input: &str) -> Result<()> {
        let cell_ref = Self::parse_cell_id(cell_id)?;
        self.set_cell(cell_ref, input)
    }

    /// Set cell contents from an input string.
    ///
    /// The new cell is stored first and the grid validated around it. If
    /// validation fails the cell gets its previous contents back (or is
    /// removed if it was blank) and the error is returned.
    pub fn set_cell(&mut self, cell_ref: CellRef, input: &str) -> Result<()> {
        let cell = Cell::from_input(input);
        debug!(cell = %cell_ref, kind = ?cell.contents, "classified input");

        let old_cell = self.grid.insert(cell_ref, cell);
        if let Err(e) = validate(&cell_ref, &self.grid) {
            info!(cell = %cell_ref, error = %e, "rejected write");
            match old_cell {
                Some(c) => {
                    self.grid.insert(cell_ref, c);
                }
                None => {
                    self.grid.remove(&cell_ref);
                }
            }
            return Err(e.into());
        }

        debug!(cell = %cell_ref, "stored cell");
        Ok(())
    }
}
