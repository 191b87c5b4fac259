//! cellgrid_engine - Cell classification, dependency validation and evaluation.

pub mod engine;
pub mod error;

pub use error::{EngineError, Result};

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::error::EngineError;

    fn cell(name: &str) -> CellRef {
        CellRef::from_str(name).unwrap()
    }

    /// Write the way the sheet does: store, validate, drop on failure.
    fn write(grid: &Grid, name: &str, raw: &str) -> Result<(), EngineError> {
        let cell_ref = cell(name);
        grid.insert(cell_ref, Cell::from_input(raw));
        validate(&cell_ref, grid).inspect_err(|_| {
            grid.remove(&cell_ref);
        })
    }

    fn read(grid: &Grid, name: &str) -> String {
        display_value(&cell(name), grid).unwrap().to_string()
    }

    #[test]
    fn test_sum_of_two_cells() {
        let grid = Grid::new();
        write(&grid, "A1", "=B1+C1").unwrap();
        write(&grid, "B1", "2").unwrap();
        write(&grid, "C1", "3").unwrap();
        assert_eq!(read(&grid, "A1"), "5");
    }

    #[test]
    fn test_cycle_write_is_dropped() {
        let grid = Grid::new();
        write(&grid, "A1", "=B1").unwrap();
        let err = write(&grid, "B1", "=A1").unwrap_err();
        assert!(matches!(err, EngineError::CircularDependency { .. }));
        assert!(!grid.contains_key(&cell("B1")));
        assert_eq!(read(&grid, "A1"), "0");
    }

    #[test]
    fn test_sum_range_written_before_members() {
        let grid = Grid::new();
        write(&grid, "A1", "=SUM(B1:B3)").unwrap();
        write(&grid, "B1", "1").unwrap();
        write(&grid, "B2", "2").unwrap();
        write(&grid, "B3", "3").unwrap();
        assert_eq!(read(&grid, "A1"), "6");
    }

    #[test]
    fn test_text_member_write_rejected() {
        let grid = Grid::new();
        write(&grid, "A1", "=AVG(B1:B2)").unwrap();
        write(&grid, "B1", "4").unwrap();
        let err = write(&grid, "B2", "hello").unwrap_err();
        assert_eq!(err, EngineError::NotANumber(cell("B2")));
        assert_eq!(read(&grid, "A1"), "2");
    }

    #[test]
    fn test_error_messages_name_unsupported_operation() {
        let errors = [
            EngineError::NotANumber(cell("B2")),
            EngineError::DivisionByZero,
            EngineError::Overflow,
            EngineError::EmptyRange(AggregateOp::Max),
            EngineError::UnknownOperator('%'),
            EngineError::CircularDependency {
                cell: cell("A1"),
                path: vec![cell("A1"), cell("B1"), cell("A1")],
            },
        ];
        for err in errors {
            assert!(err.to_string().starts_with("unsupported operation: "), "{err}");
        }
        let cycle = EngineError::CircularDependency {
            cell: cell("A1"),
            path: vec![cell("A1"), cell("B1"), cell("A1")],
        };
        assert!(cycle.to_string().contains("A1 -> B1 -> A1"));
    }
}
