//! Dependency validation for freshly written cells.
//!
//! A write is only accepted when the grid still satisfies two rules:
//! - no formula can reach itself through its references (A1 -> B1 -> A1)
//! - every aggregation only ranges over numeric-valued cells
//!
//! The dependency graph is never stored; edges are read from each cell's
//! `depends_on` list every time a walk runs.

use std::collections::{HashMap, HashSet};

use super::{CellRef, CellType, Grid};
use crate::error::{EngineError, Result};

/// Validate the grid around `root`, typically the cell that was just written.
///
/// Cycles are searched downstream of `root`. Aggregation members are checked
/// on `root` itself and on every cell that depends on it, directly or not,
/// since writing text into a range member invalidates the aggregation above it.
pub fn validate(root: &CellRef, grid: &Grid) -> Result<()> {
    if let Some(path) = detect_cycle(root, grid) {
        let cell = path.last().copied().unwrap_or(*root);
        return Err(EngineError::CircularDependency { cell, path });
    }

    check_aggregate(root, grid)?;
    for dependent in transitive_dependents(root, grid) {
        check_aggregate(&dependent, grid)?;
    }
    Ok(())
}

/// Detect circular dependencies starting from a cell.
/// Returns the offending path, ending with the revisited cell, if any.
pub fn detect_cycle(start: &CellRef, grid: &Grid) -> Option<Vec<CellRef>> {
    let mut on_path = HashSet::new();
    let mut path = Vec::new();

    if walk(start, grid, &mut on_path, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn walk(
    current: &CellRef,
    grid: &Grid,
    on_path: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    if on_path.contains(current) {
        path.push(*current);
        return true;
    }

    // Only formulas have outgoing edges; blank, number and text cells end the branch.
    let deps = match grid.get(current) {
        Some(entry) if entry.is_formula() => entry.depends_on.clone(),
        _ => return false,
    };

    on_path.insert(*current);
    path.push(*current);

    for dep in &deps {
        if walk(dep, grid, on_path, path) {
            return true;
        }
    }

    path.pop();
    on_path.remove(current);
    false
}

/// Every cell that reaches `target` through formula references.
fn transitive_dependents(target: &CellRef, grid: &Grid) -> Vec<CellRef> {
    let mut reverse: HashMap<CellRef, Vec<CellRef>> = HashMap::new();
    for entry in grid.iter() {
        for dep in &entry.depends_on {
            reverse.entry(*dep).or_default().push(*entry.key());
        }
    }

    let mut found = Vec::new();
    let mut visited = HashSet::from([*target]);
    let mut to_process = vec![*target];
    while let Some(cell_ref) = to_process.pop() {
        for dependent in reverse.get(&cell_ref).into_iter().flatten() {
            if visited.insert(*dependent) {
                found.push(*dependent);
                to_process.push(*dependent);
            }
        }
    }
    found
}

fn check_aggregate(cell_ref: &CellRef, grid: &Grid) -> Result<()> {
    let aggregate = match grid.get(cell_ref) {
        Some(entry) => match &entry.contents {
            CellType::Aggregation(aggregate) => aggregate.clone(),
            _ => return Ok(()),
        },
        None => return Ok(()),
    };

    if aggregate.cells.is_empty() {
        return Err(EngineError::EmptyRange(aggregate.op));
    }

    for member in &aggregate.cells {
        let is_text = grid
            .get(member)
            .is_some_and(|entry| matches!(entry.contents, CellType::Text));
        if is_text {
            return Err(EngineError::NotANumber(*member));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AggregateOp, Cell};

    fn cell(name: &str) -> CellRef {
        CellRef::from_str(name).unwrap()
    }

    fn grid_of(entries: &[(&str, &str)]) -> Grid {
        let grid = Grid::new();
        for (name, raw) in entries {
            grid.insert(cell(name), Cell::from_input(raw));
        }
        grid
    }

    #[test]
    fn test_detect_cycle_no_cycle() {
        let grid = grid_of(&[("A1", "10"), ("B1", "20"), ("C1", "=A1+B1")]);
        assert!(detect_cycle(&cell("C1"), &grid).is_none());
        assert_eq!(validate(&cell("C1"), &grid), Ok(()));
    }

    #[test]
    fn test_detect_cycle_direct() {
        let grid = grid_of(&[("A1", "=B1"), ("B1", "=A1")]);
        assert_eq!(
            detect_cycle(&cell("B1"), &grid),
            Some(vec![cell("B1"), cell("A1"), cell("B1")])
        );
    }

    #[test]
    fn test_detect_cycle_indirect() {
        let grid = grid_of(&[("A1", "=B1"), ("B1", "=C1"), ("C1", "=A1+5")]);
        let err = validate(&cell("A1"), &grid).unwrap_err();
        assert_eq!(
            err,
            EngineError::CircularDependency {
                cell: cell("A1"),
                path: vec![cell("A1"), cell("B1"), cell("C1"), cell("A1")],
            }
        );
    }

    #[test]
    fn test_detect_cycle_self_reference() {
        let grid = grid_of(&[("A1", "=A1")]);
        assert!(detect_cycle(&cell("A1"), &grid).is_some());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let grid = grid_of(&[
            ("A1", "=B1+C1"),
            ("B1", "=D1"),
            ("C1", "=D1*2"),
            ("D1", "3"),
        ]);
        assert_eq!(validate(&cell("A1"), &grid), Ok(()));
    }

    #[test]
    fn test_cycle_through_aggregation() {
        let grid = grid_of(&[("A1", "=SUM(B1:B2)"), ("B2", "=A1")]);
        assert!(matches!(
            validate(&cell("A1"), &grid),
            Err(EngineError::CircularDependency { .. })
        ));
        let grid = grid_of(&[("A2", "=SUM(A1:A3)")]);
        assert!(detect_cycle(&cell("A2"), &grid).is_some());
    }

    #[test]
    fn test_aggregate_rejects_text_member() {
        let grid = grid_of(&[("A1", "=AVG(B1:B2)"), ("B1", "4"), ("B2", "hello")]);
        assert_eq!(
            validate(&cell("A1"), &grid),
            Err(EngineError::NotANumber(cell("B2")))
        );
    }

    #[test]
    fn test_text_write_under_aggregate_is_rejected() {
        // Rooted at the member: the aggregation above it is found through the reverse walk.
        let grid = grid_of(&[
            ("A1", "=AVG(B1:B2)"),
            ("C1", "=A1+1"),
            ("D1", "=MAX(C1:C1)"),
            ("B2", "hello"),
        ]);
        assert_eq!(
            validate(&cell("B2"), &grid),
            Err(EngineError::NotANumber(cell("B2")))
        );
    }

    #[test]
    fn test_aggregate_accepts_blank_and_formula_members() {
        let grid = grid_of(&[("A1", "=SUM(B1:B3)"), ("B2", "=C1+1"), ("B3", "7")]);
        assert_eq!(validate(&cell("A1"), &grid), Ok(()));
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let grid = grid_of(&[("A1", "=SUM(B3:B1)")]);
        assert_eq!(
            validate(&cell("A1"), &grid),
            Err(EngineError::EmptyRange(AggregateOp::Sum))
        );
    }

    #[test]
    fn test_transitive_dependents() {
        let grid = grid_of(&[("A1", "=B1"), ("B1", "=C1"), ("D1", "=SUM(C1:C2)"), ("E1", "5")]);
        let mut found = transitive_dependents(&cell("C1"), &grid);
        found.sort();
        assert_eq!(found, vec![cell("A1"), cell("B1"), cell("D1")]);
    }
}
