//! Recursive cell evaluation.
//!
//! Nothing is cached: every read walks the full dependency subtree again.
//! Recursion depth is bounded by the number of cells because writes that
//! would introduce a cycle are rejected by [`validate`](super::validate).

use super::{Aggregate, CellRef, CellType, DisplayValue, Expression, Grid, Operand, Value};
use crate::error::{EngineError, Result};

/// Resolve what a read of `cell_ref` shows.
///
/// Blank cells are [`DisplayValue::Blank`], numbers and text come back as
/// entered, and formulas are computed.
pub fn display_value(cell_ref: &CellRef, grid: &Grid) -> Result<DisplayValue> {
    let (raw, contents) = match grid.get(cell_ref) {
        Some(cell) => (cell.raw.clone(), cell.contents.clone()),
        None => return Ok(DisplayValue::Blank),
    };

    match contents {
        CellType::Number | CellType::Text => Ok(DisplayValue::Raw(raw)),
        CellType::Evaluation(expr) => eval_expression(&expr, grid).map(DisplayValue::Number),
        CellType::Aggregation(aggregate) => {
            eval_aggregate(&aggregate, grid).map(DisplayValue::Number)
        }
    }
}

/// Resolve `cell_ref` as an operand. Blank cells count as 0; text cells
/// cannot take part in arithmetic.
pub fn numeric_value(cell_ref: &CellRef, grid: &Grid) -> Result<Value> {
    let (raw, contents) = match grid.get(cell_ref) {
        Some(cell) => (cell.raw.clone(), cell.contents.clone()),
        None => return Ok(Value::Int(0)),
    };

    match contents {
        CellType::Number => Value::parse_integer(&raw),
        CellType::Text => Err(EngineError::NotANumber(*cell_ref)),
        CellType::Evaluation(expr) => eval_expression(&expr, grid),
        CellType::Aggregation(aggregate) => eval_aggregate(&aggregate, grid),
    }
}

fn eval_expression(expr: &Expression, grid: &Grid) -> Result<Value> {
    expr.terms().try_fold(Value::Int(0), |acc, (op, operand)| {
        let value = match operand {
            Operand::Cell(cell_ref) => numeric_value(cell_ref, grid)?,
            Operand::Literal(n) => Value::Int(*n),
        };
        acc.combine(op, value)
    })
}

fn eval_aggregate(aggregate: &Aggregate, grid: &Grid) -> Result<Value> {
    let values = aggregate
        .cells
        .iter()
        .map(|cell_ref| numeric_value(cell_ref, grid))
        .collect::<Result<Vec<_>>>()?;
    aggregate.op.reduce(&values)
}
