//! Range aggregation operators.
//!
//! Callers resolve and type-check every member of the range before handing
//! the values over; reduction itself only deals with numbers.

use std::fmt;

use super::cell::Operator;
use super::value::Value;
use crate::error::{EngineError, Result};

/// A reduction that can be applied to a single-column range.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AggregateOp {
    Sum,
    Mul,
    Avg,
    Max,
    Min,
}

/// Sheet-level names, in the order they are tried by the formula parser.
pub(crate) const AGGREGATES: &[(&str, AggregateOp)] = &[
    ("SUM", AggregateOp::Sum),
    ("MUL", AggregateOp::Mul),
    ("AVG", AggregateOp::Avg),
    ("MAX", AggregateOp::Max),
    ("MIN", AggregateOp::Min),
];

impl AggregateOp {
    pub fn from_name(name: &str) -> Option<AggregateOp> {
        AGGREGATES
            .iter()
            .find(|(sheet_name, _)| *sheet_name == name)
            .map(|(_, op)| *op)
    }

    pub fn name(self) -> &'static str {
        AGGREGATES
            .iter()
            .find(|(_, op)| *op == self)
            .map(|(sheet_name, _)| *sheet_name)
            .unwrap_or("?")
    }

    /// Reduce `values` under this operator.
    ///
    /// SUM of nothing is 0 and MUL of nothing is 1. AVG, MAX and MIN have no
    /// value over an empty range and fail with [`EngineError::EmptyRange`].
    pub fn reduce(self, values: &[Value]) -> Result<Value> {
        match self {
            AggregateOp::Sum => fold(values, Value::Int(0), Operator::Add),
            AggregateOp::Mul => fold(values, Value::Int(1), Operator::Mul),
            AggregateOp::Avg => {
                if values.is_empty() {
                    return Err(EngineError::EmptyRange(self));
                }
                let count = Value::Int(values.len() as i128);
                fold(values, Value::Int(0), Operator::Add)?.combine(Operator::Div, count)
            }
            AggregateOp::Max => values
                .iter()
                .copied()
                .reduce(Value::max)
                .ok_or(EngineError::EmptyRange(self)),
            AggregateOp::Min => values
                .iter()
                .copied()
                .reduce(Value::min)
                .ok_or(EngineError::EmptyRange(self)),
        }
    }
}

fn fold(values: &[Value], init: Value, op: Operator) -> Result<Value> {
    values.iter().try_fold(init, |acc, v| acc.combine(op, *v))
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
