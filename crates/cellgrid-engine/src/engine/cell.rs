//! Cell data structures for the spreadsheet grid.
//!
//! - [`CellType`] - The classification of a raw input (number, text, evaluation, aggregation)
//! - [`Cell`] - A stored input together with its classification and dependencies
//! - [`Grid`] - Sparse storage for cells (backed by `DashMap`)

use dashmap::DashMap;

use super::aggregate::AggregateOp;
use super::cell_ref::CellRef;
use super::formula::{parse_aggregate, parse_expression};
use crate::error::{EngineError, Result};

/// Arithmetic operator between two operands of an evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl TryFrom<char> for Operator {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(EngineError::UnknownOperator(other)),
        }
    }
}

/// One term of an evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Cell(CellRef),
    Literal(i128),
}

/// A left-to-right arithmetic formula such as `=B1+C1*2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    operands: Vec<Operand>,
    operators: Vec<Operator>,
}

impl Expression {
    /// Build an expression; there must be exactly one operator fewer than
    /// operands, and at least one operand.
    pub fn new(operands: Vec<Operand>, operators: Vec<Operator>) -> Option<Expression> {
        if operands.is_empty() || operators.len() + 1 != operands.len() {
            return None;
        }
        Some(Expression {
            operands,
            operators,
        })
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Each operand paired with the operator that precedes it. The first
    /// operand gets an implicit `+` against a zero accumulator.
    pub fn terms(&self) -> impl Iterator<Item = (Operator, &Operand)> {
        std::iter::once(Operator::Add)
            .chain(self.operators.iter().copied())
            .zip(self.operands.iter())
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellRef> {
        self.operands.iter().filter_map(|operand| match operand {
            Operand::Cell(cell_ref) => Some(cell_ref),
            Operand::Literal(_) => None,
        })
    }
}

/// A reduction over a single-column row range such as `=SUM(B1:B3)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregate {
    pub op: AggregateOp,
    /// Range members in ascending row order; empty when the start row is
    /// after the end row.
    pub cells: Vec<CellRef>,
}

/// The classification of a cell's raw input.
#[derive(Clone, Debug, PartialEq)]
pub enum CellType {
    /// All-digit input; parsed as an integer when used as an operand.
    Number,
    Text,
    Evaluation(Expression),
    Aggregation(Aggregate),
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The input exactly as it was written.
    pub raw: String,
    pub contents: CellType,
    pub depends_on: Vec<CellRef>,
}

impl Cell {
    pub fn new_text(raw: &str) -> Cell {
        Cell {
            raw: raw.to_string(),
            contents: CellType::Text,
            depends_on: vec![],
        }
    }

    /// Classify raw input. Never fails: anything that is neither a number nor
    /// a well-formed formula is stored as text.
    ///
    /// - All ASCII digits -> Number
    /// - No leading '=' -> Text
    /// - '=' then alternating operands and `+ - * /` -> Evaluation
    /// - '=' then `OP(ColRow:ColRow)` over one column -> Aggregation
    /// - Otherwise -> Text
    pub fn from_input(raw: &str) -> Cell {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return Cell {
                raw: raw.to_string(),
                contents: CellType::Number,
                depends_on: vec![],
            };
        }

        let Some(body) = raw.strip_prefix('=') else {
            return Cell::new_text(raw);
        };

        if let Some(expr) = parse_expression(body) {
            return Cell {
                raw: raw.to_string(),
                depends_on: expr.cells().copied().collect(),
                contents: CellType::Evaluation(expr),
            };
        }

        if let Some(aggregate) = parse_aggregate(body) {
            return Cell {
                raw: raw.to_string(),
                depends_on: aggregate.cells.clone(),
                contents: CellType::Aggregation(aggregate),
            };
        }

        Cell::new_text(raw)
    }

    pub fn is_formula(&self) -> bool {
        matches!(
            self.contents,
            CellType::Evaluation(_) | CellType::Aggregation(_)
        )
    }
}

/// Sparse grid storage. Absent cells are blank.
pub type Grid = DashMap<CellRef, Cell>;
