//! Formula body parsing.
//!
//! A formula is whatever follows the leading `=` of a cell input. Two shapes
//! are understood:
//! - Arithmetic: operands (`B1`, `42`) separated by `+ - * /`, e.g. `B1+C1*2`
//! - Aggregation: `SUM(B1:B3)` and friends over a single column
//!
//! Parsers return `None` rather than an error on malformed input; the caller
//! stores such input as text. Integer literals too long for an `i128` count
//! as malformed.

use regex::Regex;
use std::sync::OnceLock;

use super::aggregate::{AGGREGATES, AggregateOp};
use super::cell::{Aggregate, Expression, Operand, Operator};
use super::cell_ref::{CELL_REF_PATTERN, CellRef};

fn operand_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^\s*(?:(?<cell>{})|(?<literal>[0-9]+))",
            CELL_REF_PATTERN
        ))
        .expect("operand regex must compile")
    })
}

fn aggregate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let names = AGGREGATES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"^\s*(?<op>{})\(\s*(?<start_col>[A-Z]{{1,2}})(?<start_row>[0-9]{{1,2}})\s*:\s*(?<end_col>[A-Z]{{1,2}})(?<end_row>[0-9]{{1,2}})\s*\)\s*$",
            names
        ))
        .expect("aggregate regex must compile")
    })
}

/// Parse an arithmetic formula body such as `B1+C1` or `A1 * 2`.
pub(crate) fn parse_expression(body: &str) -> Option<Expression> {
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut rest = body;

    loop {
        let caps = operand_re().captures(rest)?;
        let operand = match caps.name("literal") {
            Some(literal) => Operand::Literal(literal.as_str().parse().ok()?),
            None => Operand::Cell(CellRef::from_str(caps.name("cell")?.as_str())?),
        };
        operands.push(operand);

        rest = rest[caps.get(0)?.end()..].trim_start();
        let mut chars = rest.chars();
        match chars.next() {
            None => break,
            Some(c) => {
                operators.push(Operator::try_from(c).ok()?);
                rest = chars.as_str();
            }
        }
    }

    Expression::new(operands, operators)
}

/// Parse an aggregation body such as `SUM(B1:B3)`.
/// Ranges that span two columns are rejected.
pub(crate) fn parse_aggregate(body: &str) -> Option<Aggregate> {
    let caps = aggregate_re().captures(body)?;
    let op = AggregateOp::from_name(&caps["op"])?;
    if caps["start_col"] != caps["end_col"] {
        return None;
    }

    let col = CellRef::letters_to_col(&caps["start_col"])?;
    let start = caps["start_row"].parse::<u8>().ok()?;
    let end = caps["end_row"].parse::<u8>().ok()?;
    let first = CellRef::new(col, start);

    Some(Aggregate {
        op,
        cells: (start..=end).map(|row| first.with_row(row)).collect(),
    })
}
