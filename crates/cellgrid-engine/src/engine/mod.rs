//! Spreadsheet engine API.
//!
//! - [`Cell`], [`CellType`], [`Grid`] - Cell storage and input classification
//! - [`CellRef`] - Cell identifier parsing (`A1`, `AB12`)
//! - [`validate`] - Circular dependency and aggregation checks
//! - [`display_value`] - Recursive evaluation of what a cell shows
//! - [`AggregateOp`] - SUM, MUL, AVG, MAX and MIN over a range
//! - [`Value`] - Checked integer arithmetic with a float fallback for uneven division

mod aggregate;
mod cell;
mod cell_ref;
mod eval;
mod format;
mod formula;
mod validate;
mod value;

pub use aggregate::AggregateOp;
pub use cell::{Aggregate, Cell, CellType, Expression, Grid, Operand, Operator};
pub use cell_ref::CellRef;
pub use eval::{display_value, numeric_value};
pub use format::{DisplayValue, format_number};
pub use validate::{detect_cycle, validate};
pub use value::Value;
