//! Numeric values produced by evaluation.
//!
//! Integer arithmetic is exact and checked. A value only becomes a float when
//! a division does not come out even. Results that leave the representable
//! range fail with [`EngineError::Overflow`] rather than turning into
//! infinity.

use std::cmp::Ordering;
use std::fmt;

use super::cell::Operator;
use super::format::format_number;
use crate::error::{EngineError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i128),
    Float(f64),
}

impl Value {
    /// Parse a run of ASCII digits; fails when it does not fit in an `i128`.
    pub fn parse_integer(digits: &str) -> Result<Value> {
        digits
            .parse::<i128>()
            .map(Value::Int)
            .map_err(|_| EngineError::Overflow)
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Float(f) => f,
        }
    }

    /// Combine `self` with `rhs` under `op`.
    pub fn combine(self, op: Operator, rhs: Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => int_op(op, a, b),
            (a, b) => float_op(op, a.as_f64(), b.as_f64()),
        }
    }

    pub fn max(self, other: Value) -> Value {
        if other.compare(self) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    pub fn min(self, other: Value) -> Value {
        if other.compare(self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    fn compare(self, other: Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(&b),
            // Floats are always finite here.
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()).unwrap_or(Ordering::Equal),
        }
    }
}

fn int_op(op: Operator, a: i128, b: i128) -> Result<Value> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => match a.checked_rem(b) {
            _ if b == 0 => return Err(EngineError::DivisionByZero),
            Some(0) => a.checked_div(b),
            Some(_) => return float_op(op, a as f64, b as f64),
            None => None,
        },
    };
    result.map(Value::Int).ok_or(EngineError::Overflow)
}

fn float_op(op: Operator, a: f64, b: f64) -> Result<Value> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(EngineError::DivisionByZero);
            }
            a / b
        }
    };
    if result.is_finite() {
        Ok(Value::Float(result))
    } else {
        Err(EngineError::Overflow)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_number(*x)),
        }
    }
}
