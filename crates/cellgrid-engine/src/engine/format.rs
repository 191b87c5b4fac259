use std::fmt;

use super::value::Value;

/// The value shown for a cell when it is read.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayValue {
    /// The cell has never been written.
    Blank,
    /// Numbers and text are shown exactly as they were entered.
    Raw(String),
    /// Result of a formula.
    Number(Value),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Blank => Ok(()),
            DisplayValue::Raw(s) => f.write_str(s),
            DisplayValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Format a finite float for display.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(DisplayValue::Blank.to_string(), "");
        assert_eq!(DisplayValue::Raw("007".into()).to_string(), "007");
        assert_eq!(DisplayValue::Number(Value::Int(12)).to_string(), "12");
        assert_eq!(DisplayValue::Number(Value::Float(0.25)).to_string(), "0.25");
    }
}
