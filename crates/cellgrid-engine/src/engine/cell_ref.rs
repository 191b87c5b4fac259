//! Cell reference parsing and formatting.
//!
//! Cell identifiers follow the grammar `[A-Z]{1,2}[0-9]{1,2}`: one or two
//! uppercase column letters followed by a row number between 0 and 99.
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 3); // as written
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell: 0-indexed column, row number as written.
///
/// Two references are equal exactly when their canonical names are equal,
/// so `A01` and `A1` address the same cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub col: usize,
    pub row: u8,
}

impl CellRef {
    pub fn new(col: usize, row: u8) -> CellRef {
        CellRef { col, row }
    }

    /// Parse a cell reference such as "A1" or "AB12".
    /// Returns None if the input does not match the identifier grammar.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = cell_ref_re().captures(name)?;
        let col = Self::letters_to_col(&caps["letters"])?;
        let row = caps["numbers"].parse::<u8>().ok()?;
        Some(CellRef::new(col, row))
    }

    /// Convert column letters to a 0-indexed column (A -> 0, Z -> 25, AA -> 26).
    pub fn letters_to_col(letters: &str) -> Option<usize> {
        let mut acc = 0usize;
        for c in letters.bytes() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            acc = acc.checked_mul(26)?.checked_add((c - b'A') as usize + 1)?;
        }
        acc.checked_sub(1)
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// The same column at a different row.
    pub fn with_row(&self, row: u8) -> CellRef {
        CellRef::new(self.col, row)
    }
}

/// Anchored identifier pattern shared by parsing and formula tokenizing.
pub(crate) const CELL_REF_PATTERN: &str = r"(?<letters>[A-Z]{1,2})(?<numbers>[0-9]{1,2})";

fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^{}$", CELL_REF_PATTERN)).expect("cell reference regex must compile")
    })
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row)
    }
}
