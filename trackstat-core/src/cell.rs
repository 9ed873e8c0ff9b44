//! Table cell values
//!
//! Cells are integer-shaped strings, real numbers, or literal strings (the
//! `None` placeholder and metadata columns). Final formatting of real values
//! belongs to whoever displays the table.

use serde::{Deserialize, Serialize};

/// Placeholder written for an absent feature value
pub const NONE_LITERAL: &str = "None";

/// Single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Integer already rendered in decimal form, no decimal point
    IntAsString(String),
    /// Real value left to the sink's formatting
    Real(f64),
    /// Verbatim text
    Literal(String),
}

/// Truncate toward zero the way the host converts reals to integers:
/// saturating at the `i32` range, NaN maps to zero.
pub fn truncate(value: f64) -> i32 {
    value as i32
}

impl Cell {
    // ========== Constructors ==========

    pub fn int(value: impl Into<i64>) -> Self {
        Cell::IntAsString(value.into().to_string())
    }

    /// Integer rendering of the truncation of `value`
    pub fn truncated(value: f64) -> Self {
        Cell::int(truncate(value))
    }

    pub fn real(value: f64) -> Self {
        Cell::Real(value)
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Cell::Literal(text.into())
    }

    pub fn none() -> Self {
        Cell::Literal(NONE_LITERAL.to_string())
    }

    // ========== Safe Accessors (never panic) ==========

    /// Text content of string-shaped cells
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::IntAsString(s) | Cell::Literal(s) => Some(s),
            Cell::Real(_) => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Cell::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_none_literal(&self) -> bool {
        matches!(self, Cell::Literal(s) if s == NONE_LITERAL)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::IntAsString(_) => "IntAsString",
            Cell::Real(_) => "Real",
            Cell::Literal(_) => "Literal",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::IntAsString(s) | Cell::Literal(s) => write!(f, "{}", s),
            Cell::Real(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Real(v)
    }
}
