//! Cell values and the 5x5 grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{ExprError, Expression};
use crate::types::CELL_COUNT;

/// Content of one grid cell.
///
/// Multiples, factors and primes use plain numbers; equality and inequality
/// use expressions. Serializes untagged: numbers as JSON integers, expressions
/// as their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(i64),
    Expr(Expression),
}

impl CellValue {
    /// Numeric value used for judging a pick (expressions are not rounded).
    pub fn numeric(&self) -> Result<f64, ExprError> {
        match self {
            CellValue::Number(n) => Ok(*n as f64),
            CellValue::Expr(e) => e.evaluate(),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Expr(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Expr(e) => Some(e),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Number(0)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value)
    }
}

impl From<Expression> for CellValue {
    fn from(value: Expression) -> Self {
        CellValue::Expr(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Expr(e) => write!(f, "{}", e),
        }
    }
}

/// The 25 cells, row-major.
pub type Grid = [CellValue; CELL_COUNT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;

    #[test]
    fn numeric_coercion() {
        assert_eq!(CellValue::Number(9).numeric(), Ok(9.0));
        assert_eq!(
            CellValue::from(Expression::new(7, Operator::Div, 2)).numeric(),
            Ok(3.5)
        );
    }

    #[test]
    fn displays_like_the_board() {
        assert_eq!(CellValue::Number(42).to_string(), "42");
        assert_eq!(
            CellValue::from(Expression::new(3, Operator::Sub, 1)).to_string(),
            "3 - 1"
        );
    }

    #[test]
    fn untagged_json() {
        let cells = [
            CellValue::Number(5),
            CellValue::Expr(Expression::new(1, Operator::Add, 4)),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[5,"1 + 4"]"#);
        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cells.to_vec());
    }
}
