//! Expression module - typed `"<int> <op> <int>"` cell expressions
//!
//! Equality and inequality cells show a short arithmetic expression. The
//! expression is kept as an operator tag plus two integers and evaluated with a
//! plain match, so there is no string evaluation anywhere in the game.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Operator;

/// Errors raised while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Input was empty or whitespace only.
    Empty,

    /// Input did not have exactly three tokens.
    Malformed(usize),

    /// An operand was not an integer.
    InvalidOperand(String),

    /// The operator is not one of `+ - * /`.
    UnknownOperator(String),

    /// Right-hand side of a division is zero.
    DivisionByZero,

    /// Integer result does not fit in an `i64`.
    Overflow,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Empty => write!(f, "empty expression"),
            ExprError::Malformed(n) => {
                write!(f, "expected `<int> <op> <int>`, found {} token(s)", n)
            }
            ExprError::InvalidOperand(tok) => write!(f, "invalid operand `{}`", tok),
            ExprError::UnknownOperator(tok) => write!(f, "unknown operator `{}`", tok),
            ExprError::DivisionByZero => write!(f, "division by zero"),
            ExprError::Overflow => write!(f, "arithmetic overflow"),
        }
    }
}

impl std::error::Error for ExprError {}

/// A binary arithmetic expression over two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Expression {
    pub lhs: i64,
    pub op: Operator,
    pub rhs: i64,
}

impl Expression {
    pub const fn new(lhs: i64, op: Operator, rhs: i64) -> Self {
        Self { lhs, op, rhs }
    }

    /// Parse the textual form `"<int> <op> <int>"`.
    ///
    /// Tokens are separated by any amount of whitespace.
    pub fn parse(s: &str) -> Result<Self, ExprError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(ExprError::Empty),
            [lhs, op, rhs] => {
                let lhs = parse_operand(lhs)?;
                let op = Operator::from_symbol(op)
                    .ok_or_else(|| ExprError::UnknownOperator((*op).to_string()))?;
                let rhs = parse_operand(rhs)?;
                Ok(Self { lhs, op, rhs })
            }
            other => Err(ExprError::Malformed(other.len())),
        }
    }

    /// Exact value of the expression.
    ///
    /// `+`, `-` and `*` are computed on integers; `/` is a real division.
    pub fn evaluate(&self) -> Result<f64, ExprError> {
        let value = match self.op {
            Operator::Add => self.lhs.checked_add(self.rhs).ok_or(ExprError::Overflow)? as f64,
            Operator::Sub => self.lhs.checked_sub(self.rhs).ok_or(ExprError::Overflow)? as f64,
            Operator::Mul => self.lhs.checked_mul(self.rhs).ok_or(ExprError::Overflow)? as f64,
            Operator::Div => {
                if self.rhs == 0 {
                    return Err(ExprError::DivisionByZero);
                }
                self.lhs as f64 / self.rhs as f64
            }
        };
        Ok(value)
    }

    /// Value rounded to the nearest integer, halves toward positive infinity.
    pub fn rounded(&self) -> Result<i64, ExprError> {
        self.evaluate().map(round_half_up)
    }
}

fn parse_operand(tok: &str) -> Result<i64, ExprError> {
    tok.parse::<i64>()
        .map_err(|_| ExprError::InvalidOperand(tok.to_string()))
}

/// Round to nearest, ties toward +inf (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op.symbol(), self.rhs)
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Expression> for String {
    fn from(value: Expression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Expression {
    type Error = ExprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
