//! Grid generator - random cell content for each mode
//!
//! Cells are drawn independently:
//!
//! | Mode | Cell |
//! |------|------|
//! | multiples | uniform integer in 1..=50 (not necessarily a multiple) |
//! | factors | the rule itself half the time, otherwise uniform in 1..=rule |
//! | primes | uniform integer in 1..=50 |
//! | equality | expression whose rounded value equals the rule |
//! | inequality | expression whose rounded value differs from the rule |
//!
//! Expressions are found by rejection sampling over operands in 1..=12 and the
//! four operators. After [`MAX_EQUATION_ATTEMPTS`] rejected draws the whole
//! operand/operator space is enumerated and a matching expression is picked
//! uniformly, so generation always terminates.

use std::fmt;

use arrayvec::ArrayVec;
use log::{debug, trace};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cell::{CellValue, Grid};
use crate::expr::Expression;
use crate::types::{
    Mode, Operator, CELL_COUNT, MAX_EQUATION_ATTEMPTS, NO_RULE, OPERAND_MAX, OPERAND_MIN,
    VALUE_MAX, VALUE_MIN,
};

const OPERAND_SPAN: usize = (OPERAND_MAX - OPERAND_MIN + 1) as usize;

/// Number of distinct `<lhs> <op> <rhs>` combinations the generator can emit.
pub const EXPRESSION_SPACE: usize = OPERAND_SPAN * OPERAND_SPAN * Operator::ALL.len();

/// Errors raised when a grid cannot be generated for a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Factors mode needs a rule of at least 1.
    InvalidRule { mode: Mode, rule: i64 },

    /// No expression in the operand space satisfies the condition.
    UnreachableTarget { target: i64, equality: bool },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidRule { mode, rule } => {
                write!(f, "rule {} is not valid for {} mode", rule, mode.as_str())
            }
            GenerateError::UnreachableTarget { target, equality } => write!(
                f,
                "no expression with operands {}..={} {} {}",
                OPERAND_MIN,
                OPERAND_MAX,
                if *equality { "equals" } else { "differs from" },
                target
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate a full grid for `mode` and `rule`.
pub fn generate_grid<R: Rng + ?Sized>(
    mode: Mode,
    rule: i64,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    validate_rule(mode, rule)?;

    let mut grid: Grid = [CellValue::default(); CELL_COUNT];
    for cell in grid.iter_mut() {
        *cell = generate_cell(mode, rule, rng)?;
    }
    Ok(grid)
}

/// Generate one cell value.
pub fn generate_cell<R: Rng + ?Sized>(
    mode: Mode,
    rule: i64,
    rng: &mut R,
) -> Result<CellValue, GenerateError> {
    let value = match mode {
        Mode::Multiples | Mode::Primes => CellValue::Number(rng.random_range(VALUE_MIN..=VALUE_MAX)),
        Mode::Factors => {
            validate_rule(mode, rule)?;
            if rng.random_bool(0.5) {
                CellValue::Number(rule)
            } else {
                CellValue::Number(rng.random_range(1..=rule))
            }
        }
        Mode::Equality => CellValue::Expr(generate_equation(rule, true, rng)?),
        Mode::Inequality => CellValue::Expr(generate_equation(rule, false, rng)?),
    };
    Ok(value)
}

/// Replacement for an eaten cell.
///
/// Draws a whole new grid and keeps its first cell, so the replacement follows
/// exactly the same distribution as a fresh grid. It may equal the value it
/// replaces.
pub fn regenerate_cell<R: Rng + ?Sized>(
    mode: Mode,
    rule: i64,
    rng: &mut R,
) -> Result<CellValue, GenerateError> {
    let grid = generate_grid(mode, rule, rng)?;
    Ok(grid[0])
}

/// Find an expression whose rounded value equals (`equality`) or differs from
/// `target`.
pub fn generate_equation<R: Rng + ?Sized>(
    target: i64,
    equality: bool,
    rng: &mut R,
) -> Result<Expression, GenerateError> {
    for _ in 0..MAX_EQUATION_ATTEMPTS {
        let expr = random_expression(rng);
        match expr.rounded() {
            Ok(v) if (v == target) == equality => return Ok(expr),
            Ok(_) => {}
            Err(e) => trace!("discarding `{}`: {}", expr, e),
        }
    }

    debug!(
        "no expression for target {} (equality={}) after {} draws, enumerating",
        target, equality, MAX_EQUATION_ATTEMPTS
    );

    let mut candidates: ArrayVec<Expression, EXPRESSION_SPACE> = ArrayVec::new();
    for lhs in OPERAND_MIN..=OPERAND_MAX {
        for op in Operator::ALL {
            for rhs in OPERAND_MIN..=OPERAND_MAX {
                let expr = Expression::new(lhs, op, rhs);
                if matches!(expr.rounded(), Ok(v) if (v == target) == equality) {
                    candidates.push(expr);
                }
            }
        }
    }

    candidates
        .choose(rng)
        .copied()
        .ok_or(GenerateError::UnreachableTarget { target, equality })
}

/// Draw a fresh rule number for `mode`.
pub fn random_rule<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> i64 {
    match mode.rule_range() {
        Some(range) => rng.random_range(range),
        None => NO_RULE,
    }
}

fn random_expression<R: Rng + ?Sized>(rng: &mut R) -> Expression {
    let lhs = rng.random_range(OPERAND_MIN..=OPERAND_MAX);
    let rhs = rng.random_range(OPERAND_MIN..=OPERAND_MAX);
    let op = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
    Expression::new(lhs, op, rhs)
}

fn validate_rule(mode: Mode, rule: i64) -> Result<(), GenerateError> {
    if mode == Mode::Factors && rule < 1 {
        return Err(GenerateError::InvalidRule { mode, rule });
    }
    Ok(())
}
