//! Correctness evaluator - decides whether eating a cell scores
//!
//! [`check`] reports degenerate arithmetic as an [`EvalError`]; [`is_correct`]
//! is the total version the game loop uses, where any error counts as a wrong
//! pick.

use std::fmt;

use log::debug;

use crate::cell::CellValue;
use crate::expr::ExprError;
use crate::types::Mode;

/// Errors raised while judging a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// `factors` with a zero value, or `multiples` with a zero rule.
    DivisionByZero,

    /// The cell expression could not be evaluated.
    Expr(ExprError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "modulo by zero"),
            EvalError::Expr(e) => write!(f, "cannot evaluate cell: {}", e),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::DivisionByZero => None,
            EvalError::Expr(e) => Some(e),
        }
    }
}

impl From<ExprError> for EvalError {
    fn from(value: ExprError) -> Self {
        EvalError::Expr(value)
    }
}

/// Judge `value` against `rule` under `mode`.
///
/// | Mode | Correct when |
/// |------|--------------|
/// | multiples | `value % rule == 0` |
/// | factors | `rule % value == 0` |
/// | primes | `value >= 2` with no integer divisor in `2..=sqrt(value)` (`rule` ignored) |
/// | equality | `value == rule` |
/// | inequality | `value != rule` |
pub fn check(mode: Mode, value: &CellValue, rule: i64) -> Result<bool, EvalError> {
    let num = value.numeric()?;
    let rule = rule as f64;

    let correct = match mode {
        Mode::Multiples => {
            if rule == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            num % rule == 0.0
        }
        Mode::Factors => {
            if num == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            rule % num == 0.0
        }
        Mode::Primes => has_no_small_divisor(num),
        Mode::Equality => num == rule,
        Mode::Inequality => num != rule,
    };
    Ok(correct)
}

/// Total form of [`check`]: errors are logged and count as incorrect.
pub fn is_correct(mode: Mode, value: &CellValue, rule: i64) -> bool {
    match check(mode, value, rule) {
        Ok(correct) => correct,
        Err(e) => {
            debug!("{} cell `{}` vs rule {}: {}", mode.as_str(), value, rule, e);
            false
        }
    }
}

/// Trial division of a coerced value by `2, 3, ..` up to its square root.
///
/// Expression values need not be integral; `7.5` has no integer divisor and
/// passes.
fn has_no_small_divisor(num: f64) -> bool {
    if num < 2.0 {
        return false;
    }
    let limit = num.sqrt();
    let mut i = 2.0;
    while i <= limit {
        if num % i == 0.0 {
            return false;
        }
        i += 1.0;
    }
    true
}

/// Trial division up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expression;
    use crate::types::Operator;

    fn n(v: i64) -> CellValue {
        CellValue::Number(v)
    }

    fn e(s: &str) -> CellValue {
        CellValue::Expr(Expression::parse(s).unwrap())
    }

    #[test]
    fn primes_small_values() {
        assert!(!is_correct(Mode::Primes, &n(0), 0));
        assert!(!is_correct(Mode::Primes, &n(1), 0));
        assert!(is_correct(Mode::Primes, &n(2), 0));
        assert!(is_correct(Mode::Primes, &n(3), 0));
        assert!(!is_correct(Mode::Primes, &n(4), 0));
        assert!(!is_correct(Mode::Primes, &n(-7), 0));
    }

    #[test]
    fn primes_ignore_rule() {
        assert!(is_correct(Mode::Primes, &n(2), 99));
        assert!(!is_correct(Mode::Primes, &n(9), 3));
    }

    #[test]
    fn primes_up_to_fifty() {
        let expected = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        let found: Vec<i64> = (1..=50).filter(|&v| is_prime(v)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn squares_of_primes_are_not_prime() {
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
    }

    #[test]
    fn fractional_values_use_trial_division() {
        // 2.5 and 7.5 have no integer divisor up to their square root.
        assert!(is_correct(Mode::Primes, &e("5 / 2"), 0));
        assert!(is_correct(Mode::Primes, &e("15 / 2"), 0));
        assert!(is_correct(Mode::Primes, &e("10 / 2"), 0));
        assert!(!is_correct(Mode::Primes, &e("12 / 3"), 0));
        assert!(!is_correct(Mode::Primes, &e("3 / 2"), 0));
    }

    #[test]
    fn value_trial_division_agrees_with_integer_primes() {
        for v in -3..=60 {
            assert_eq!(has_no_small_divisor(v as f64), is_prime(v), "{}", v);
        }
    }

    #[test]
    fn multiples() {
        assert!(is_correct(Mode::Multiples, &n(9), 3));
        assert!(!is_correct(Mode::Multiples, &n(10), 3));
        assert!(is_correct(Mode::Multiples, &n(0), 3));
    }

    #[test]
    fn factors() {
        assert!(is_correct(Mode::Factors, &n(2), 8));
        assert!(!is_correct(Mode::Factors, &n(3), 8));
        assert!(is_correct(Mode::Factors, &n(8), 8));
        assert!(is_correct(Mode::Factors, &n(1), 13));
    }

    #[test]
    fn zero_divisors_are_errors() {
        assert_eq!(
            check(Mode::Factors, &n(0), 8),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            check(Mode::Multiples, &n(6), 0),
            Err(EvalError::DivisionByZero)
        );
        // The total form never lets the error escape.
        assert!(!is_correct(Mode::Factors, &n(0), 8));
        assert!(!is_correct(Mode::Multiples, &n(6), 0));
    }

    #[test]
    fn equality_and_inequality_on_numbers() {
        assert!(is_correct(Mode::Equality, &n(6), 6));
        assert!(!is_correct(Mode::Inequality, &n(6), 6));
        assert!(!is_correct(Mode::Equality, &n(5), 6));
        assert!(is_correct(Mode::Inequality, &n(5), 6));
    }

    #[test]
    fn equality_on_expressions_is_exact() {
        assert!(is_correct(Mode::Equality, &e("3 * 2"), 6));
        assert!(is_correct(Mode::Equality, &e("12 / 2"), 6));
        // 13 / 2 = 6.5, which is not 6 even though it rounds near it.
        assert!(!is_correct(Mode::Equality, &e("13 / 2"), 6));
        assert!(is_correct(Mode::Inequality, &e("13 / 2"), 6));
        assert!(is_correct(Mode::Inequality, &e("1 - 12"), 6));
    }

    #[test]
    fn bad_expression_is_an_error() {
        let bad = CellValue::Expr(Expression::new(4, Operator::Div, 0));
        assert_eq!(
            check(Mode::Equality, &bad, 4),
            Err(EvalError::Expr(ExprError::DivisionByZero))
        );
        assert!(!is_correct(Mode::Equality, &bad, 4));
        assert!(!is_correct(Mode::Inequality, &bad, 4));
    }
}
