//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, usable from the core rules, the terminal
//! view and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! - **Size**: 5x5 cells, indexed 0-24 row-major
//! - **Muncher start**: index 12 (the center cell)
//!
//! # Content Ranges
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VALUE_MIN..=VALUE_MAX` | 1..=50 | Numbers shown in multiples/primes mode |
//! | `OPERAND_MIN..=OPERAND_MAX` | 1..=12 | Operands of generated expressions |
//! | `MAX_EQUATION_ATTEMPTS` | 10000 | Random draws before the exhaustive fallback |
//!
//! # Rule Numbers by Mode
//!
//! | Mode | Range |
//! |------|-------|
//! | multiples | 2..=9 |
//! | factors | 4..=13 |
//! | primes | fixed 0 (no rule) |
//! | equality | 1..=20 |
//! | inequality | 1..=20 |
//!
//! # Examples
//!
//! ```
//! use math_chompers_types::{Direction, Mode, Operator, CELL_COUNT, GRID_SIZE};
//!
//! let mode = Mode::from_str("factors").unwrap();
//! assert_eq!(mode, Mode::Factors);
//! assert_eq!(mode.label(), "Factors");
//! assert_eq!(mode.rule_range(), Some(4..=13));
//!
//! assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! assert_eq!(GRID_SIZE * GRID_SIZE, CELL_COUNT);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Grid width and height in cells
pub const GRID_SIZE: usize = 5;

/// Number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Cursor position after start and after every mode change
pub const CENTER_INDEX: usize = 12;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Background flash after a correct pick
pub const FLASH_MS: u32 = 150;

/// Smallest number generated for multiples and primes
pub const VALUE_MIN: i64 = 1;

/// Largest number generated for multiples and primes
pub const VALUE_MAX: i64 = 50;

/// Smallest expression operand
pub const OPERAND_MIN: i64 = 1;

/// Largest expression operand
pub const OPERAND_MAX: i64 = 12;

/// Random expression draws before falling back to an exhaustive scan
pub const MAX_EQUATION_ATTEMPTS: u32 = 10_000;

/// Number of distinct step sounds the muncher cycles through
pub const STEP_SOUND_COUNT: u8 = 3;

/// Rule number used by modes that have no rule (primes)
pub const NO_RULE: i64 = 0;

/// The five game modes
///
/// The mode decides both how cell values are generated and how a pick is
/// judged:
/// - **Multiples**: numbers divisible by the rule
/// - **Factors**: numbers dividing the rule
/// - **Primes**: prime numbers (no rule)
/// - **Equality**: expressions equal to the rule
/// - **Inequality**: expressions not equal to the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Multiples,
    Factors,
    Primes,
    Equality,
    Inequality,
}

impl Mode {
    /// All modes, in menu order
    pub const ALL: [Mode; 5] = [
        Mode::Multiples,
        Mode::Factors,
        Mode::Primes,
        Mode::Equality,
        Mode::Inequality,
    ];

    /// Parse mode from string (case-insensitive)
    ///
    /// Accepts the singular names and the plural menu labels.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "multiples" | "multiple" => Some(Mode::Multiples),
            "factors" | "factor" => Some(Mode::Factors),
            "primes" | "prime" => Some(Mode::Primes),
            "equality" | "equalities" => Some(Mode::Equality),
            "inequality" | "inequalities" => Some(Mode::Inequality),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Multiples => "multiples",
            Mode::Factors => "factors",
            Mode::Primes => "primes",
            Mode::Equality => "equality",
            Mode::Inequality => "inequality",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Multiples => "Multiples",
            Mode::Factors => "Factors",
            Mode::Primes => "Primes",
            Mode::Equality => "Equalities",
            Mode::Inequality => "Inequalities",
        }
    }

    /// Range a fresh rule number is drawn from on mode change.
    ///
    /// `None` means the mode has no rule and uses [`NO_RULE`].
    pub fn rule_range(&self) -> Option<RangeInclusive<i64>> {
        match self {
            Mode::Multiples => Some(2..=9),
            Mode::Factors => Some(4..=13),
            Mode::Primes => None,
            Mode::Equality | Mode::Inequality => Some(1..=20),
        }
    }

    /// Position in [`Mode::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Mode::Multiples => 0,
            Mode::Factors => 1,
            Mode::Primes => 2,
            Mode::Equality => 3,
            Mode::Inequality => 4,
        }
    }
}

/// Arithmetic operators allowed in cell expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    /// All operators, in sampling order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

/// Cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the muncher one cell
    Move(Direction),
    /// Eat the cell under the muncher
    Select,
    /// Pointer press on a cell: select if it is under the muncher, move there otherwise
    Touch(usize),
    /// Switch mode (new rule, new grid, score reset)
    ChangeMode(Mode),
}

/// Row of a grid index
#[inline]
pub fn row_of(index: usize) -> usize {
    index / GRID_SIZE
}

/// Column of a grid index
#[inline]
pub fn col_of(index: usize) -> usize {
    index % GRID_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constants_agree() {
        assert_eq!(CELL_COUNT, 25);
        assert_eq!(row_of(CENTER_INDEX), GRID_SIZE / 2);
        assert_eq!(col_of(CENTER_INDEX), GRID_SIZE / 2);
    }

    #[test]
    fn mode_round_trips_through_names() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
            assert_eq!(Mode::from_str(mode.label()), Some(mode));
            assert_eq!(Mode::ALL[mode.index()], mode);
        }
        assert_eq!(Mode::from_str("EQUALITIES"), Some(Mode::Equality));
        assert_eq!(Mode::from_str("squares"), None);
    }

    #[test]
    fn rule_ranges_match_menu() {
        assert_eq!(Mode::Multiples.rule_range(), Some(2..=9));
        assert_eq!(Mode::Factors.rule_range(), Some(4..=13));
        assert_eq!(Mode::Primes.rule_range(), None);
        assert_eq!(Mode::Equality.rule_range(), Some(1..=20));
        assert_eq!(Mode::Inequality.rule_range(), Some(1..=20));
    }

    #[test]
    fn operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("%"), None);
    }
}
