//! Core game logic module - pure, deterministic given a seed, and testable
//!
//! This module contains the content generator, the correctness rules and the
//! session state machine. It has **no dependencies** on the terminal or on any
//! I/O, which makes it:
//!
//! - **Deterministic**: the same seeded RNG produces the same grids
//! - **Testable**: every rule and transition has unit tests
//! - **Portable**: usable from the terminal front end or headless tools
//!
//! # Module Structure
//!
//! - [`expr`]: typed `"<int> <op> <int>"` expressions (parse, display, evaluate)
//! - [`cell`]: cell values and the 25-cell grid
//! - [`generator`]: random grid content per mode, with bounded expression search
//! - [`evaluator`]: whether eating a cell scores under the current rule
//! - [`session`]: cursor, score, mode and flash state with named transitions
//! - [`feedback`]: the sink that receives correct/incorrect/step events
//! - [`snapshot`]: plain read model for renderers
//!
//! # Game Rules
//!
//! - **Multiples**: eat numbers divisible by the rule (2-9)
//! - **Factors**: eat numbers that divide the rule (4-13)
//! - **Primes**: eat prime numbers
//! - **Equalities**: eat expressions equal to the rule (1-20)
//! - **Inequalities**: eat expressions not equal to the rule (1-20)
//!
//! A correct pick scores +1 and the cell is refilled; a wrong pick scores -1.
//!
//! # Example
//!
//! ```
//! use math_chompers_core::{NullSink, Outcome, Session};
//! use math_chompers_types::{Direction, GameAction, Mode};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut game = Session::new(Mode::Multiples, 3, rng, NullSink).unwrap();
//!
//! assert_eq!(game.apply_action(GameAction::Move(Direction::Up)).unwrap(), Outcome::Moved);
//! let outcome = game.apply_action(GameAction::Select).unwrap();
//! assert!(matches!(outcome, Outcome::Correct | Outcome::Incorrect));
//! assert_eq!(game.score().abs(), 1);
//! ```

pub mod cell;
pub mod evaluator;
pub mod expr;
pub mod feedback;
pub mod generator;
pub mod session;
pub mod snapshot;

pub use math_chompers_types as types;

// Re-export commonly used types for convenience
pub use cell::{CellValue, Grid};
pub use evaluator::{check, is_correct, is_prime, EvalError};
pub use expr::{ExprError, Expression};
pub use feedback::{Feedback, FeedbackSink, NullSink, RecordingSink};
pub use generator::{
    generate_cell, generate_equation, generate_grid, random_rule, regenerate_cell, GenerateError,
};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
