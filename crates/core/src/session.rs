//! Session module - the complete state of one game
//!
//! A [`Session`] owns the grid, the muncher position, the mode and rule, the
//! score and the flash timer. It only changes through the named transitions
//! below, one input event at a time:
//!
//! - [`Session::move_cursor`] / [`Session::move_to`]: move the muncher
//! - [`Session::select_cell`]: eat the cell under the muncher
//! - [`Session::touch`]: pointer press (select in place, or move)
//! - [`Session::change_mode`]: new mode, new rule, new grid, score reset
//! - [`Session::tick`]: advance the flash timer
//!
//! Every transition reports an [`Outcome`] and forwards a [`Feedback`] event
//! to the owned [`FeedbackSink`] where the game would make a sound.

use log::{info, trace};
use rand::Rng;

use crate::cell::{CellValue, Grid};
use crate::evaluator::is_correct;
use crate::feedback::{Feedback, FeedbackSink};
use crate::generator::{generate_grid, random_rule, regenerate_cell, GenerateError};
use crate::snapshot::SessionSnapshot;
use crate::types::{
    col_of, row_of, Direction, GameAction, Mode, CELL_COUNT, CENTER_INDEX, FLASH_MS, GRID_SIZE,
    STEP_SOUND_COUNT,
};

/// Result of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The muncher moved.
    Moved,
    /// The move would leave the grid (or stay in place); nothing changed.
    Blocked,
    /// A correct cell was eaten.
    Correct,
    /// A wrong cell was picked.
    Incorrect,
    /// Mode switched and the grid was rebuilt.
    ModeChanged,
}

/// One game session.
#[derive(Debug, Clone)]
pub struct Session<R, F> {
    mode: Mode,
    rule: i64,
    grid: Grid,
    cursor: usize,
    score: i32,
    flash_ms: u32,
    /// Next step sound to play.
    step: u8,
    rng: R,
    sink: F,
}

impl<R: Rng, F: FeedbackSink> Session<R, F> {
    /// Start a session with an explicit rule number.
    pub fn new(mode: Mode, rule: i64, mut rng: R, sink: F) -> Result<Self, GenerateError> {
        let grid = generate_grid(mode, rule, &mut rng)?;
        info!("session started: mode={} rule={}", mode.as_str(), rule);
        Ok(Self::with_grid(mode, rule, grid, rng, sink))
    }

    /// Start a session with a rule drawn from the mode's range.
    pub fn with_random_rule(mode: Mode, mut rng: R, sink: F) -> Result<Self, GenerateError> {
        let rule = random_rule(mode, &mut rng);
        Self::new(mode, rule, rng, sink)
    }

    /// Start from a known grid (replays, tests).
    pub fn with_grid(mode: Mode, rule: i64, grid: Grid, rng: R, sink: F) -> Self {
        Self {
            mode,
            rule,
            grid,
            cursor: CENTER_INDEX,
            score: 0,
            flash_ms: 0,
            step: 0,
            rng,
            sink,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rule(&self) -> i64 {
        self.rule
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn flash_active(&self) -> bool {
        self.flash_ms > 0
    }

    pub fn flash_ms(&self) -> u32 {
        self.flash_ms
    }

    /// Value under the muncher.
    pub fn current_cell(&self) -> CellValue {
        self.grid[self.cursor]
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }

    /// Move the muncher one cell. Walls block; there is no wrap-around.
    pub fn move_cursor(&mut self, direction: Direction) -> Outcome {
        let row = row_of(self.cursor);
        let col = col_of(self.cursor);
        let target = match direction {
            Direction::Up if row > 0 => self.cursor - GRID_SIZE,
            Direction::Down if row < GRID_SIZE - 1 => self.cursor + GRID_SIZE,
            Direction::Left if col > 0 => self.cursor - 1,
            Direction::Right if col < GRID_SIZE - 1 => self.cursor + 1,
            _ => return Outcome::Blocked,
        };
        trace!("move {} -> {}", direction.as_str(), target);
        self.step_to(target)
    }

    /// Jump the muncher to `index` (pointer/touch).
    pub fn move_to(&mut self, index: usize) -> Outcome {
        if index >= CELL_COUNT || index == self.cursor {
            return Outcome::Blocked;
        }
        trace!("jump -> {}", index);
        self.step_to(index)
    }

    fn step_to(&mut self, index: usize) -> Outcome {
        self.cursor = index;
        let step = self.step;
        self.step = (self.step + 1) % STEP_SOUND_COUNT;
        self.sink.feedback(Feedback::Moved { step });
        Outcome::Moved
    }

    /// Eat the cell under the muncher.
    ///
    /// A correct pick scores +1, replaces the cell and arms the flash; a wrong
    /// pick scores -1 and leaves the grid alone.
    pub fn select_cell(&mut self) -> Result<Outcome, GenerateError> {
        let value = self.grid[self.cursor];
        if is_correct(self.mode, &value, self.rule) {
            let replacement = regenerate_cell(self.mode, self.rule, &mut self.rng)?;
            self.grid[self.cursor] = replacement;
            self.score = self.score.saturating_add(1);
            self.flash_ms = FLASH_MS;
            self.sink.feedback(Feedback::Correct);
            Ok(Outcome::Correct)
        } else {
            self.score = self.score.saturating_sub(1);
            self.sink.feedback(Feedback::Incorrect);
            Ok(Outcome::Incorrect)
        }
    }

    /// Pointer press on `index`: eat it when the muncher is already there,
    /// otherwise move the muncher onto it.
    pub fn touch(&mut self, index: usize) -> Result<Outcome, GenerateError> {
        if index == self.cursor {
            self.select_cell()
        } else {
            Ok(self.move_to(index))
        }
    }

    /// Switch to `mode` with a fresh rule and grid.
    ///
    /// Score goes back to 0 and the muncher to the center. On error the
    /// session is left untouched.
    pub fn change_mode(&mut self, mode: Mode) -> Result<Outcome, GenerateError> {
        let rule = random_rule(mode, &mut self.rng);
        let grid = generate_grid(mode, rule, &mut self.rng)?;

        self.mode = mode;
        self.rule = rule;
        self.grid = grid;
        self.score = 0;
        self.cursor = CENTER_INDEX;
        self.flash_ms = 0;
        info!("mode changed: mode={} rule={}", mode.as_str(), rule);
        Ok(Outcome::ModeChanged)
    }

    /// Advance timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
    }

    /// Dispatch a mapped input action.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Outcome, GenerateError> {
        match action {
            GameAction::Move(direction) => Ok(self.move_cursor(direction)),
            GameAction::Select => self.select_cell(),
            GameAction::Touch(index) => self.touch(index),
            GameAction::ChangeMode(mode) => self.change_mode(mode),
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.mode = self.mode;
        out.rule = self.rule;
        out.grid = self.grid;
        out.cursor = self.cursor;
        out.score = self.score;
        out.flash = self.flash_active();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
