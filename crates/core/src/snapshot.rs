//! Snapshot module - a plain copy of what the view needs
//!
//! Renderers never touch a [`Session`](crate::session::Session) directly. The
//! loop copies its state into a [`SessionSnapshot`] once per frame.

use crate::cell::{CellValue, Grid};
use crate::types::{col_of, row_of, Mode, CELL_COUNT, CENTER_INDEX, NO_RULE};

/// Read model of a session for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub rule: i64,
    pub grid: Grid,
    pub cursor: usize,
    pub score: i32,
    pub flash: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            mode: Mode::Multiples,
            rule: NO_RULE,
            grid: [CellValue::default(); CELL_COUNT],
            cursor: CENTER_INDEX,
            score: 0,
            flash: false,
        }
    }
}

impl SessionSnapshot {
    pub fn cursor_row(&self) -> usize {
        row_of(self.cursor)
    }

    pub fn cursor_col(&self) -> usize {
        col_of(self.cursor)
    }

    /// Whether the status line should show a rule number.
    pub fn has_rule(&self) -> bool {
        self.mode.rule_range().is_some()
    }
}
