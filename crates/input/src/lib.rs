//! Terminal input module (session-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key and
//! mouse events into [`crate::types::GameAction`]s. Mouse presses are resolved
//! to a grid cell by a hit-test callback supplied by the view.

pub mod map;

pub use math_chompers_types as types;

pub use map::{handle_key_event, handle_mouse_event, is_repeatable, should_quit};
