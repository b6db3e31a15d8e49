//! Terminal front end for Math Chompers.
//!
//! A small, game-oriented rendering layer. It avoids widget toolkits and
//! renders a [`core::SessionSnapshot`] into a plain framebuffer that is then
//! diffed and flushed to the terminal.
//!
//! - [`game_view`]: snapshot to framebuffer, plus pointer hit-testing
//! - [`renderer`]: framebuffer to terminal bytes
//! - [`bell`]: audible feedback for wrong picks

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use math_chompers_core as core;
pub use math_chompers_types as types;

pub use bell::BellSink;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
