//! Math Chompers (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, the
//! integration tests and the benchmarks can use `math_chompers::{core,input,term,types}`.

pub use math_chompers_core as core;
pub use math_chompers_input as input;
pub use math_chompers_term as term;
pub use math_chompers_types as types;
