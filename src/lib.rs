//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `term_tetris::{audio,core,input,term,types}` and owns
//! the command line configuration and frame clock used by the binary.

pub mod clock;
pub mod config;

pub use term_tetris_audio as audio;
pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
