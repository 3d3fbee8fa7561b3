//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and host
//! commands (quit, volume). Soft drop is a held action; [`SoftDropLatch`]
//! turns presses and releases into start/stop actions, falling back to a
//! timeout on terminals that never report key releases.

pub mod map;
pub mod soft_drop;

pub use term_tetris_types as types;

pub use map::{handle_key_event, handle_key_release, should_quit, volume_delta};
pub use soft_drop::SoftDropLatch;
