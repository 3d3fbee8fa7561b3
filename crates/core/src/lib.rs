//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the game rules and session state. It has no dependencies
//! on the terminal, input devices or audio, so a seeded session can be driven
//! entirely from tests.
//!
//! # Module Structure
//!
//! - [`bag`]: 7-bag random piece generation
//! - [`piece`]: tetromino templates and matrix rotation
//! - [`board`]: grid with placement checks and line clearing
//! - [`scoring`]: line rewards, levels and gravity intervals
//! - [`game_state`]: the session controller
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! A simplified take on standard Tetris:
//!
//! - **7-Bag Randomizer**: every run of seven pieces contains each kind once
//! - **Rotation**: plain 90° matrix rotation with horizontal kicks `0, -1, +1, -2, +2`
//! - **Locking**: a piece locks as soon as gravity cannot move it down
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the level
//! - **Levels**: one level per 10 lines, starting at level 1
//! - **Game over**: only when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece locked on the floor; the next one is falling.
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::update`](game_state::GameState::update) once
//! per frame with the elapsed milliseconds. At most one gravity step happens
//! per call.

pub mod bag;
pub mod board;
pub mod game_state;
pub mod piece;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use board::Board;
pub use game_state::{GameEvent, GameState, MAX_QUEUED_EVENTS};
pub use piece::{Matrix, Tetromino};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
pub use snapshot::GameSnapshot;
