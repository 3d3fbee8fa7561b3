//! Terminal rendering for the game.
//!
//! Rather than a widget toolkit, the game draws into a plain framebuffer that
//! is diffed and flushed to the terminal each frame. That keeps the view code
//! pure and gives exact control over the board's 2:1 cell aspect.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: board, ghost, side panel and overlays
//! - [`preview`]: next-piece preview box
//! - [`render_throttle`]: skips redundant frames while static
//! - [`renderer`]: diff encoding and terminal setup/teardown

pub mod fb;
pub mod game_view;
pub mod preview;
pub mod render_throttle;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    AnchorY, AudioStatusView, BoardLayout, GameView, Viewport, GAME_OVER_TEXT, PAUSED_TEXT,
};
pub use preview::{draw_preview, PREVIEW_HEIGHT, PREVIEW_WIDTH};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
