//! Background music.
//!
//! The game plays one looping track. Playback starts on the first key press
//! (never before) and is otherwise independent of the game state; the only
//! live control is the volume, kept in `[0, 1]`.
//!
//! Output goes through a [`MusicBackend`]. [`SilentBackend`] is always
//! available; the `rodio` feature adds [`RodioBackend`], which decodes a
//! file from disk and plays it on the default output device.

pub mod player;

#[cfg(feature = "rodio")]
pub mod rodio_backend;

pub use player::{MusicBackend, MusicPlayer, SilentBackend};

#[cfg(feature = "rodio")]
pub use rodio_backend::RodioBackend;
