use anyhow::Result;
use log::{info, warn};

/// Something that can loop a music track.
pub trait MusicBackend {
    /// Start (or resume) playback.
    fn play(&mut self) -> Result<()>;

    /// Apply a volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
}

/// Backend that plays nothing. Used when music is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl MusicBackend for SilentBackend {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) {}
}

/// Lazily started music with a clamped volume.
pub struct MusicPlayer {
    backend: Box<dyn MusicBackend>,
    volume: f32,
    started: bool,
}

impl MusicPlayer {
    pub fn new(backend: Box<dyn MusicBackend>, volume: f32) -> Self {
        let mut player = Self {
            backend,
            volume: 0.0,
            started: false,
        };
        player.set_volume(volume);
        player
    }

    /// A player that tracks volume but makes no sound.
    pub fn silent(volume: f32) -> Self {
        Self::new(Box::new(SilentBackend), volume)
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Set the volume, clamped to `[0, 1]`. NaN is treated as silence.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.backend.set_volume(self.volume);
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    /// Called for every key press; starts playback the first time.
    ///
    /// A backend failure is logged and playback is not retried.
    pub fn on_key_press(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        match self.backend.play() {
            Ok(()) => info!("music started at volume {:.2}", self.volume),
            Err(e) => warn!("music disabled: {:#}", e),
        }
    }
}

impl std::fmt::Debug for MusicPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicPlayer")
            .field("volume", &self.volume)
            .field("started", &self.started)
            .finish()
    }
}
