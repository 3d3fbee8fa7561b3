//! Skips redundant frames while nothing on screen moves.

/// Decides whether a frame needs drawing.
///
/// While the game runs every frame is drawn. While it is static (paused or
/// over) a frame is drawn only when the snapshot fingerprint changes, plus
/// a keep-alive redraw every `min_static_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// Time and fingerprint of the last drawn frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Forget the last frame so the next call always draws (e.g. on resize).
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let draw = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if draw {
            self.last = Some((now_ms, fingerprint));
        }
        draw
    }
}
