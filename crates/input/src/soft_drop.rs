//! Soft drop press/release tracking.
//!
//! Terminals that support the kitty keyboard protocol report key releases;
//! most others only report presses and auto-repeats. Without releases the
//! latch treats Down as held for a short grace period after the last press
//! or repeat, which keeps soft drop on while the key auto-repeats.

use crate::types::{GameAction, SOFT_DROP_GRACE_MS};

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    remaining_ms: u32,
    grace_ms: u32,
    release_events: bool,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            remaining_ms: 0,
            grace_ms,
            release_events: false,
        }
    }

    /// Declare whether the terminal reports key releases.
    ///
    /// With release events the latch never times out on its own.
    pub fn with_release_events(mut self, release_events: bool) -> Self {
        self.release_events = release_events;
        self
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Down pressed or auto-repeated.
    ///
    /// Returns `SoftDropStart` on the transition into the held state.
    pub fn press(&mut self) -> Option<GameAction> {
        self.remaining_ms = self.grace_ms;
        if self.held {
            return None;
        }
        self.held = true;
        Some(GameAction::SoftDropStart)
    }

    /// Down released.
    pub fn release(&mut self) -> Option<GameAction> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.remaining_ms = 0;
        Some(GameAction::SoftDropStop)
    }

    /// Advance the grace timer; returns `SoftDropStop` when it runs out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.held || self.release_events {
            return None;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            return self.release();
        }
        None
    }

    /// Forget any held state, e.g. after a reset.
    pub fn clear(&mut self) {
        self.held = false;
        self.remaining_ms = 0;
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
