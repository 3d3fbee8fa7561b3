//! Frame timing for the host loop.

use std::time::{Duration, Instant};

/// Measures elapsed whole milliseconds between frames.
///
/// Only the milliseconds handed out are consumed; the sub-millisecond rest
/// carries into the next frame, so no time is lost to truncation.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Whole milliseconds since the previous tick.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.last += Duration::from_millis(u64::from(ms));
        ms
    }

    /// Time left until `frame` has passed since the last tick.
    pub fn until_next(&self, frame: Duration, now: Instant) -> Duration {
        frame.saturating_sub(now.saturating_duration_since(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_carries_into_next_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        // Sixty frames of 16.6 ms credit 996 ms, not 60 * 16 = 960 ms.
        let mut total = 0;
        for i in 1..=60u64 {
            total += clock.tick(start + Duration::from_micros(16_600 * i));
        }
        assert_eq!(total, 996);
    }

    #[test]
    fn short_ticks_accumulate() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.tick(start + Duration::from_micros(400)), 0);
        assert_eq!(clock.tick(start + Duration::from_micros(800)), 0);
        assert_eq!(clock.tick(start + Duration::from_micros(1_200)), 1);
    }

    #[test]
    fn until_next_counts_from_last_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let frame = Duration::from_millis(16);
        clock.tick(start + Duration::from_micros(10_500));
        assert_eq!(
            clock.until_next(frame, start + Duration::from_micros(12_000)),
            Duration::from_millis(14)
        );
        assert_eq!(
            clock.until_next(frame, start + Duration::from_millis(40)),
            Duration::ZERO
        );
    }
}
