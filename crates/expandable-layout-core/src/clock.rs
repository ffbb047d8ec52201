//! Frame timing for hosts that drive animations.
//!
//! Animations in Expandable Layout are advanced by explicit frame deltas. A
//! host event loop owns a [`FrameClock`] and feeds the delta it returns for
//! each frame into the widgets it animates.

use std::time::{Duration, Instant};

/// Converts successive frame timestamps into frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame.
    last_frame: Option<Instant>,
    /// Upper bound applied to a single delta.
    max_delta: Option<Duration>,
    /// Number of frames observed.
    frame_count: u64,
}

impl FrameClock {
    /// Create a new frame clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap each delta at `max_delta`.
    ///
    /// Long stalls (a suspended window, a debugger break) otherwise make an
    /// animation jump straight to its end.
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Record a frame at `now` and return the time since the previous frame.
    ///
    /// The first frame returns [`Duration::ZERO`].
    pub fn tick(&mut self, now: Instant) -> Duration {
        let delta = match self.last_frame {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.frame_count += 1;

        let delta = match self.max_delta {
            Some(max) if delta > max => {
                crate::expand_debug!(?delta, ?max, "frame delta capped");
                max
            }
            _ => delta,
        };
        crate::expand_trace!(?delta, frame = self.frame_count, "frame");
        delta
    }

    /// Record a frame at the current instant.
    pub fn tick_now(&mut self) -> Duration {
        self.tick(Instant::now())
    }

    /// Number of frames recorded since creation or the last reset.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Forget the previous frame so the next tick starts from zero.
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.frame_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(Instant::now()), Duration::ZERO);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_successive_ticks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(start);
        assert_eq!(
            clock.tick(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
        assert_eq!(
            clock.tick(start + Duration::from_millis(40)),
            Duration::from_millis(24)
        );
    }

    #[test]
    fn test_max_delta() {
        let mut clock = FrameClock::new().with_max_delta(Duration::from_millis(50));
        let start = Instant::now();
        clock.tick(start);
        assert_eq!(
            clock.tick(start + Duration::from_secs(3)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(start);
        clock.reset();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick(start + Duration::from_secs(1)), Duration::ZERO);
    }
}
