//! Time helpers for frame-driven animation
//!
//! Elapsed time is accumulated from per-frame deltas measured on the wall
//! clock, so the animation keeps running when a host pauses or rescales its
//! own simulation time.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) after `elapsed` of `duration`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Measures real time between consecutive host frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Time since the previous call. The first call returns zero.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(1.0, 0.5, 0.0) - 1.0).abs() < 1e-9);
        assert!((lerp(1.0, 0.5, 0.5) - 0.75).abs() < 1e-9);
        assert!((lerp(1.0, 0.5, 1.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress() {
        let duration = Duration::from_millis(300);
        assert!((progress(Duration::from_millis(150), duration) - 0.5).abs() < 1e-9);
        assert!((progress(Duration::from_millis(450), duration) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_clock_deltas() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick_at(start), Duration::ZERO);
        assert_eq!(clock.tick_at(start + Duration::from_millis(16)), Duration::from_millis(16));
        assert_eq!(clock.tick_at(start + Duration::from_millis(40)), Duration::from_millis(24));

        clock.reset();
        assert_eq!(clock.tick_at(start + Duration::from_millis(100)), Duration::ZERO);
    }
}
