//! Derived values on top of the scroll configuration from tocnav-core

use std::time::Duration;

pub use tocnav_core::{EasingType, ScrollConfig, SettleMode, MIN_SETTLE_FRAMES};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;

    /// Frames to wait before the first layout measurement, never fewer
    /// than [`MIN_SETTLE_FRAMES`]
    fn min_settle_frames(&self) -> u32;

    /// Frames after which settling gives up waiting for a stable layout
    fn settle_frame_limit(&self) -> u32;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_secs_f64(1.0 / self.animation_fps as f64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0 && self.easing != EasingType::Instant
    }

    #[inline]
    fn min_settle_frames(&self) -> u32 {
        self.settle_frames.max(MIN_SETTLE_FRAMES)
    }

    fn settle_frame_limit(&self) -> u32 {
        match self.settle {
            SettleMode::FixedFrames => self.min_settle_frames(),
            SettleMode::UntilStable => self.max_settle_frames.max(self.min_settle_frames()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_duration() {
        let config = ScrollConfig {
            animation_duration_ms: 300,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.easing = EasingType::Instant;
        assert!(!config.is_smooth());

        config.easing = EasingType::Cubic;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());

        config.animation_duration_ms = 300;
        config.smooth_enabled = false;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_settle_limits() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.min_settle_frames(), 3);
        assert_eq!(config.settle_frame_limit(), 3);

        config.settle = SettleMode::UntilStable;
        assert_eq!(config.settle_frame_limit(), 30);

        config.max_settle_frames = 1;
        assert_eq!(config.settle_frame_limit(), 3);

        config.settle_frames = 0;
        assert_eq!(config.min_settle_frames(), 3);

        config.settle_frames = 5;
        assert_eq!(config.min_settle_frames(), 5);
    }
}
