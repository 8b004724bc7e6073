//! Easing curves mapping animation progress [0, 1] onto [0, 1]

pub use tocnav_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the curve to `t`. Input is clamped to [0, 1] first, so a frame
    /// that overshoots the duration never overshoots the target.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Instant => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => ease_out(t, 3),
            EasingType::Quintic => ease_out(t, 5),
        }
    }
}

/// Power ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 3] = [EasingType::Linear, EasingType::Cubic, EasingType::Quintic];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
        }
        assert!((EasingType::Instant.apply(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_matches_formula() {
        // 1 - 0.5^3
        assert!((EasingType::Cubic.apply(0.5) - 0.875).abs() < 1e-9);
        // 1 - 0.75^3
        assert!((EasingType::Cubic.apply(0.25) - 0.578125).abs() < 1e-9);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        assert!((EasingType::Cubic.apply(1.4) - 1.0).abs() < 1e-9);
        assert!(EasingType::Cubic.apply(-0.2).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }
}
