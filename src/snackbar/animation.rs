// SPDX-License-Identifier: MPL-2.0
//! Animation presets and timing curves for snackbar transitions.
//!
//! Two presets exist: `Spring` slides the view in from the anchored edge
//! with a damped-oscillator motion, `Fade` keeps the view at its resting
//! position and only animates opacity. The spring parameters mirror the
//! damping-ratio / initial-velocity pair familiar from mobile toolkits.

use serde::{Deserialize, Serialize};

/// How the snackbar transitions on-screen and off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationType {
    /// Slide from the anchored edge with damped-spring motion.
    #[default]
    Spring,
    /// Opacity-only transition; position constraints stay at their final
    /// values for the whole animation.
    Fade,
}

/// Which screen edge the snackbar is anchored to and slides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    #[default]
    Top,
    Bottom,
}

/// Timing-curve option applied to a transition. Present and dismiss
/// transitions carry separate curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingCurve {
    /// Maps normalized time `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseIn => t * t,
            EasingCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Natural frequency of the spring, chosen so the response settles within
/// the normalized duration for the default damping.
const NATURAL_FREQUENCY: f32 = 12.0;

/// Lowest accepted damping ratio; below this the closed form rings far past
/// the normalized duration.
const MIN_DAMPING: f32 = 0.05;

/// Closed-form damped harmonic oscillator, sampled over normalized time.
///
/// `damping` is the damping ratio in `(0, 1]` (1 = critically damped, no
/// overshoot) and `velocity` the initial velocity in units of full travel
/// per normalized second. Progress may overshoot 1.0 mid-flight for
/// under-damped springs; it is exactly 0 at `t = 0` and clamps to 1 once
/// `t` reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    damping: f32,
    velocity: f32,
}

impl SpringCurve {
    #[must_use]
    pub fn new(damping: f32, velocity: f32) -> Self {
        Self {
            damping: damping.clamp(MIN_DAMPING, 1.0),
            velocity,
        }
    }

    /// Samples spring progress at normalized time `t`.
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping;
        let omega = NATURAL_FREQUENCY;
        let decay = (-zeta * omega * t).exp();

        if zeta < 1.0 {
            // Under-damped: decaying cosine with a sine term matching the
            // initial velocity.
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (zeta * omega - self.velocity) / omega_d;
            1.0 - decay * ((omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            // Critically damped: no oscillation.
            1.0 - decay * (1.0 + (omega - self.velocity) * t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_curves_are_anchored_at_endpoints() {
        for curve in [
            EasingCurve::Linear,
            EasingCurve::EaseIn,
            EasingCurve::EaseOut,
            EasingCurve::EaseInOut,
        ] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} start");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} end");
        }
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(EasingCurve::EaseIn.apply(-0.5), 0.0);
        assert_eq!(EasingCurve::EaseOut.apply(1.5), 1.0);
    }

    #[test]
    fn ease_in_starts_slower_than_linear() {
        assert!(EasingCurve::EaseIn.apply(0.25) < EasingCurve::Linear.apply(0.25));
    }

    #[test]
    fn ease_out_starts_faster_than_linear() {
        assert!(EasingCurve::EaseOut.apply(0.25) > EasingCurve::Linear.apply(0.25));
    }

    #[test]
    fn spring_starts_at_zero_and_settles_at_one() {
        let spring = SpringCurve::new(0.8, 1.0);
        assert_eq!(spring.sample(0.0), 0.0);
        assert_eq!(spring.sample(1.0), 1.0);
        // Close to settled just before the end of the normalized window.
        assert!((spring.sample(0.99) - 1.0).abs() < 0.01);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let spring = SpringCurve::new(0.2, 1.0);
        let peak = (1..100)
            .map(|i| spring.sample(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        let spring = SpringCurve::new(1.0, 0.0);
        for i in 0..=100 {
            let value = spring.sample(i as f32 / 100.0);
            assert!(value <= 1.0 + 1e-4, "overshoot at step {i}: {value}");
        }
    }

    #[test]
    fn damping_is_clamped_into_valid_range() {
        // Zero damping would never settle; the constructor clamps it.
        let spring = SpringCurve::new(0.0, 0.0);
        assert_eq!(spring.sample(1.0), 1.0);
    }

    #[test]
    fn spring_progress_is_monotonic_before_first_peak() {
        let spring = SpringCurve::new(0.8, 1.0);
        let early: Vec<f32> = (0..=20).map(|i| spring.sample(i as f32 / 100.0)).collect();
        for pair in early.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}
