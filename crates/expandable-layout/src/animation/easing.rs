//! Easing curves for expansion animations.
//!
//! An easing curve maps linear time progress (0.0 to 1.0) to animation
//! progress. Two families are provided: the closed-form [`Easing`] presets
//! and the CSS-style [`CubicBezier`] timing curve used by the default
//! fast-out-slow-in motion.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Closed-form easing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in.
    EaseInCubic,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Cubic ease-in-out.
    EaseInOutCubic,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
}

impl Easing {
    /// Apply the curve to an unclamped progress value.
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInSine => 1.0 - ((t * PI) / 2.0).cos(),
            Easing::EaseOutSine => ((t * PI) / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Apply an easing preset to a progress value.
///
/// `t` is clamped to `[0, 1]` first.
///
/// # Example
///
/// ```
/// use expandable_layout::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    easing.apply(t.clamp(0.0, 1.0))
}

/// Interpolate between two values using an easing preset.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// A cubic Bézier timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
///
/// Equivalent to CSS `cubic-bezier(x1, y1, x2, y2)`. `x1` and `x2` must lie
/// in `[0, 1]` so that the curve is a function of time; they are clamped on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Material "standard" motion: quick departure, long gentle arrival.
    pub const FAST_OUT_SLOW_IN: Self = Self {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Decelerating motion.
    pub const LINEAR_OUT_SLOW_IN: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Accelerating motion.
    pub const FAST_OUT_LINEAR_IN: Self = Self {
        x1: 0.4,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 32;
    const EPSILON: f32 = 1e-6;

    /// Create a timing curve from its two control points.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// The control points as `(x1, y1, x2, y2)`.
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Evaluate the curve at time progress `t` (clamped to `[0, 1]`).
    pub fn transform(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_parameter(t);
        Self::component(s, self.y1, self.y2)
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    fn solve_parameter(&self, x: f32) -> f32 {
        // Newton-Raphson converges quickly for well-behaved curves.
        let mut s = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = Self::component(s, self.x1, self.x2) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let slope = Self::derivative(s, self.x1, self.x2);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= err / slope;
        }

        // Flat regions: fall back to bisection, x(s) is monotonic on [0, 1].
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let value = Self::component(s, self.x1, self.x2);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// One coordinate of the curve at parameter `s`.
    #[inline]
    fn component(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    #[inline]
    fn derivative(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::FAST_OUT_SLOW_IN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_linear() {
        assert_eq!(ease(Easing::Linear, 0.0), 0.0);
        assert_eq!(ease(Easing::Linear, 0.5), 0.5);
        assert_eq!(ease(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert_eq!(ease(Easing::EaseInOut, 0.0), 0.0);
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
        assert_eq!(ease(Easing::EaseInOut, 1.0), 1.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 1.0, 0.0, 0.25), 0.75);
        assert_eq!(lerp_eased(Easing::Linear, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_sine_boundaries() {
        for easing in [Easing::EaseInSine, Easing::EaseOutSine, Easing::EaseInOutSine] {
            assert!(approx(ease(easing, 0.0), 0.0));
            assert!(approx(ease(easing, 1.0), 1.0));
        }
    }

    #[test]
    fn test_bezier_endpoints() {
        let curve = CubicBezier::FAST_OUT_SLOW_IN;
        assert_eq!(curve.transform(0.0), 0.0);
        assert_eq!(curve.transform(1.0), 1.0);
        assert_eq!(curve.transform(-1.0), 0.0);
        assert_eq!(curve.transform(2.0), 1.0);
    }

    #[test]
    fn test_bezier_linear_control_points() {
        // Control points on the diagonal give the identity curve.
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(approx(curve.transform(t), t), "t = {t}");
        }
    }

    #[test]
    fn test_fast_out_slow_in_shape() {
        let curve = CubicBezier::FAST_OUT_SLOW_IN;
        // Ahead of linear past the start, and monotonic.
        assert!(curve.transform(0.5) > 0.5);
        let mut previous = 0.0;
        for i in 1..=20 {
            let value = curve.transform(i as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_bezier_clamps_x_control_points() {
        let curve = CubicBezier::new(-1.0, 0.0, 2.0, 1.0);
        let (x1, _, x2, _) = curve.control_points();
        assert_eq!(x1, 0.0);
        assert_eq!(x2, 1.0);
    }
}
