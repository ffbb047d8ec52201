//! Pluggable time-to-progress curves.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::easing::{CubicBezier, Easing, ease};

/// Maps normalized time progress to normalized value progress.
///
/// The default is [`CubicBezier::FAST_OUT_SLOW_IN`].
///
/// # Example
///
/// ```
/// use expandable_layout::animation::{Easing, Interpolator};
///
/// let linear = Interpolator::Easing(Easing::Linear);
/// assert_eq!(linear.transform(0.25), 0.25);
///
/// let stepped = Interpolator::custom(|t| if t < 0.5 { 0.0 } else { 1.0 });
/// assert_eq!(stepped.transform(0.75), 1.0);
/// ```
#[derive(Clone)]
pub enum Interpolator {
    /// A closed-form easing preset.
    Easing(Easing),
    /// A cubic Bézier timing curve.
    Bezier(CubicBezier),
    /// A caller-supplied curve.
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Interpolator {
    /// Material fast-out-slow-in motion.
    pub fn fast_out_slow_in() -> Self {
        Self::Bezier(CubicBezier::FAST_OUT_SLOW_IN)
    }

    /// Wrap a closure as an interpolator.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Map time progress `t` to value progress.
    ///
    /// `t` is clamped to `[0, 1]`. Custom curves may return values outside
    /// that range (overshoot); the result is passed through unchanged.
    pub fn transform(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Easing(easing) => ease(*easing, t),
            Self::Bezier(curve) => curve.transform(t),
            Self::Custom(f) => f(t),
        }
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::fast_out_slow_in()
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easing(easing) => f.debug_tuple("Easing").field(easing).finish(),
            Self::Bezier(curve) => f.debug_tuple("Bezier").field(curve).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Easing> for Interpolator {
    fn from(easing: Easing) -> Self {
        Self::Easing(easing)
    }
}

impl From<CubicBezier> for Interpolator {
    fn from(curve: CubicBezier) -> Self {
        Self::Bezier(curve)
    }
}

/// The serializable subset of [`Interpolator`], used by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolatorKind {
    /// [`CubicBezier::FAST_OUT_SLOW_IN`].
    #[default]
    FastOutSlowIn,
    /// [`CubicBezier::LINEAR_OUT_SLOW_IN`].
    LinearOutSlowIn,
    /// [`CubicBezier::FAST_OUT_LINEAR_IN`].
    FastOutLinearIn,
    /// An easing preset.
    Easing(Easing),
    /// Explicit Bézier control points.
    CubicBezier(CubicBezier),
}

impl From<InterpolatorKind> for Interpolator {
    fn from(kind: InterpolatorKind) -> Self {
        match kind {
            InterpolatorKind::FastOutSlowIn => Self::Bezier(CubicBezier::FAST_OUT_SLOW_IN),
            InterpolatorKind::LinearOutSlowIn => Self::Bezier(CubicBezier::LINEAR_OUT_SLOW_IN),
            InterpolatorKind::FastOutLinearIn => Self::Bezier(CubicBezier::FAST_OUT_LINEAR_IN),
            InterpolatorKind::Easing(easing) => Self::Easing(easing),
            InterpolatorKind::CubicBezier(curve) => {
                let (x1, y1, x2, y2) = curve.control_points();
                Self::Bezier(CubicBezier::new(x1, y1, x2, y2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fast_out_slow_in() {
        let interpolator = Interpolator::default();
        let reference = CubicBezier::FAST_OUT_SLOW_IN;
        for i in 0..=4 {
            let t = i as f32 / 4.0;
            assert_eq!(interpolator.transform(t), reference.transform(t));
        }
    }

    #[test]
    fn test_custom_receives_clamped_input() {
        let identity = Interpolator::custom(|t| t);
        assert_eq!(identity.transform(-3.0), 0.0);
        assert_eq!(identity.transform(3.0), 1.0);
    }

    #[test]
    fn test_custom_may_overshoot() {
        let overshoot = Interpolator::custom(|t| t * 1.2);
        assert!(overshoot.transform(1.0) > 1.0);
    }

    #[test]
    fn test_debug_hides_closure() {
        let custom = Interpolator::custom(|t| t);
        assert_eq!(format!("{custom:?}"), "Custom(..)");
        let easing = Interpolator::from(Easing::EaseIn);
        assert_eq!(format!("{easing:?}"), "Easing(EaseIn)");
    }

    #[test]
    fn test_kind_conversion() {
        let interpolator: Interpolator = InterpolatorKind::Easing(Easing::Linear).into();
        assert_eq!(interpolator.transform(0.3), 0.3);

        let interpolator: Interpolator = InterpolatorKind::FastOutLinearIn.into();
        assert!(interpolator.transform(0.5) < 0.5);
    }
}
