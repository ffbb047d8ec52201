//! Animation support for Expandable Layout.
//!
//! This module provides easing curves, the pluggable [`Interpolator`], and
//! the [`ValueAnimator`] handle that drives expansion changes frame by frame.
//!
//! # Example
//!
//! ```
//! use expandable_layout::animation::{Easing, Interpolator, ease};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//!
//! let curve = Interpolator::fast_out_slow_in();
//! assert!(curve.transform(0.5) > 0.5);
//! ```

mod animator;
mod easing;
mod interpolator;

pub use animator::{AnimatorEvent, AnimatorState, ValueAnimator};
pub use easing::{CubicBezier, Easing, ease, lerp_eased};
pub use interpolator::{Interpolator, InterpolatorKind};
