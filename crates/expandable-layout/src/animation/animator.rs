//! Value animation handles.
//!
//! A [`ValueAnimator`] interpolates a single `f32` between two values over a
//! fixed duration. It does not own a timer: the owner feeds it frame deltas
//! through [`ValueAnimator::advance`] and dispatches the [`AnimatorEvent`]s
//! it returns, all on the same thread.

use std::time::Duration;

use super::interpolator::Interpolator;

/// Lifecycle state of a [`ValueAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Created but not yet started.
    #[default]
    Idle,
    /// Started and receiving frames.
    Running,
    /// Reached its end value.
    Finished,
    /// Stopped before reaching its end value.
    Canceled,
}

impl AnimatorState {
    /// Whether the animator has stopped for good.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Canceled)
    }
}

/// Lifecycle and tick notifications produced by a [`ValueAnimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorEvent {
    /// The animation started.
    Start,
    /// A frame produced a new animated value.
    Update(f32),
    /// The animation ran to completion.
    End,
    /// The animation was canceled before completion.
    Cancel,
}

/// An interpolation session from one value to another.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use expandable_layout::animation::{AnimatorEvent, Easing, ValueAnimator};
///
/// let mut animator = ValueAnimator::new(1.0, 0.0)
///     .with_duration(Duration::from_millis(200))
///     .with_interpolator(Easing::Linear);
///
/// assert_eq!(animator.start(), vec![AnimatorEvent::Start]);
/// assert_eq!(
///     animator.advance(Duration::from_millis(50)),
///     vec![AnimatorEvent::Update(0.75)]
/// );
/// assert_eq!(
///     animator.advance(Duration::from_millis(150)),
///     vec![AnimatorEvent::Update(0.0), AnimatorEvent::End]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    /// Start value.
    from: f32,
    /// End value.
    to: f32,
    /// Total duration.
    duration: Duration,
    /// Time-to-progress curve.
    interpolator: Interpolator,
    /// Time accumulated since start.
    elapsed: Duration,
    /// Most recent animated value.
    value: f32,
    state: AnimatorState,
}

impl ValueAnimator {
    /// Default duration, matching the platform's short animation time.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Create an animator from `from` to `to`.
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            duration: Self::DEFAULT_DURATION,
            interpolator: Interpolator::default(),
            elapsed: Duration::ZERO,
            value: from,
            state: AnimatorState::Idle,
        }
    }

    /// Set the duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the interpolator using builder pattern.
    pub fn with_interpolator(mut self, interpolator: impl Into<Interpolator>) -> Self {
        self.interpolator = interpolator.into();
        self
    }

    /// Start value.
    #[inline]
    pub fn from(&self) -> f32 {
        self.from
    }

    /// End value.
    #[inline]
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Most recent animated value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Whether the animator is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Linear time progress in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.state == AnimatorState::Idle { 0.0 } else { 1.0 };
        }
        let ratio = self.elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64;
        ratio.min(1.0) as f32
    }

    /// Start the animation.
    ///
    /// An animator runs once; starting it again after it has started has no
    /// effect and returns no events.
    pub fn start(&mut self) -> Vec<AnimatorEvent> {
        if self.state != AnimatorState::Idle {
            return Vec::new();
        }
        self.state = AnimatorState::Running;
        self.elapsed = Duration::ZERO;
        self.value = self.from;
        vec![AnimatorEvent::Start]
    }

    /// Advance the animation by one frame of length `delta`.
    ///
    /// Returns an `Update` with the new value, followed by `End` on the frame
    /// that reaches the duration. The final value is exactly `to`. Returns no
    /// events unless the animator is running.
    pub fn advance(&mut self, delta: Duration) -> Vec<AnimatorEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let fraction = self.fraction();

        if fraction >= 1.0 {
            self.value = self.to;
            self.state = AnimatorState::Finished;
            return vec![AnimatorEvent::Update(self.value), AnimatorEvent::End];
        }

        let progress = self.interpolator.transform(fraction);
        self.value = self.from + (self.to - self.from) * progress;
        vec![AnimatorEvent::Update(self.value)]
    }

    /// Cancel the animation.
    ///
    /// Returns `Cancel` if the animator was running, `None` otherwise. The
    /// value stays where the last frame left it.
    pub fn cancel(&mut self) -> Option<AnimatorEvent> {
        if !self.is_running() {
            return None;
        }
        self.state = AnimatorState::Canceled;
        Some(AnimatorEvent::Cancel)
    }
}
