//! Expandable container widget implementation.
//!
//! This module provides [`ExpandableContainer`], a container that animates
//! between a collapsed (zero-size) and expanded (natural-size) state along
//! one axis while its children slide with it.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use expandable_layout::layout::BoxLayout;
//! use expandable_layout::widget::Widget;
//! use expandable_layout::widgets::{ExpandableContainer, ExpansionStatus, Spacer};
//!
//! let mut panel = ExpandableContainer::new(BoxLayout::vertical());
//! panel.add_child(Spacer::new(120.0, 100.0));
//!
//! panel.collapse();
//! assert_eq!(panel.current_status(), ExpansionStatus::Collapsing);
//!
//! // The host delivers frames until the animation settles.
//! while panel.is_animating() {
//!     panel.advance(Duration::from_millis(16));
//! }
//! assert_eq!(panel.expansion(), 0.0);
//! assert!(!panel.is_visible());
//! ```

use std::sync::Arc;
use std::time::Duration;

use expandable_layout_core::logging::{span_names, targets};
use expandable_layout_core::{Error, PerfSpan, Result};

use super::listener::{ExpandableListener, ExpansionStatus, ListenerEvent, ListenerSlot};
use crate::animation::{AnimatorEvent, Interpolator, ValueAnimator};
use crate::config::ExpandableConfig;
use crate::geometry::{Orientation, Rect, Size};
use crate::layout::ContainerLayout;
use crate::widget::{Visibility, Widget, WidgetBase};

/// Fully collapsed.
const COLLAPSED: f32 = 0.0;
/// Fully expanded.
const EXPANDED: f32 = 1.0;

/// A container whose size along one axis animates between zero and its
/// natural size.
///
/// The container delegates child arrangement to a [`ContainerLayout`] and
/// only alters the measure step: the natural size along the active axis is
/// scaled by the current expansion fraction, and every child is translated
/// towards the collapsed edge by the hidden amount times the displacement
/// factor, so content slides out of view rather than being clipped in
/// place.
///
/// # Animation
///
/// [`expand`](Self::expand), [`collapse`](Self::collapse) and
/// [`toggle`](Self::toggle) return immediately. The transition is driven by
/// the host calling [`advance`](Self::advance) once per frame. At most one
/// animation exists at a time; a new request cancels the running one, whose
/// end callbacks then never fire.
///
/// # Listener
///
/// A single [`ExpandableListener`] may be installed. It is held weakly: the
/// caller keeps it alive, and once dropped the container stops reporting.
pub struct ExpandableContainer {
    /// Widget base.
    base: WidgetBase,

    /// Child widgets, arranged by `layout`.
    children: Vec<Box<dyn Widget>>,

    /// Host arrangement logic.
    layout: Box<dyn ContainerLayout>,

    /// Axis that collapses.
    orientation: Orientation,

    /// Current expansion fraction in `[0, 1]`.
    expansion: f32,

    /// Fraction of the hidden extent by which children are shifted.
    displacement: f32,

    /// Animation length in milliseconds.
    animation_duration: u64,

    /// Curve used by the next animation.
    interpolator: Interpolator,

    /// Size reported by `layout` in the last measure pass.
    natural_size: Size,

    /// Optional observer.
    listener: ListenerSlot,

    /// The in-flight animation, if any.
    animator: Option<ValueAnimator>,

    current_status: ExpansionStatus,
}

impl ExpandableContainer {
    /// Default animation length in milliseconds.
    pub const DEFAULT_ANIMATION_DURATION: u64 = 200;

    /// Create an expanded, vertical container arranging children with `layout`.
    pub fn new(layout: impl ContainerLayout + 'static) -> Self {
        Self {
            base: WidgetBase::new(),
            children: Vec::new(),
            layout: Box::new(layout),
            orientation: Orientation::Vertical,
            expansion: EXPANDED,
            displacement: 1.0,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            interpolator: Interpolator::fast_out_slow_in(),
            natural_size: Size::ZERO,
            listener: ListenerSlot::default(),
            animator: None,
            current_status: ExpansionStatus::Idle,
        }
    }

    /// Create a container from a validated configuration.
    pub fn from_config(
        config: &ExpandableConfig,
        layout: impl ContainerLayout + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let mut container = Self::new(layout);
        container.orientation = config.orientation;
        container.displacement = config.displacement;
        container.animation_duration = config.animation_duration_ms;
        container.interpolator = config.interpolator.into();
        if !config.expanded {
            container.expansion = COLLAPSED;
            container.base.set_visibility(Visibility::Invisible);
        }
        Ok(container)
    }

    /// Set the debug name using builder pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.set_name(name);
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Add a child widget. Returns its index.
    pub fn add_child(&mut self, widget: impl Widget + 'static) -> usize {
        self.children.push(Box::new(widget));
        self.base.request_layout();
        self.children.len() - 1
    }

    /// Number of direct children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Get a child by index.
    pub fn child_at(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|child| &**child)
    }

    /// Get a mutable reference to a child by index.
    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.children.get_mut(index).map(|child| &mut **child)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the container is fully expanded.
    ///
    /// True only when the expansion is exactly `1.0`; a container part way
    /// through an animation is not expanded.
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expansion == EXPANDED
    }

    /// Current expansion fraction in `[0, 1]`.
    #[inline]
    pub fn expansion(&self) -> f32 {
        self.expansion
    }

    /// What the container is doing right now.
    #[inline]
    pub fn current_status(&self) -> ExpansionStatus {
        self.current_status
    }

    /// Whether an animation is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(ValueAnimator::is_running)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Length of future animations, in milliseconds.
    #[inline]
    pub fn animation_duration(&self) -> u64 {
        self.animation_duration
    }

    /// Set the length of future animations, in milliseconds.
    ///
    /// A running animation keeps its original duration.
    pub fn set_animation_duration(&mut self, millis: u64) {
        self.animation_duration = millis;
    }

    /// Curve used by future animations.
    #[inline]
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Set the curve used by future animations.
    pub fn set_interpolator(&mut self, interpolator: impl Into<Interpolator>) {
        self.interpolator = interpolator.into();
    }

    /// Axis that collapses.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the axis that collapses.
    ///
    /// Child translations are reset and a layout pass is requested.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        for child in &mut self.children {
            child.widget_base_mut().set_translation(Default::default());
        }
        self.base.request_layout();
    }

    /// Fraction of the hidden extent by which children slide.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Set the displacement factor.
    ///
    /// `0.0` clips children in place; `1.0` slides them by the full hidden
    /// extent. Negative or non-finite values are rejected.
    pub fn set_displacement(&mut self, displacement: f32) -> Result<()> {
        if !displacement.is_finite() || displacement < 0.0 {
            return Err(Error::invalid_displacement(displacement));
        }
        if self.displacement != displacement {
            self.displacement = displacement;
            self.base.request_layout();
        }
        Ok(())
    }

    // =========================================================================
    // Listener
    // =========================================================================

    /// Install the listener, replacing any previous one.
    ///
    /// Only a weak reference is kept.
    pub fn set_animation_listener<L: ExpandableListener + 'static>(&mut self, listener: &Arc<L>) {
        self.listener.set(listener);
    }

    /// Remove the listener.
    pub fn clear_animation_listener(&mut self) {
        self.listener.clear();
    }

    // =========================================================================
    // Expand / Collapse
    // =========================================================================

    /// Collapse if fully expanded, otherwise expand.
    ///
    /// Mid-animation the container is never fully expanded, so toggling
    /// during a collapse reverses it into an expand.
    pub fn toggle(&mut self) {
        if self.is_expanded() {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Animate to fully expanded.
    ///
    /// Does nothing if already expanded or already expanding.
    pub fn expand(&mut self) {
        self.set_expanded(true, true);
    }

    /// Animate to fully collapsed.
    ///
    /// Does nothing if already collapsed or already collapsing.
    pub fn collapse(&mut self) {
        self.set_expanded(false, true);
    }

    /// Move towards the expanded or collapsed extreme.
    ///
    /// With `animate` the change runs as an animation with listener
    /// callbacks, exactly like [`expand`](Self::expand) and
    /// [`collapse`](Self::collapse). Without it the expansion jumps to the
    /// target silently: no status change and no callbacks. Requests that are
    /// already satisfied, or already underway in the same direction, are
    /// ignored.
    pub fn set_expanded(&mut self, expanded: bool, animate: bool) {
        let satisfied = if expanded {
            self.current_status == ExpansionStatus::Expanding || self.expansion == EXPANDED
        } else {
            self.current_status == ExpansionStatus::Collapsing || self.expansion == COLLAPSED
        };
        if satisfied {
            tracing::debug!(
                target: targets::ANIMATION,
                expanded,
                expansion = self.expansion,
                status = ?self.current_status,
                "request ignored"
            );
            return;
        }

        let target = if expanded { EXPANDED } else { COLLAPSED };
        if animate {
            self.animate_expansion(target);
        } else {
            self.set_expansion(target);
        }
    }

    /// Jump to an arbitrary expansion fraction without animating.
    ///
    /// No status change or callbacks occur. A running animation is not
    /// stopped and will overwrite the value on its next frame.
    pub fn set_expansion_immediate(&mut self, expansion: f32) -> Result<()> {
        if !expansion.is_finite() || !(COLLAPSED..=EXPANDED).contains(&expansion) {
            return Err(Error::invalid_expansion(expansion));
        }
        self.set_expansion(expansion);
        Ok(())
    }

    /// Deliver one frame of `delta` to the running animation.
    ///
    /// Does nothing when no animation is in flight.
    pub fn advance(&mut self, delta: Duration) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };
        let _span =
            tracing::trace_span!(target: targets::ANIMATION, "advance", name = span_names::FRAME)
                .entered();
        let target = animator.to();
        let events = animator.advance(delta);

        for event in events {
            self.on_animator_event(event, target);
        }

        if self
            .animator
            .as_ref()
            .is_some_and(|animator| animator.state().is_terminal())
        {
            self.animator = None;
        }
    }

    /// Store a new expansion and refresh visibility.
    fn set_expansion(&mut self, expansion: f32) {
        if expansion.is_nan() {
            tracing::warn!(
                target: targets::ANIMATION,
                kept = self.expansion,
                "interpolator produced NaN, keeping previous expansion"
            );
            return;
        }
        let expansion = expansion.clamp(COLLAPSED, EXPANDED);
        if self.expansion == expansion {
            return;
        }
        self.expansion = expansion;
        self.base
            .set_visibility(Visibility::from_visible(expansion != COLLAPSED));
        self.base.request_layout();
    }

    /// Replace any running animation with one heading to `target`.
    fn animate_expansion(&mut self, target: f32) {
        if let Some(mut previous) = self.animator.take() {
            if let Some(event) = previous.cancel() {
                tracing::debug!(
                    target: targets::ANIMATION,
                    from = previous.from(),
                    to = previous.to(),
                    at = self.expansion,
                    "animation canceled"
                );
                self.on_animator_event(event, previous.to());
            }
        }

        let mut animator = ValueAnimator::new(self.expansion, target)
            .with_duration(Duration::from_millis(self.animation_duration))
            .with_interpolator(self.interpolator.clone());
        tracing::debug!(
            target: targets::ANIMATION,
            from = self.expansion,
            to = target,
            duration_ms = self.animation_duration,
            "animation started"
        );

        let events = animator.start();
        self.animator = Some(animator);
        for event in events {
            self.on_animator_event(event, target);
        }
    }

    fn on_animator_event(&mut self, event: AnimatorEvent, target: f32) {
        match event {
            AnimatorEvent::Start => {
                self.report(ListenerEvent::AnimationStart);
                self.current_status = if target <= COLLAPSED {
                    self.report(ListenerEvent::PreClose);
                    ExpansionStatus::Collapsing
                } else {
                    self.report(ListenerEvent::PreOpen);
                    ExpansionStatus::Expanding
                };
            }
            AnimatorEvent::Update(value) => {
                tracing::trace!(target: targets::ANIMATION, value, "tick");
                self.set_expansion(value);
            }
            AnimatorEvent::End => {
                tracing::debug!(
                    target: targets::ANIMATION,
                    status = ?self.current_status,
                    expansion = self.expansion,
                    "animation finished"
                );
                self.report(ListenerEvent::AnimationEnd);
                if self.current_status == ExpansionStatus::Expanding {
                    self.report(ListenerEvent::Opened);
                } else {
                    self.report(ListenerEvent::Closed);
                }
                self.current_status = ExpansionStatus::Idle;
            }
            AnimatorEvent::Cancel => {
                self.current_status = ExpansionStatus::Idle;
            }
        }
    }

    fn report(&self, event: ListenerEvent) {
        self.listener.report(event, self.current_status);
    }
}

impl std::fmt::Debug for ExpandableContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandableContainer")
            .field("base", &self.base)
            .field("children", &self.children.len())
            .field("layout", &self.layout)
            .field("orientation", &self.orientation)
            .field("expansion", &self.expansion)
            .field("natural_size", &self.natural_size)
            .field("displacement", &self.displacement)
            .field("animation_duration", &self.animation_duration)
            .field("listener", &self.listener)
            .field("animator", &self.animator)
            .field("current_status", &self.current_status)
            .finish_non_exhaustive()
    }
}

impl Widget for ExpandableContainer {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Measures the children at their natural size, then hides
    /// `delta = extent - round(extent * expansion)` along the active axis and
    /// shifts every child by `-delta * displacement`.
    fn measure(&mut self, available: Size) -> Size {
        let _perf = PerfSpan::new(span_names::MEASURE);
        let natural = self.layout.measure(&mut self.children, available);
        self.natural_size = natural;
        let axis = self.orientation;
        let extent = axis.main(natural);

        // Content on the cross axis keeps a zero-height container visible.
        let hidden = self.expansion == COLLAPSED && extent == 0.0;
        self.base.set_visibility(Visibility::from_visible(!hidden));

        let expansion_delta = extent - (extent * self.expansion).round();

        if self.displacement > 0.0 {
            let shift = -(expansion_delta * self.displacement);
            for child in &mut self.children {
                let base = child.widget_base_mut();
                match axis {
                    Orientation::Vertical => base.set_translation_y(shift),
                    Orientation::Horizontal => base.set_translation_x(shift),
                }
            }
        }

        let measured = match axis {
            Orientation::Vertical => Size::new(natural.width, natural.height - expansion_delta),
            Orientation::Horizontal => Size::new(natural.width - expansion_delta, natural.height),
        };
        tracing::trace!(
            target: targets::LAYOUT,
            ?natural,
            ?measured,
            expansion = self.expansion,
            "measured"
        );
        self.base.set_measured_size(measured);
        measured
    }

    /// Children are laid out against the natural extent along the active
    /// axis so a partly collapsed container slides them instead of
    /// squashing them.
    fn arrange(&mut self, rect: Rect) {
        self.base.set_geometry(rect);

        let axis = self.orientation;
        let main = axis.main(rect.size).max(axis.main(self.natural_size));
        let bounds = Rect {
            origin: rect.origin,
            size: axis.size(main, axis.cross_of(rect.size)),
        };
        self.layout.arrange(&mut self.children, bounds);
    }
}

static_assertions::assert_impl_all!(ExpandableContainer: Send, Sync);
