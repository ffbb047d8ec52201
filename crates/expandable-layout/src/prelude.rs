//! Prelude module for Expandable Layout.
//!
//! ```
//! use expandable_layout::prelude::*;
//! ```

// ============================================================================
// Errors and Timing
// ============================================================================

pub use crate::{Error, FrameClock, Result};

// ============================================================================
// Geometry
// ============================================================================

pub use crate::geometry::{Orientation, Point, Rect, Size};

// ============================================================================
// Animation
// ============================================================================

pub use crate::animation::{CubicBezier, Easing, Interpolator, InterpolatorKind};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{Visibility, Widget, WidgetBase};

// ============================================================================
// Layouts
// ============================================================================

pub use crate::layout::{BoxLayout, ContainerLayout, ContentMargins, StackLayout};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::config::ExpandableConfig;
pub use crate::widgets::{
    ExpandableContainer, ExpandableListener, ExpansionStatus, ListenerEvent, Spacer,
};
