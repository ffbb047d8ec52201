//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state every widget carries: its
//! measured size, assigned geometry, translation, visibility and whether it
//! has asked for a new layout pass.

use crate::geometry::{Point, Rect, Size};

/// Whether a widget is drawn.
///
/// An invisible widget still takes part in measurement and keeps its
/// geometry; it is only skipped when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// The widget is drawn.
    #[default]
    Visible,
    /// The widget is not drawn but still occupies layout space.
    Invisible,
}

impl Visibility {
    /// Visibility from a boolean flag.
    #[inline]
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Invisible }
    }
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```
/// use expandable_layout::geometry::Size;
/// use expandable_layout::widget::{Widget, WidgetBase};
///
/// struct Badge {
///     base: WidgetBase,
/// }
///
/// impl Widget for Badge {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn measure(&mut self, available: Size) -> Size {
///         let size = Size::new(24.0, 24.0).min(available);
///         self.base.set_measured_size(size);
///         size
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WidgetBase {
    /// Debug name.
    name: String,
    /// Size produced by the last measure pass.
    measured_size: Size,
    /// Position and size assigned by the parent.
    geometry: Rect,
    /// Render-time offset applied on top of the geometry.
    translation: Point,
    visibility: Visibility,
    /// Set when the widget needs to be measured and arranged again.
    layout_requested: bool,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a widget base with a debug name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get the widget's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the widget's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // =========================================================================
    // Measurement & Geometry
    // =========================================================================

    /// Size produced by the last measure pass.
    #[inline]
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// Record the result of a measure pass.
    pub fn set_measured_size(&mut self, size: Size) {
        self.measured_size = size;
    }

    /// Geometry assigned by the parent.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Assign the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    /// Render-time translation.
    #[inline]
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Set the render-time translation.
    pub fn set_translation(&mut self, translation: Point) {
        self.translation = translation;
    }

    /// Set only the horizontal translation.
    pub fn set_translation_x(&mut self, x: f32) {
        self.translation.x = x;
    }

    /// Set only the vertical translation.
    pub fn set_translation_y(&mut self, y: f32) {
        self.translation.y = y;
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Current visibility.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Set the visibility.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    // =========================================================================
    // Layout Requests
    // =========================================================================

    /// Ask the host to measure and arrange this widget again.
    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    /// Whether a layout pass has been requested.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Clear and return the pending layout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }
}
