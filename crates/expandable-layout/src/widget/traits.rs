//! Core Widget trait definition.

use super::base::{Visibility, WidgetBase};
use crate::geometry::{Point, Rect, Size};

/// The core trait for all widgets.
///
/// A host drives widgets through a two-pass protocol:
///
/// 1. **Measure (bottom-up)**: [`measure`](Widget::measure) is given the
///    space available and returns the size the widget wants. Containers
///    measure their children first.
/// 2. **Arrange (top-down)**: [`arrange`](Widget::arrange) assigns the final
///    rectangle. Containers then position their children inside it.
///
/// Widgets are `Send + Sync` so a whole tree can be handed between threads,
/// but all mutation happens on the thread that owns the tree.
pub trait Widget: Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Measure the widget within `available` space.
    ///
    /// Implementations record the result with
    /// [`WidgetBase::set_measured_size`] and return it.
    fn measure(&mut self, available: Size) -> Size;

    // =========================================================================
    // Provided Methods
    // =========================================================================

    /// Assign the widget's final geometry.
    fn arrange(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Size produced by the last measure pass.
    fn measured_size(&self) -> Size {
        self.widget_base().measured_size()
    }

    /// Geometry assigned by the last arrange pass.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Render-time translation.
    fn translation(&self) -> Point {
        self.widget_base().translation()
    }

    /// Current visibility.
    fn visibility(&self) -> Visibility {
        self.widget_base().visibility()
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Whether the widget asked for a new layout pass.
    fn needs_layout(&self) -> bool {
        self.widget_base().needs_layout()
    }
}
