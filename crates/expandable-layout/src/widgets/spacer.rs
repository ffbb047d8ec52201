//! Spacer widget implementation.
//!
//! [`Spacer`] occupies a fixed amount of space without drawing anything. It
//! is the simplest leaf widget and a convenient stand-in for content when
//! composing layouts.

use crate::geometry::Size;
use crate::widget::{Widget, WidgetBase};

/// A widget with a fixed natural size and no content.
///
/// # Example
///
/// ```
/// use expandable_layout::geometry::Size;
/// use expandable_layout::widget::Widget;
/// use expandable_layout::widgets::Spacer;
///
/// let mut spacer = Spacer::new(20.0, 100.0);
/// assert_eq!(spacer.measure(Size::new(50.0, 50.0)), Size::new(20.0, 50.0));
/// ```
#[derive(Debug, Clone)]
pub struct Spacer {
    /// Widget base.
    base: WidgetBase,
    /// The natural size of the spacer.
    size: Size,
}

impl Spacer {
    /// Create a spacer with the given natural size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            base: WidgetBase::new(),
            size: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// Set the debug name using builder pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.set_name(name);
        self
    }

    /// The natural size.
    #[inline]
    pub fn natural_size(&self) -> Size {
        self.size
    }

    /// Change the natural size.
    ///
    /// Requests a layout pass if the size changed.
    pub fn set_natural_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.base.request_layout();
        }
    }
}

impl Widget for Spacer {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure(&mut self, available: Size) -> Size {
        let size = self.size.min(available);
        self.base.set_measured_size(size);
        size
    }
}

static_assertions::assert_impl_all!(Spacer: Send, Sync);
