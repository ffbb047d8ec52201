//! Box layout for arranging widgets in a row or column.

use super::ContentMargins;
use super::traits::ContainerLayout;
use crate::geometry::{Orientation, Point, Rect, Size};
use crate::widget::Widget;

/// A layout that stacks children one after another along an axis.
///
/// Children keep their measured extent along the main axis and are stretched
/// to the full inner extent on the cross axis. Invisible children still take
/// up space.
#[derive(Debug, Clone, Default)]
pub struct BoxLayout {
    /// Whether children are arranged horizontally or vertically.
    orientation: Orientation,
    /// Gap between adjacent children.
    spacing: f32,
    /// Padding around all children.
    margins: ContentMargins,
}

impl BoxLayout {
    /// Create a new box layout with the specified orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Create a horizontal box layout.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Create a vertical box layout.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Set spacing using builder pattern.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Set content margins using builder pattern.
    pub fn with_content_margins(mut self, margins: ContentMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Get the layout orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the spacing between children.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Get the content margins.
    #[inline]
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }
}

impl ContainerLayout for BoxLayout {
    fn measure(&self, children: &mut [Box<dyn Widget>], available: Size) -> Size {
        let axis = self.orientation;
        let inner = self.margins.inset(available);

        let mut main = 0.0_f32;
        let mut cross = 0.0_f32;
        for child in children.iter_mut() {
            let size = child.measure(inner);
            main += axis.main(size);
            cross = cross.max(axis.cross_of(size));
        }
        if children.len() > 1 {
            main += self.spacing * (children.len() - 1) as f32;
        }

        let content = axis.size(main, cross);
        let margins = self.margins.size();
        Size::new(
            content.width + margins.width,
            content.height + margins.height,
        )
        .min(available)
    }

    fn arrange(&self, children: &mut [Box<dyn Widget>], bounds: Rect) {
        let axis = self.orientation;
        let cross_extent = axis.cross_of(self.margins.inset(bounds.size));

        let mut offset = 0.0_f32;
        for child in children.iter_mut() {
            let main = axis.main(child.measured_size());
            let local = axis.point(offset, 0.0);
            let origin = Point::new(local.x + self.margins.left, local.y + self.margins.top);
            child.arrange(Rect {
                origin,
                size: axis.size(main, cross_extent),
            });
            offset += main + self.spacing;
        }
    }
}
