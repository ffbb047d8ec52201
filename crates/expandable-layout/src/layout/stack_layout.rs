//! Stack layout for overlaying widgets.

use super::ContentMargins;
use super::traits::ContainerLayout;
use crate::geometry::{Point, Rect, Size};
use crate::widget::Widget;

/// A layout that places every child over the same area.
///
/// The natural size is the largest child in each dimension plus margins.
/// Each child is arranged to fill the inner area.
#[derive(Debug, Clone, Default)]
pub struct StackLayout {
    margins: ContentMargins,
}

impl StackLayout {
    /// Create a new stack layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set content margins using builder pattern.
    pub fn with_content_margins(mut self, margins: ContentMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Get the content margins.
    #[inline]
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }
}

impl ContainerLayout for StackLayout {
    fn measure(&self, children: &mut [Box<dyn Widget>], available: Size) -> Size {
        let inner = self.margins.inset(available);
        let content = children.iter_mut().fold(Size::ZERO, |acc, child| {
            let size = child.measure(inner);
            Size::new(acc.width.max(size.width), acc.height.max(size.height))
        });
        Size::new(
            content.width + self.margins.horizontal(),
            content.height + self.margins.vertical(),
        )
        .min(available)
    }

    fn arrange(&self, children: &mut [Box<dyn Widget>], bounds: Rect) {
        let rect = Rect {
            origin: Point::new(self.margins.left, self.margins.top),
            size: self.margins.inset(bounds.size),
        };
        for child in children.iter_mut() {
            child.arrange(rect);
        }
    }
}
