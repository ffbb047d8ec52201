//! Host container layouts.
//!
//! A container delegates the arrangement of its children to a
//! [`ContainerLayout`]. The layout measures children to find the container's
//! natural size, then positions them inside the bounds the container is
//! finally given.
//!
//! # Available Layouts
//!
//! - [`BoxLayout`]: children stacked in a row or column
//! - [`StackLayout`]: children overlaid on top of each other
//!
//! # Example
//!
//! ```
//! use expandable_layout::layout::{BoxLayout, ContentMargins};
//!
//! let layout = BoxLayout::vertical()
//!     .with_spacing(8.0)
//!     .with_content_margins(ContentMargins::uniform(4.0));
//! assert_eq!(layout.spacing(), 8.0);
//! ```

mod box_layout;
mod stack_layout;
mod traits;

pub use box_layout::BoxLayout;
pub use stack_layout::StackLayout;
pub use traits::ContainerLayout;

use crate::geometry::Size;

/// Content margins around a layout.
///
/// Margins define the spacing between the layout's content and its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMargins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl ContentMargins {
    /// Create new content margins.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform margins (same value on all sides).
    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Total horizontal margin (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size occupied by margins.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Shrink `size` by the margins, never below zero.
    #[inline]
    pub fn inset(&self, size: Size) -> Size {
        Size::new(
            (size.width - self.horizontal()).max(0.0),
            (size.height - self.vertical()).max(0.0),
        )
    }
}
