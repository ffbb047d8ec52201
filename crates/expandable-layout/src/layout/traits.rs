//! Core layout trait definition.

use crate::geometry::{Rect, Size};
use crate::widget::Widget;

/// Arranges the children of a container.
///
/// # Layout Algorithm
///
/// Layouts use a two-pass algorithm:
///
/// 1. **Measure (bottom-up)**: [`measure`](ContainerLayout::measure) measures
///    every child and combines their sizes into the container's natural
///    size, never exceeding the available space.
/// 2. **Arrange (top-down)**: [`arrange`](ContainerLayout::arrange) assigns
///    each child a rectangle relative to the container's origin.
///
/// The trait is object safe so containers can hold any layout as
/// `Box<dyn ContainerLayout>`.
pub trait ContainerLayout: Send + Sync + std::fmt::Debug {
    /// Measure `children` and return the natural size of the container.
    fn measure(&self, children: &mut [Box<dyn Widget>], available: Size) -> Size;

    /// Position `children` within `bounds`.
    ///
    /// Child rectangles are relative to the container, so `bounds.origin` is
    /// not added to them.
    fn arrange(&self, children: &mut [Box<dyn Widget>], bounds: Rect);
}
