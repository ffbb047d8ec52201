//! Expandable Layout - an animated collapsible container widget.
//!
//! [`ExpandableContainer`](widgets::ExpandableContainer) wraps a host
//! [`ContainerLayout`](layout::ContainerLayout) and animates its size along
//! one axis between zero and its natural size. Children slide with the
//! collapsing edge, and an optional
//! [`ExpandableListener`](widgets::ExpandableListener) is told when an
//! animation starts and ends.
//!
//! The crate has no event loop of its own. The host delivers frame time with
//! [`advance`](widgets::ExpandableContainer::advance), usually measured with
//! a [`FrameClock`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use expandable_layout::prelude::*;
//!
//! let mut panel = ExpandableContainer::new(BoxLayout::vertical());
//! panel.add_child(Spacer::new(200.0, 80.0));
//!
//! panel.toggle();
//! for _ in 0..20 {
//!     panel.advance(Duration::from_millis(16));
//! }
//! assert_eq!(panel.expansion(), 0.0);
//! ```

pub use expandable_layout_core::{Error, FrameClock, PerfSpan, Result, logging};

pub mod animation;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod prelude;
pub mod widget;
pub mod widgets;
