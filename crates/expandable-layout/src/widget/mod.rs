//! Widget system for Expandable Layout.
//!
//! This module provides the [`Widget`] trait and [`WidgetBase`] state shared
//! by every widget, along with the [`Visibility`] flag.

mod base;
mod traits;

pub use base::{Visibility, WidgetBase};
pub use traits::Widget;
