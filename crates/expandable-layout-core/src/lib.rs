//! Core systems for Expandable Layout.
//!
//! This crate provides the foundation shared by the widget crate:
//!
//! - **Errors**: The [`Error`] type and [`Result`] alias
//! - **Logging**: `tracing` targets, span names and helper macros
//! - **Frame timing**: [`FrameClock`] for hosts that drive animations
//!
//! # Frame Clock Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use expandable_layout_core::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! let start = Instant::now();
//!
//! assert_eq!(clock.tick(start), Duration::ZERO);
//! assert_eq!(clock.tick(start + Duration::from_millis(16)), Duration::from_millis(16));
//! ```

mod clock;
mod error;
pub mod logging;

pub use clock::FrameClock;
pub use error::{Error, Result};
pub use logging::PerfSpan;

#[doc(hidden)]
pub use tracing as __tracing;
