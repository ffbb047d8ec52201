//! Logging facilities for Expandable Layout.
//!
//! Expandable Layout uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("expandable_layout=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a filter such as
//! `expandable_layout::animation=trace` shows per-frame ticks without the
//! rest of the noise.

/// Span names used throughout Expandable Layout for tracing.
pub mod span_names {
    /// Measurement pass span.
    pub const MEASURE: &str = "expandable_layout::measure";
    /// Animation frame span.
    pub const FRAME: &str = "expandable_layout::frame";
    /// Configuration loading span.
    pub const CONFIG: &str = "expandable_layout::config";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "expandable_layout_core";
    /// Animation lifecycle and ticks.
    pub const ANIMATION: &str = "expandable_layout::animation";
    /// Measurement and arrangement.
    pub const LAYOUT: &str = "expandable_layout::layout";
    /// Listener dispatch.
    pub const LISTENER: &str = "expandable_layout::listener";
    /// Configuration loading.
    pub const CONFIG: &str = "expandable_layout::config";
    /// Performance spans.
    pub const PERF: &str = "expandable_layout::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level event under [`targets::CORE`].
#[macro_export]
macro_rules! expand_trace {
    ($($arg:tt)*) => {
        $crate::__tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

/// Debug-level event under [`targets::CORE`].
#[macro_export]
macro_rules! expand_debug {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
