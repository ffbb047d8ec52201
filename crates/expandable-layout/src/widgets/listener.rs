//! Lifecycle notifications for [`ExpandableContainer`](super::ExpandableContainer).

use std::sync::{Arc, Weak};

use expandable_layout_core::logging::targets;

/// What an expandable container is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionStatus {
    /// No animation is running.
    #[default]
    Idle,
    /// Animating towards fully expanded.
    Expanding,
    /// Animating towards fully collapsed.
    Collapsing,
}

/// Tags for the six listener callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerEvent {
    /// About to open.
    PreOpen,
    /// About to close.
    PreClose,
    /// Finished opening.
    Opened,
    /// Finished closing.
    Closed,
    /// An animation started.
    AnimationStart,
    /// An animation ran to completion.
    AnimationEnd,
}

/// Observer of an expandable container's animation lifecycle.
///
/// For one animation the callbacks arrive in the order
/// `on_animation_start`, then `on_pre_open` or `on_pre_close`, then (after
/// the frames) `on_animation_end`, then `on_opened` or `on_closed`. An
/// animation superseded by a new request never reaches its end callbacks.
///
/// Callbacks take `&self`; implementations that record state use interior
/// mutability.
pub trait ExpandableListener: Send + Sync {
    /// An animation started. `status` is the status before this animation
    /// took over.
    fn on_animation_start(&self, status: ExpansionStatus);

    /// An animation completed. `status` is the direction it was moving in.
    fn on_animation_end(&self, status: ExpansionStatus);

    /// The container is about to open.
    fn on_pre_open(&self);

    /// The container is about to close.
    fn on_pre_close(&self);

    /// The container finished opening.
    fn on_opened(&self);

    /// The container finished closing.
    fn on_closed(&self);
}

/// The single listener slot of a container.
///
/// Holds a non-owning reference; once the caller drops the listener, the
/// slot behaves as if it were empty.
#[derive(Default)]
pub(crate) struct ListenerSlot {
    listener: Option<Weak<dyn ExpandableListener>>,
}

impl ListenerSlot {
    /// Install `listener`, replacing any previous one.
    pub(crate) fn set<L: ExpandableListener + 'static>(&mut self, listener: &Arc<L>) {
        let weak: Weak<L> = Arc::downgrade(listener);
        self.listener = Some(weak);
    }

    /// Remove the listener.
    pub(crate) fn clear(&mut self) {
        self.listener = None;
    }

    /// Whether a live listener is installed.
    pub(crate) fn is_set(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Forward `event` to the listener, if any.
    ///
    /// `status` is passed to the start and end callbacks.
    pub(crate) fn report(&self, event: ListenerEvent, status: ExpansionStatus) {
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            return;
        };

        tracing::trace!(target: targets::LISTENER, ?event, ?status, "dispatch");
        match event {
            ListenerEvent::PreOpen => listener.on_pre_open(),
            ListenerEvent::PreClose => listener.on_pre_close(),
            ListenerEvent::Opened => listener.on_opened(),
            ListenerEvent::Closed => listener.on_closed(),
            ListenerEvent::AnimationStart => listener.on_animation_start(status),
            ListenerEvent::AnimationEnd => listener.on_animation_end(status),
        }
    }
}

impl std::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("installed", &self.is_set())
            .finish()
    }
}
