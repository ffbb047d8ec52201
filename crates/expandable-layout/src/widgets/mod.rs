//! Standard widgets for Expandable Layout.
//!
//! - [`ExpandableContainer`]: animated collapsible container
//! - [`Spacer`]: fixed-size placeholder

mod expandable;
mod listener;
mod spacer;

pub use expandable::ExpandableContainer;
pub use listener::{ExpandableListener, ExpansionStatus, ListenerEvent};
pub use spacer::Spacer;
