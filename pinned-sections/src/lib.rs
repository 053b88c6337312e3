//! A headless engine for pinned ("sticky") section headers in scrollable lists.
//!
//! Given a scroll window and a data source whose items are tagged as section headers or
//! ordinary rows, the engine decides which headers are pinned to the top of the viewport, how
//! several short headers stack, and when a pinned surrogate ("shadow") is created or dropped.
//!
//! It is UI-agnostic. A host list view is expected to provide:
//! - scroll notifications (first visible index, visible count, total count)
//! - the current top edge of laid-out rows ([`ListLayout`])
//! - a data source ([`SectionAdapter`]) that renders and measures rows ([`PinnedView`])
//! - a drawing surface for the overlay pass ([`Canvas`])
//!
//! For host glue (adapter attach/validation, observer delegation, restore handling), see the
//! `pinned-sections-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classifier;
mod controller;
mod error;
mod layout;
pub mod locator;
mod options;
pub mod overlay;
mod shadow;
mod source;
mod state;
mod types;


pub use classifier::{HeaderClassifier, PinnedViewTypes, is_pinned_position};
pub use controller::PinningController;
pub use error::{ConfigError, validate_adapter};
pub use layout::ListLayout;
pub use options::PinningOptions;
pub use overlay::Canvas;
pub use shadow::{Shadow, ShadowCache};
pub use source::{ChangeObserver, PinnedView, SectionAdapter, SectionIndexer};
pub use state::{PinnedEntry, PinnedSnapshot};
pub use types::{
    ClipRect, Constraint, Frame, ListGeometry, Padding, ScrollWindow, Size, ViewType,
};
