//! Host-side glue for the `pinned-sections` crate.
//!
//! The `pinned-sections` crate is UI-agnostic and only knows about scroll windows, rows and
//! shadows. This crate provides the pieces a list-view integration typically needs around it:
//!
//! - Attaching a data source, with validation and change-observer bookkeeping
//! - Forwarding scroll events to a single external observer
//! - Rebuilding pinned state after the host restores saved scroll state
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod observer;
mod restore;


pub use list::PinnedSectionList;
pub use observer::{ScrollObserver, ScrollState};
pub use restore::PendingReconcile;
