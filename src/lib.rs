//! Playroom frames panel
//!
//! Lets a user narrow which preview frames (widths and themes) are shown and
//! edit the session title.
//!
//! ## Filters
//!
//! Each option category keeps a visible list next to the host's available
//! list. The visible list only counts as a filter while it is non-empty and
//! no longer than the available list; see [`filter`].
//!
//! ## State
//!
//! Panel state changes only through dispatched [`store::Action`]s, applied
//! by the pure [`store::reduce`] function. The [`panel`] view model derives
//! everything a renderer draws from one state snapshot.

pub mod config;
pub mod filter;
pub mod gui;
pub mod options;
pub mod panel;
pub mod store;
pub mod title;
