//! A headless circular (looping) list layout and scroll engine.
//!
//! `looplist` positions a finite, wrap-around sequence of items inside a
//! fixed viewport: index `n - 1` sits next to index 0, the list has no start
//! or end, and scrolling never runs out of content. Only the items needed to
//! cover the visible area exist at any time; they are materialized and
//! reclaimed through the [`ItemProvider`] seam as the viewport moves.
//!
//! The crate focuses on the layout core: modular index arithmetic across the
//! wrap seam, a direction table reconciling orientation × reversed layout ×
//! RTL, edge-based item placement, incremental scroll-by with recycling, and
//! a shortest-route estimator for reaching an arbitrary index.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport geometry (size and insets)
//! - item creation, measurement, and recycling (via [`ItemProvider`])
//! - gesture/fling handling, feeding pixel deltas into
//!   [`LoopLayout::scroll_by`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod deciders;
pub mod direction;
pub mod index_loop;
pub mod pickers;

mod frame;
mod layout;
mod options;
mod provider;
mod state;
mod tracker;
mod types;


pub use index_loop::LoopDistances;
pub use layout::{AttachedItem, LoopLayout};
pub use options::LoopLayoutOptions;
pub use provider::ItemProvider;
pub use state::LayoutSnapshot;
pub use tracker::ViewportIndices;
pub use types::{
    AdapterDirection, Insets, LayoutConfig, LayoutDirection, MovementDirection, Orientation, Rect,
    Size, Viewport,
};
