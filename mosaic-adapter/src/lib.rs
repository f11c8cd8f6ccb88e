//! Framework-neutral glue between UI events and the `mosaic-window` / `mosaic-layout` engines.
//!
//! Both engines are pure functions over plain values. This crate provides the small stateful
//! pieces an adapter usually needs around them:
//!
//! - [`WindowController`]: feeds scroll/resize/width events into a grid window and reports
//!   which items to mount and unmount
//! - [`LayoutStore`]: holds the current layout snapshot, applies reorder events, and drops
//!   stale results
//! - [`DragEnd`]: translates a sortable-list drag completion into a typed reorder event
//! - [`LongPress`] and [`ParallaxTrack`]: timestamp-driven pointer gestures
//!
//! Nothing here owns a timer or a UI object; callers pass `now_ms` where time matters.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod drag;
mod long_press;
mod palette;
mod parallax;
mod store;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::WindowController;
pub use drag::{DragContainer, DragEnd};
pub use long_press::{LongPress, PressEvent};
pub use palette::{IdSource, SequentialIds, palette_insert};
pub use parallax::{ParallaxTrack, TrackFrame};
pub use store::{DispatchOutcome, LayoutSnapshot, LayoutStore};
pub use tween::{Easing, Tween};
