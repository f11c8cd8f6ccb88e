//! Fixed-row grid windowing for large galleries and lists.
//!
//! For adapter-level utilities (a stateful scroll controller), see the `mosaic-adapter` crate.
//!
//! Given the item count, row geometry, scroll offset and viewport height, this crate computes
//! the half-open range of item indices worth materializing, plus a buffer of extra rows so fast
//! scrolling does not pop in blank cells. It also provides the pieces a renderer needs around
//! that range: per-item placement, spacer height, responsive column counts, range diffing and an
//! image load policy.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - scroll offset and viewport height on every scroll/resize notification
//! - the column count actually rendered (see [`ColumnBreakpoints`])
//!
//! ```rust
//! use mosaic_window::{GridOptions, Viewport, compute_visible_range};
//!
//! let range = compute_visible_range(&GridOptions::gallery(), Viewport::new(0, 800)).unwrap();
//! assert_eq!(range.start_index, 0);
//! assert_eq!(range.end_index, 51);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod error;
mod load;
mod options;
mod state;
mod types;
mod window;


pub use diff::{RangeDiff, Spans};
pub use error::WindowError;
pub use load::{LoadPolicy, LoadStrategy};
pub use options::{ColumnBreakpoints, GridOptions};
pub use state::Viewport;
pub use types::{ItemPlacement, VisibleRange};
pub use window::{GridWindow, compute_visible_range, item_placement};
