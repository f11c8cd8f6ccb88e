//! Headless engines behind a photo gallery and a page layout editor.
//!
//! - [`window`]: which items of a large uniform grid should be materialized for a scroll
//!   position, where each one sits, and what changed between two positions
//! - [`layout`]: an immutable section/column/element tree and the drag-and-drop reorder
//!   engine that produces new snapshots from it
//! - [`adapter`]: framework-neutral state holders that connect UI events to both engines
//!
//! Rendering, image fetching and browser event dispatch are left to the embedding UI layer.
//!
//! ```rust
//! use mosaic::adapter::{DispatchOutcome, LayoutStore, WindowController};
//! use mosaic::layout::{ReorderEvent, sample_layout};
//! use mosaic::window::{GridOptions, VisibleRange};
//!
//! let mut grid = WindowController::new(GridOptions::gallery()).unwrap();
//! grid.on_resize(800).unwrap();
//! assert_eq!(grid.range(), VisibleRange::new(0, 51));
//!
//! let mut store = LayoutStore::new(sample_layout());
//! let outcome = store.dispatch(&ReorderEvent::section(0, 1));
//! assert_eq!(outcome, DispatchOutcome::Applied { version: 1 });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mosaic_adapter as adapter;
pub use mosaic_layout as layout;
pub use mosaic_window as window;
