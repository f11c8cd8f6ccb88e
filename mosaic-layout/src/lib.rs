//! Immutable page layout trees and the drag-and-drop reorder engine that rewrites them.
//!
//! A [`LayoutTree`] is an ordered list of [`Section`]s, each holding ordered [`Column`]s of
//! [`Element`]s. The tree is never mutated: [`apply_reorder`] takes a snapshot plus a typed
//! [`ReorderEvent`] and returns a new snapshot that shares every untouched branch with the old
//! one. Failed events leave the input as it was.
//!
//! The input layer is expected to translate pointer-drag completions into [`ReorderEvent`]s
//! with explicit indices; nothing here reads indices back from rendered output. For that
//! translation and for a versioned state holder, see the `mosaic-adapter` crate.
//!
//! ```rust
//! use mosaic_layout::{Location, ReorderEvent, sample_layout};
//!
//! let tree = sample_layout();
//! let event = ReorderEvent::column(Location::column(0, 1), Location::column(1, 0));
//! let next = tree.apply(&event).unwrap();
//! assert_eq!(next.section(0).unwrap().len(), 1);
//! assert_eq!(next.column(1, 0).unwrap().id, "1-2");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod event;
mod reorder;
mod seed;
mod tree;


pub use error::{Malformed, ReorderError, Side};
pub use event::{ItemKind, Location, PaletteInsert, ReorderEvent};
pub use reorder::apply_reorder;
pub use seed::sample_layout;
pub use tree::{Column, Element, ElementKind, LayoutTree, Section};
