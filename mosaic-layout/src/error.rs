use alloc::string::String;
use core::fmt;

use crate::ItemKind;

/// Errors reported by [`crate::apply_reorder`].
///
/// Both variants are local and recoverable: the input tree is never modified, so callers
/// usually treat them as "ignore the drag" rather than surfacing them to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// A structural index refers outside the current tree shape.
    #[error("{level} index {index} out of range (len {len})")]
    IndexOutOfRange {
        level: ItemKind,
        index: usize,
        len: usize,
    },
    /// The event is missing fields required for its kind, or is otherwise inconsistent.
    #[error("malformed reorder event: {0}")]
    MalformedEvent(#[from] Malformed),
}

impl ReorderError {
    pub(crate) fn out_of_range(level: ItemKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { level, index, len }
    }
}

/// Why a [`ReorderError::MalformedEvent`] was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("unknown item kind `{0}`")]
    UnknownItemKind(String),
    #[error("unknown element kind `{0}`")]
    UnknownElementKind(String),
    #[error("{kind} move is missing `{field}` on the {side}")]
    MissingIndex {
        kind: ItemKind,
        side: Side,
        field: &'static str,
    },
    #[error("palette insert requires an element move, got {0}")]
    PaletteOnNonElement(ItemKind),
    #[error("id `{0}` already exists in the layout")]
    DuplicateId(String),
    #[error("palette drag did not say which element kind to create")]
    MissingPaletteKind,
    #[error("cannot drag from a {from} container into a {to} container")]
    ContainerMismatch {
        from: &'static str,
        to: &'static str,
    },
}

/// Which end of a reorder event a field belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}
