use mosaic_layout::{ElementKind, ItemKind, Location, Malformed, ReorderError, ReorderEvent};

use crate::{IdSource, palette_insert};

/// A sortable container a drag can start or end in.
///
/// The input layer records which container it attached each sortable to, including the
/// container's own position in the tree, so no index has to be recovered from rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragContainer {
    /// The element palette. Items are cloned out of it; nothing can be dropped into it.
    Palette,
    /// The top-level list of sections.
    Sections,
    /// The columns of one section.
    Columns { section: usize },
    /// The elements of one column.
    Elements { section: usize, column: usize },
}

impl DragContainer {
    pub fn name(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Sections => "sections",
            Self::Columns { .. } => "columns",
            Self::Elements { .. } => "elements",
        }
    }

    /// What a drag inside this container moves.
    pub fn item_kind(self) -> Option<ItemKind> {
        match self {
            Self::Palette => None,
            Self::Sections => Some(ItemKind::Section),
            Self::Columns { .. } => Some(ItemKind::Column),
            Self::Elements { .. } => Some(ItemKind::Element),
        }
    }

    pub fn location(self, index: usize) -> Location {
        match self {
            Self::Palette | Self::Sections => Location::section(index),
            Self::Columns { section } => Location::column(section, index),
            Self::Elements { section, column } => Location::element(section, column, index),
        }
    }
}

/// A raw drag completion as reported by a sortable list widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEnd {
    pub from: DragContainer,
    pub to: DragContainer,
    pub old_index: usize,
    pub new_index: usize,
    /// The template kind when the drag started in the palette.
    pub palette_kind: Option<ElementKind>,
}

impl DragEnd {
    pub fn new(from: DragContainer, to: DragContainer, old_index: usize, new_index: usize) -> Self {
        Self {
            from,
            to,
            old_index,
            new_index,
            palette_kind: None,
        }
    }

    pub fn from_palette(kind: ElementKind, to: DragContainer, new_index: usize) -> Self {
        Self {
            from: DragContainer::Palette,
            to,
            old_index: 0,
            new_index,
            palette_kind: Some(kind),
        }
    }

    /// Translates the drag into a typed reorder event.
    ///
    /// Palette drags draw a fresh id from `ids`; other drags leave it untouched.
    pub fn into_event(self, ids: &mut impl IdSource) -> Result<ReorderEvent, ReorderError> {
        let mismatch = || -> ReorderError {
            Malformed::ContainerMismatch {
                from: self.from.name(),
                to: self.to.name(),
            }
            .into()
        };

        if self.from == DragContainer::Palette {
            if !matches!(self.to, DragContainer::Elements { .. }) {
                return Err(mismatch());
            }
            let kind = self.palette_kind.ok_or(Malformed::MissingPaletteKind)?;
            let event = ReorderEvent::palette(
                palette_insert(kind, ids),
                self.to.location(self.new_index),
            );
            atrace!(kind = %kind, to = self.new_index, "DragEnd: palette insert");
            return Ok(event);
        }

        match (self.from.item_kind(), self.to.item_kind()) {
            (Some(from), Some(to)) if from == to => Ok(ReorderEvent::new(
                from,
                self.from.location(self.old_index),
                self.to.location(self.new_index),
            )),
            _ => Err(mismatch()),
        }
    }
}
