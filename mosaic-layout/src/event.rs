use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::{ElementKind, Malformed, ReorderError, Side};

/// What a reorder event moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ItemKind {
    Section,
    Column,
    Element,
}

impl ItemKind {
    pub const ALL: [Self; 3] = [Self::Section, Self::Column, Self::Element];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Column => "column",
            Self::Element => "element",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Malformed::UnknownItemKind(s.into()).into())
    }
}

/// One end of a drag: the container path plus the position inside it.
///
/// A section move needs neither container index, a column move needs `section_index`, and an
/// element move needs both. Extra indices are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Location {
    #[cfg_attr(feature = "serde", serde(default))]
    pub section_index: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub column_index: Option<usize>,
    pub item_index: usize,
}

impl Location {
    /// Position `index` among the top-level sections.
    pub fn section(index: usize) -> Self {
        Self {
            section_index: None,
            column_index: None,
            item_index: index,
        }
    }

    /// Position `index` among the columns of `section`.
    pub fn column(section: usize, index: usize) -> Self {
        Self {
            section_index: Some(section),
            column_index: None,
            item_index: index,
        }
    }

    /// Position `index` among the elements of `section`/`column`.
    pub fn element(section: usize, column: usize, index: usize) -> Self {
        Self {
            section_index: Some(section),
            column_index: Some(column),
            item_index: index,
        }
    }

    pub(crate) fn require_section(
        &self,
        kind: ItemKind,
        side: Side,
    ) -> Result<usize, ReorderError> {
        self.section_index.ok_or_else(|| {
            Malformed::MissingIndex {
                kind,
                side,
                field: "section_index",
            }
            .into()
        })
    }

    pub(crate) fn require_column(&self, kind: ItemKind, side: Side) -> Result<usize, ReorderError> {
        self.column_index.ok_or_else(|| {
            Malformed::MissingIndex {
                kind,
                side,
                field: "column_index",
            }
            .into()
        })
    }
}

/// A brand-new element dragged in from the palette.
///
/// The id is supplied by the caller; the engine never generates ids itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PaletteInsert {
    pub element_kind: ElementKind,
    pub generated_id: String,
    pub generated_content: String,
}

impl PaletteInsert {
    pub fn new(
        element_kind: ElementKind,
        generated_id: impl Into<String>,
        generated_content: impl Into<String>,
    ) -> Self {
        Self {
            element_kind,
            generated_id: generated_id.into(),
            generated_content: generated_content.into(),
        }
    }

    /// Uses [`ElementKind::default_content`] as the content.
    pub fn with_default_content(
        element_kind: ElementKind,
        generated_id: impl Into<String>,
    ) -> Self {
        Self::new(element_kind, generated_id, element_kind.default_content())
    }
}

/// A completed drag: where an item came from and where it was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ReorderEvent {
    pub item_kind: ItemKind,
    pub source: Location,
    pub destination: Location,
    /// When set, `source` is ignored and a new element is inserted at `destination`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette_insert: Option<PaletteInsert>,
}

impl ReorderEvent {
    pub fn new(item_kind: ItemKind, source: Location, destination: Location) -> Self {
        Self {
            item_kind,
            source,
            destination,
            palette_insert: None,
        }
    }

    pub fn section(from: usize, to: usize) -> Self {
        Self::new(ItemKind::Section, Location::section(from), Location::section(to))
    }

    pub fn column(from: Location, to: Location) -> Self {
        Self::new(ItemKind::Column, from, to)
    }

    pub fn element(from: Location, to: Location) -> Self {
        Self::new(ItemKind::Element, from, to)
    }

    pub fn palette(insert: PaletteInsert, to: Location) -> Self {
        Self {
            item_kind: ItemKind::Element,
            source: Location::default(),
            destination: to,
            palette_insert: Some(insert),
        }
    }

    pub fn is_palette_insert(&self) -> bool {
        self.palette_insert.is_some()
    }
}
