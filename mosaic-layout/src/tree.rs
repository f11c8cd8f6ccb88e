use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{ItemKind, Malformed, ReorderError};

/// The kind of content an [`Element`] renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ElementKind {
    Paragraph,
    Button,
    Input,
}

impl ElementKind {
    pub const ALL: [Self; 3] = [Self::Paragraph, Self::Button, Self::Input];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Input => "input",
        }
    }

    /// Content given to a freshly inserted element of this kind: paragraph text, a button
    /// label, or an input placeholder.
    pub fn default_content(self) -> &'static str {
        match self {
            Self::Paragraph => "New paragraph text",
            Self::Button => "Button",
            Self::Input => "Input placeholder",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Malformed::UnknownElementKind(s.into()).into())
    }
}

/// A leaf of the layout tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ElementKind,
    pub content: String,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
        }
    }
}

/// An ordered run of elements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub id: String,
    elements: Vec<Arc<Element>>,
}

impl Column {
    pub fn new(id: impl Into<String>, elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            id: id.into(),
            elements: elements.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn elements(&self) -> &[Arc<Element>] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// An ordered run of columns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id: String,
    columns: Vec<Arc<Column>>,
}

impl Section {
    pub fn new(id: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            id: id.into(),
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An immutable, cheaply clonable snapshot of a page layout.
///
/// Every level is reference counted. Cloning is O(1), and a reorder copies only the sections
/// and columns on the path it touches; everything else stays shared with the previous snapshot
/// (observable via `Arc::ptr_eq` on [`LayoutTree::sections`] and friends).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LayoutTree {
    sections: Arc<Vec<Arc<Section>>>,
}

impl LayoutTree {
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: Arc::new(sections.into_iter().map(Arc::new).collect()),
        }
    }

    /// Whether two trees are the same snapshot (not merely equal).
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.sections, &b.sections)
    }

    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index).map(Arc::as_ref)
    }

    pub fn column(&self, section: usize, column: usize) -> Option<&Column> {
        self.section(section)?.column(column)
    }

    pub fn element(&self, section: usize, column: usize, element: usize) -> Option<&Element> {
        self.column(section, column)?.element(element)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.columns.iter())
            .map(|c| c.elements.len())
            .sum()
    }

    pub fn locate_section(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Returns `(section, column)` for the column with `id`.
    pub fn locate_column(&self, id: &str) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(si, s)| {
            s.columns
                .iter()
                .position(|c| c.id == id)
                .map(|ci| (si, ci))
        })
    }

    /// Returns `(section, column, element)` for the element with `id`.
    pub fn locate_element(&self, id: &str) -> Option<(usize, usize, usize)> {
        self.sections.iter().enumerate().find_map(|(si, s)| {
            s.columns.iter().enumerate().find_map(|(ci, c)| {
                c.elements
                    .iter()
                    .position(|e| e.id == id)
                    .map(|ei| (si, ci, ei))
            })
        })
    }

    /// Whether any section, column or element carries `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.locate_section(id).is_some()
            || self.locate_column(id).is_some()
            || self.locate_element(id).is_some()
    }

    pub(crate) fn try_section(&self, index: usize) -> Result<&Section, ReorderError> {
        self.section(index)
            .ok_or_else(|| ReorderError::out_of_range(ItemKind::Section, index, self.len()))
    }

    pub(crate) fn try_column(
        &self,
        section: usize,
        column: usize,
    ) -> Result<&Column, ReorderError> {
        let s = self.try_section(section)?;
        s.column(column)
            .ok_or_else(|| ReorderError::out_of_range(ItemKind::Column, column, s.len()))
    }

    pub(crate) fn sections_mut(&mut self) -> &mut Vec<Arc<Section>> {
        Arc::make_mut(&mut self.sections)
    }

    pub(crate) fn columns_mut(
        &mut self,
        section: usize,
    ) -> Result<&mut Vec<Arc<Column>>, ReorderError> {
        let sections = self.sections_mut();
        let len = sections.len();
        let s = sections
            .get_mut(section)
            .ok_or_else(|| ReorderError::out_of_range(ItemKind::Section, section, len))?;
        Ok(&mut Arc::make_mut(s).columns)
    }

    pub(crate) fn elements_mut(
        &mut self,
        section: usize,
        column: usize,
    ) -> Result<&mut Vec<Arc<Element>>, ReorderError> {
        let columns = self.columns_mut(section)?;
        let len = columns.len();
        let c = columns
            .get_mut(column)
            .ok_or_else(|| ReorderError::out_of_range(ItemKind::Column, column, len))?;
        Ok(&mut Arc::make_mut(c).elements)
    }
}

impl FromIterator<Section> for LayoutTree {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self::new(iter)
    }
}
