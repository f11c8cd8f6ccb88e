use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Element, ItemKind, LayoutTree, Location, Malformed, PaletteInsert, ReorderError, ReorderEvent,
    Side,
};

/// Applies a reorder event and returns the resulting tree.
///
/// The input is never modified. On success the new tree shares every section and column the
/// move did not touch with `tree`. When source and destination coincide the input snapshot
/// itself is returned (`LayoutTree::ptr_eq` holds), so callers can skip re-rendering.
///
/// Within a single sequence the item is removed first and `destination.item_index` refers to
/// the shortened sequence, which is the usual list-reorder convention.
pub fn apply_reorder(tree: &LayoutTree, event: &ReorderEvent) -> Result<LayoutTree, ReorderError> {
    let result = match (&event.palette_insert, event.item_kind) {
        (Some(insert), ItemKind::Element) => insert_from_palette(tree, insert, &event.destination),
        (Some(_), kind) => Err(Malformed::PaletteOnNonElement(kind).into()),
        (None, ItemKind::Section) => move_section(tree, &event.source, &event.destination),
        (None, ItemKind::Column) => move_column(tree, &event.source, &event.destination),
        (None, ItemKind::Element) => move_element(tree, &event.source, &event.destination),
    };

    match &result {
        Ok(next) => log_applied(tree, event, next),
        Err(err) => log_rejected(event, err),
    }
    result
}

impl LayoutTree {
    /// Method form of [`apply_reorder`].
    pub fn apply(&self, event: &ReorderEvent) -> Result<Self, ReorderError> {
        apply_reorder(self, event)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_applied(tree: &LayoutTree, event: &ReorderEvent, next: &LayoutTree) {
    ltrace!(
        kind = %event.item_kind,
        from = event.source.item_index,
        to = event.destination.item_index,
        unchanged = LayoutTree::ptr_eq(tree, next),
        "apply_reorder"
    );
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_rejected(event: &ReorderEvent, err: &ReorderError) {
    ldebug!(kind = %event.item_kind, error = %err, "apply_reorder rejected");
}

fn move_section(
    tree: &LayoutTree,
    from: &Location,
    to: &Location,
) -> Result<LayoutTree, ReorderError> {
    check_index(ItemKind::Section, from.item_index, tree.len())?;
    if from.item_index == to.item_index {
        return Ok(tree.clone());
    }

    let mut next = tree.clone();
    let sections = next.sections_mut();
    let moved = checked_remove(sections, from.item_index, ItemKind::Section)?;
    checked_insert(sections, to.item_index, moved, ItemKind::Section)?;
    Ok(next)
}

fn move_column(
    tree: &LayoutTree,
    from: &Location,
    to: &Location,
) -> Result<LayoutTree, ReorderError> {
    let kind = ItemKind::Column;
    let from_section = from.require_section(kind, Side::Source)?;
    let to_section = to.require_section(kind, Side::Destination)?;

    let source = tree.try_section(from_section)?;
    check_index(kind, from.item_index, source.len())?;
    if from_section == to_section && from.item_index == to.item_index {
        return Ok(tree.clone());
    }

    let mut next = tree.clone();
    let moved = checked_remove(next.columns_mut(from_section)?, from.item_index, kind)?;
    checked_insert(next.columns_mut(to_section)?, to.item_index, moved, kind)?;
    Ok(next)
}

fn move_element(
    tree: &LayoutTree,
    from: &Location,
    to: &Location,
) -> Result<LayoutTree, ReorderError> {
    let kind = ItemKind::Element;
    let from_section = from.require_section(kind, Side::Source)?;
    let from_column = from.require_column(kind, Side::Source)?;
    let to_section = to.require_section(kind, Side::Destination)?;
    let to_column = to.require_column(kind, Side::Destination)?;

    let source = tree.try_column(from_section, from_column)?;
    check_index(kind, from.item_index, source.len())?;
    if (from_section, from_column, from.item_index) == (to_section, to_column, to.item_index) {
        return Ok(tree.clone());
    }

    let mut next = tree.clone();
    let moved = checked_remove(
        next.elements_mut(from_section, from_column)?,
        from.item_index,
        kind,
    )?;
    checked_insert(
        next.elements_mut(to_section, to_column)?,
        to.item_index,
        moved,
        kind,
    )?;
    Ok(next)
}

fn insert_from_palette(
    tree: &LayoutTree,
    insert: &PaletteInsert,
    to: &Location,
) -> Result<LayoutTree, ReorderError> {
    let kind = ItemKind::Element;
    let to_section = to.require_section(kind, Side::Destination)?;
    let to_column = to.require_column(kind, Side::Destination)?;
    if tree.contains_id(&insert.generated_id) {
        return Err(Malformed::DuplicateId(insert.generated_id.clone()).into());
    }

    let element = Element::new(
        insert.generated_id.clone(),
        insert.element_kind,
        insert.generated_content.clone(),
    );
    let mut next = tree.clone();
    checked_insert(
        next.elements_mut(to_section, to_column)?,
        to.item_index,
        Arc::new(element),
        kind,
    )?;
    Ok(next)
}

fn check_index(level: ItemKind, index: usize, len: usize) -> Result<(), ReorderError> {
    if index < len {
        Ok(())
    } else {
        Err(ReorderError::out_of_range(level, index, len))
    }
}

fn checked_remove<T>(items: &mut Vec<T>, index: usize, level: ItemKind) -> Result<T, ReorderError> {
    check_index(level, index, items.len())?;
    Ok(items.remove(index))
}

/// Inserts at `index`, which may equal the length (append).
fn checked_insert<T>(
    items: &mut Vec<T>,
    index: usize,
    item: T,
    level: ItemKind,
) -> Result<(), ReorderError> {
    if index > items.len() {
        return Err(ReorderError::out_of_range(level, index, items.len()));
    }
    items.insert(index, item);
    Ok(())
}
