use alloc::string::String;

use mosaic_layout::{ElementKind, PaletteInsert};

/// Supplies unique ids for elements created from the palette.
///
/// Any `FnMut() -> String` is an id source, so a UUID generator can be plugged in directly.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

impl<F: FnMut() -> String> IdSource for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// `prefix-1`, `prefix-2`, ... Unique for the lifetime of one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Resumes numbering, e.g. after restoring a saved page whose ids go up to `next - 1`.
    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = alloc::format!("{}-{}", self.prefix, self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// A palette payload for `kind` with a fresh id and the kind's default content.
pub fn palette_insert(kind: ElementKind, ids: &mut impl IdSource) -> PaletteInsert {
    PaletteInsert::with_default_content(kind, ids.next_id())
}
