use mosaic_layout::{LayoutTree, ReorderError, ReorderEvent, apply_reorder};

/// A tree together with the store version it was read at.
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    pub tree: LayoutTree,
    pub version: u64,
}

/// What [`LayoutStore::dispatch`] did with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The tree changed; the store is now at `version`.
    Applied { version: u64 },
    /// The event was valid but moved nothing.
    Unchanged,
    /// The event did not match the current tree. The store is untouched.
    Ignored(ReorderError),
}

/// Holds the current layout snapshot for a session.
///
/// Every accepted change replaces the tree wholesale and bumps `version`. Rejected events are
/// logged and otherwise dropped: they normally mean the UI's drag coordinates went stale, and
/// retrying with the same event cannot help.
#[derive(Clone, Debug, Default)]
pub struct LayoutStore {
    tree: LayoutTree,
    version: u64,
}

impl LayoutStore {
    pub fn new(tree: LayoutTree) -> Self {
        Self { tree, version: 0 }
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            tree: self.tree.clone(),
            version: self.version,
        }
    }

    /// Applies `event` to the current tree.
    pub fn dispatch(&mut self, event: &ReorderEvent) -> DispatchOutcome {
        match apply_reorder(&self.tree, event) {
            Ok(next) if LayoutTree::ptr_eq(&next, &self.tree) => DispatchOutcome::Unchanged,
            Ok(next) => DispatchOutcome::Applied {
                version: self.install(next),
            },
            Err(err) => {
                awarn!(kind = %event.item_kind, error = %err, "LayoutStore: drag ignored");
                DispatchOutcome::Ignored(err)
            }
        }
    }

    /// Installs a tree computed elsewhere from the snapshot at `base_version`.
    ///
    /// Last write wins: if another change landed since `base_version` the result is stale and
    /// is dropped. Returns whether the tree was accepted.
    pub fn commit(&mut self, base_version: u64, tree: LayoutTree) -> bool {
        if base_version != self.version {
            awarn!(
                base_version,
                current = self.version,
                "LayoutStore: stale commit dropped"
            );
            return false;
        }
        if !LayoutTree::ptr_eq(&tree, &self.tree) {
            self.install(tree);
        }
        true
    }

    /// Replaces the tree unconditionally (e.g. loading a different page).
    pub fn replace(&mut self, tree: LayoutTree) -> u64 {
        self.install(tree)
    }

    fn install(&mut self, tree: LayoutTree) -> u64 {
        self.tree = tree;
        self.version = self.version.wrapping_add(1);
        atrace!(version = self.version, "LayoutStore: installed");
        self.version
    }
}
