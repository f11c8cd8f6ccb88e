/// How an item's image should be fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadStrategy {
    /// Fetch as soon as the item is materialized.
    Eager,
    /// Fetch once the item intersects the viewport.
    OnVisible,
}

/// Per-index loading policy for gallery images.
///
/// Items at the top of the gallery are almost always on the first screen, so they skip the
/// visibility check and the first few are flagged as priority fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadPolicy {
    /// Indices `<= eager_through` load eagerly.
    pub eager_through: usize,
    /// Indices `< priority_below` are priority loads.
    pub priority_below: usize,
}

impl LoadPolicy {
    pub fn new(eager_through: usize, priority_below: usize) -> Self {
        Self {
            eager_through,
            priority_below,
        }
    }

    pub fn strategy(&self, index: usize) -> LoadStrategy {
        if index <= self.eager_through {
            LoadStrategy::Eager
        } else {
            LoadStrategy::OnVisible
        }
    }

    pub fn is_priority(&self, index: usize) -> bool {
        index < self.priority_below
    }
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self::new(10, 20)
    }
}
