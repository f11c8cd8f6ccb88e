use core::iter::Chain;
use core::ops::Range;

use crate::VisibleRange;

/// Up to two ascending, non-overlapping half-open index spans.
///
/// The set difference of two ranges is at most two spans, so a diff never needs to allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spans {
    pub first: Range<usize>,
    pub second: Range<usize>,
}

impl Spans {
    fn from_parts(first: Range<usize>, second: Range<usize>) -> Self {
        // Empty spans are normalized to `0..0`, and a lone non-empty span lives in `first`.
        let first = if first.is_empty() { 0..0 } else { first };
        let second = if second.is_empty() { 0..0 } else { second };
        if first.is_empty() {
            Self {
                first: second,
                second: 0..0,
            }
        } else {
            Self { first, second }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first.contains(&index) || self.second.contains(&index)
    }

    /// Iterates the indices in ascending order.
    pub fn iter(&self) -> Chain<Range<usize>, Range<usize>> {
        self.first.clone().chain(self.second.clone())
    }
}

impl IntoIterator for &Spans {
    type Item = usize;
    type IntoIter = Chain<Range<usize>, Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The change between two materialized ranges.
///
/// `mounted` holds indices in `next` but not in `prev`; `unmounted` holds indices in `prev` but
/// not in `next`. Indices present in both are left alone by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeDiff {
    pub mounted: Spans,
    pub unmounted: Spans,
}

impl RangeDiff {
    pub fn between(prev: VisibleRange, next: VisibleRange) -> Self {
        Self {
            mounted: difference(next, prev),
            unmounted: difference(prev, next),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

/// `a \ b` as at most two spans.
fn difference(a: VisibleRange, b: VisibleRange) -> Spans {
    if a.is_empty() {
        return Spans::default();
    }
    if b.is_empty() || b.end_index <= a.start_index || a.end_index <= b.start_index {
        return Spans::from_parts(a.indices(), 0..0);
    }
    let before = a.start_index..b.start_index.max(a.start_index);
    let after = b.end_index.min(a.end_index)..a.end_index;
    Spans::from_parts(before, after)
}
