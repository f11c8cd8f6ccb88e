use crate::{GridOptions, ItemPlacement, Viewport, VisibleRange, WindowError};

/// Computes which items of a fixed-row grid to materialize for a scroll position.
///
/// The returned range is half-open and always satisfies
/// `0 <= start_index <= end_index <= total_items`. `buffer_rows` extra rows are included above
/// and below the viewport. A negative `scroll_top_px` is treated as 0; invalid configuration or a
/// negative viewport height is reported as [`WindowError::InvalidArgument`].
///
/// This is a pure function: call it on every scroll/resize notification and diff against the
/// previously materialized range (see [`crate::RangeDiff`]).
pub fn compute_visible_range(
    options: &GridOptions,
    viewport: Viewport,
) -> Result<VisibleRange, WindowError> {
    GridWindow::new(*options)?.visible_range(viewport)
}

/// Where `index` sits in the grid: `Ok(None)` past the last item.
pub fn item_placement(
    options: &GridOptions,
    index: usize,
) -> Result<Option<ItemPlacement>, WindowError> {
    Ok(GridWindow::new(*options)?.placement(index))
}

/// A validated grid configuration.
///
/// Construction checks [`GridOptions`] once; queries afterwards only validate the per-call
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridWindow {
    options: GridOptions,
}

impl GridWindow {
    pub fn new(options: GridOptions) -> Result<Self, WindowError> {
        options.validate()?;
        wdebug!(
            total_items = options.total_items,
            columns_per_row = options.columns_per_row,
            buffer_rows = options.buffer_rows,
            "GridWindow::new"
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn total_items(&self) -> usize {
        to_index(self.options.total_items)
    }

    pub fn row_count(&self) -> u64 {
        to_u64(div_ceil(
            self.options.total_items,
            self.options.columns_per_row,
        ))
    }

    /// Height of the scroll spacer holding every row (each row counted with its gap).
    pub fn content_height_px(&self) -> u64 {
        self.row_count()
            .saturating_mul(to_u64(self.options.effective_row_height()))
    }

    pub fn visible_range(&self, viewport: Viewport) -> Result<VisibleRange, WindowError> {
        if viewport.height_px < 0 {
            return Err(WindowError::invalid(
                "viewport_height_px",
                viewport.height_px,
                "must be >= 0",
            ));
        }

        let total = self.options.total_items;
        if total == 0 {
            return Ok(VisibleRange::EMPTY);
        }

        let pitch = self.options.effective_row_height();
        let buffer = self.options.buffer_rows;
        let columns = self.options.columns_per_row;
        let scroll_top = viewport.scroll_top_px.max(0);

        let first_row = (scroll_top / pitch).saturating_sub(buffer).max(0);
        let bottom = scroll_top.saturating_add(viewport.height_px);
        let last_row = div_ceil(bottom, pitch).saturating_add(buffer);

        let start = first_row.saturating_mul(columns).clamp(0, total);
        let end = last_row.saturating_mul(columns).clamp(start, total);

        wtrace!(
            scroll_top,
            viewport_height = viewport.height_px,
            first_row,
            last_row,
            start,
            end,
            "visible_range"
        );

        Ok(VisibleRange {
            start_index: to_index(start),
            end_index: to_index(end),
        })
    }

    /// Returns where `index` sits in the grid, or `None` past the end.
    pub fn placement(&self, index: usize) -> Option<ItemPlacement> {
        if index >= self.total_items() {
            return None;
        }
        let columns = to_u64(self.options.columns_per_row);
        let index_u64 = index as u64;
        let row = index_u64 / columns;
        Some(ItemPlacement {
            index,
            row,
            column: index_u64 % columns,
            top_px: row.saturating_mul(to_u64(self.options.effective_row_height())),
            height_px: to_u64(self.options.row_height_px),
        })
    }

    /// Calls `f` for every item in `range`, clipped to the item count.
    pub fn for_each_placement(&self, range: VisibleRange, mut f: impl FnMut(ItemPlacement)) {
        let end = range.end_index.min(self.total_items());
        for index in range.start_index..end {
            if let Some(p) = self.placement(index) {
                f(p);
            }
        }
    }
}

/// Ceiling division for `a >= 0`, `b > 0`.
fn div_ceil(a: i64, b: i64) -> i64 {
    a / b + i64::from(a % b != 0)
}

fn to_index(v: i64) -> usize {
    usize::try_from(v).unwrap_or(if v < 0 { 0 } else { usize::MAX })
}

fn to_u64(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}
