use mosaic_window::{
    ColumnBreakpoints, GridOptions, GridWindow, RangeDiff, Viewport, VisibleRange, WindowError,
};

/// A framework-neutral controller that keeps a grid's materialized range in sync with the
/// scroll container.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` / `on_width` when UI events occur
/// - `set_total_items` when the data set grows or shrinks
///
/// Each call returns the [`RangeDiff`] to apply (mount/unmount) when the materialized range
/// changed, and `None` otherwise. Invalid measurements are returned as errors and leave the
/// controller unchanged, so the caller can simply keep rendering what it has.
///
/// A new controller has materialized nothing: [`Self::range`] is empty until the first `on_*`
/// or `set_*` call, whose diff mounts the initial range (including buffer rows).
#[derive(Clone, Debug)]
pub struct WindowController {
    window: GridWindow,
    breakpoints: Option<ColumnBreakpoints>,
    viewport: Viewport,
    range: VisibleRange,
}

impl WindowController {
    pub fn new(options: GridOptions) -> Result<Self, WindowError> {
        Ok(Self {
            window: GridWindow::new(options).map_err(rejected)?,
            breakpoints: None,
            viewport: Viewport::default(),
            range: VisibleRange::EMPTY,
        })
    }

    /// Derives `columns_per_row` from the container width reported to [`Self::on_width`].
    pub fn with_breakpoints(mut self, breakpoints: ColumnBreakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn options(&self) -> &GridOptions {
        self.window.options()
    }

    pub fn window(&self) -> &GridWindow {
        &self.window
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The currently materialized range. Empty before the first measurement.
    pub fn range(&self) -> VisibleRange {
        self.range
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_top_px: i64) -> Result<Option<RangeDiff>, WindowError> {
        self.on_viewport(self.viewport.with_scroll_top(scroll_top_px))
    }

    /// Call this when the viewport height changes.
    pub fn on_resize(&mut self, height_px: i64) -> Result<Option<RangeDiff>, WindowError> {
        self.on_viewport(self.viewport.with_height(height_px))
    }

    /// Applies scroll offset and height in one update.
    pub fn on_viewport(&mut self, viewport: Viewport) -> Result<Option<RangeDiff>, WindowError> {
        let next = self.window.visible_range(viewport).map_err(rejected)?;
        self.viewport = viewport;
        Ok(self.commit_range(next))
    }

    /// Call this when the container width changes. Without breakpoints this is a no-op.
    pub fn on_width(&mut self, width_px: i64) -> Result<Option<RangeDiff>, WindowError> {
        let Some(breakpoints) = &self.breakpoints else {
            return Ok(None);
        };
        let columns = breakpoints.columns_for_width(width_px);
        if columns == self.options().columns_per_row {
            return Ok(None);
        }
        atrace!(width_px, columns, "on_width");
        self.set_options(self.options().with_columns_per_row(columns))
    }

    pub fn set_total_items(&mut self, total_items: i64) -> Result<Option<RangeDiff>, WindowError> {
        if total_items == self.options().total_items {
            return Ok(None);
        }
        self.set_options(self.options().with_total_items(total_items))
    }

    /// Replaces the grid configuration and recomputes the range against the current viewport.
    pub fn set_options(&mut self, options: GridOptions) -> Result<Option<RangeDiff>, WindowError> {
        let window = GridWindow::new(options).map_err(rejected)?;
        let next = window.visible_range(self.viewport).map_err(rejected)?;
        self.window = window;
        Ok(self.commit_range(next))
    }

    fn commit_range(&mut self, next: VisibleRange) -> Option<RangeDiff> {
        if next == self.range {
            return None;
        }
        let diff = RangeDiff::between(self.range, next);
        atrace!(
            prev_start = self.range.start_index,
            prev_end = self.range.end_index,
            start = next.start_index,
            end = next.end_index,
            mounted = diff.mounted.len(),
            unmounted = diff.unmounted.len(),
            "commit_range"
        );
        self.range = next;
        if diff.is_empty() { None } else { Some(diff) }
    }
}

fn rejected(err: WindowError) -> WindowError {
    awarn!(error = %err, "WindowController: measurement rejected");
    err
}
