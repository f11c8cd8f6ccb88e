use alloc::vec::Vec;

use crate::WindowError;

/// Configuration for [`crate::compute_visible_range`].
///
/// All lengths are logical pixels. Fields are signed because they usually arrive straight from
/// layout measurements; [`GridOptions::validate`] rejects values outside their domain instead of
/// clamping them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Number of items in the virtual sequence. Must be `>= 0`.
    pub total_items: i64,
    /// Height of one row of items. Must be `> 0`.
    pub row_height_px: i64,
    /// Vertical space between rows. Must be `>= 0`.
    pub gap_px: i64,
    /// Items per row. Must be `>= 1`.
    pub columns_per_row: i64,
    /// Extra rows materialized above and below the viewport. Must be `>= 0`.
    pub buffer_rows: i64,
}

impl GridOptions {
    /// Creates options for a single-column list without gap or buffer.
    pub fn new(total_items: i64, row_height_px: i64) -> Self {
        Self {
            total_items,
            row_height_px,
            gap_px: 0,
            columns_per_row: 1,
            buffer_rows: 0,
        }
    }

    /// The image gallery preset: 500 items on 100px rows, 16px gap, three per row and a
    /// ten-row buffer against pop-in during fast scroll.
    pub fn gallery() -> Self {
        Self::new(500, 100)
            .with_gap(16)
            .with_columns_per_row(3)
            .with_buffer_rows(10)
    }

    pub fn with_total_items(mut self, total_items: i64) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_row_height(mut self, row_height_px: i64) -> Self {
        self.row_height_px = row_height_px;
        self
    }

    pub fn with_gap(mut self, gap_px: i64) -> Self {
        self.gap_px = gap_px;
        self
    }

    pub fn with_columns_per_row(mut self, columns_per_row: i64) -> Self {
        self.columns_per_row = columns_per_row;
        self
    }

    pub fn with_buffer_rows(mut self, buffer_rows: i64) -> Self {
        self.buffer_rows = buffer_rows;
        self
    }

    /// Row pitch: row height plus the gap below it.
    pub fn effective_row_height(&self) -> i64 {
        self.row_height_px.saturating_add(self.gap_px)
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.total_items < 0 {
            return Err(WindowError::invalid(
                "total_items",
                self.total_items,
                "must be >= 0",
            ));
        }
        if self.row_height_px <= 0 {
            return Err(WindowError::invalid(
                "row_height_px",
                self.row_height_px,
                "must be > 0",
            ));
        }
        if self.gap_px < 0 {
            return Err(WindowError::invalid("gap_px", self.gap_px, "must be >= 0"));
        }
        if self.columns_per_row < 1 {
            return Err(WindowError::invalid(
                "columns_per_row",
                self.columns_per_row,
                "must be >= 1",
            ));
        }
        if self.buffer_rows < 0 {
            return Err(WindowError::invalid(
                "buffer_rows",
                self.buffer_rows,
                "must be >= 0",
            ));
        }
        Ok(())
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::gallery()
    }
}

/// Maps a viewport width to the number of items per row.
///
/// Breakpoints are `(min_width_px, columns)` pairs; the widest breakpoint not exceeding the
/// viewport width wins, and `base_columns` applies below all of them.
///
/// Deserialized breakpoints are re-sorted, and a repeated width keeps its last entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawBreakpoints")
)]
pub struct ColumnBreakpoints {
    base_columns: i64,
    breakpoints: Vec<(i64, i64)>, // sorted by min width
}

impl ColumnBreakpoints {
    pub fn new(base_columns: i64) -> Self {
        Self {
            base_columns,
            breakpoints: Vec::new(),
        }
    }

    pub fn with_breakpoint(mut self, min_width_px: i64, columns: i64) -> Self {
        let at = self
            .breakpoints
            .partition_point(|&(w, _)| w <= min_width_px);
        // Replace an existing breakpoint at the same width.
        if at > 0 && self.breakpoints[at - 1].0 == min_width_px {
            self.breakpoints[at - 1].1 = columns;
        } else {
            self.breakpoints.insert(at, (min_width_px, columns));
        }
        self
    }

    pub fn columns_for_width(&self, width_px: i64) -> i64 {
        self.breakpoints
            .iter()
            .rev()
            .find(|&&(min, _)| width_px >= min)
            .map_or(self.base_columns, |&(_, columns)| columns)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBreakpoints {
    base_columns: i64,
    #[serde(default)]
    breakpoints: Vec<(i64, i64)>,
}

#[cfg(feature = "serde")]
impl From<RawBreakpoints> for ColumnBreakpoints {
    fn from(raw: RawBreakpoints) -> Self {
        raw.breakpoints
            .into_iter()
            .fold(Self::new(raw.base_columns), |bp, (min_width_px, columns)| {
                bp.with_breakpoint(min_width_px, columns)
            })
    }
}

impl Default for ColumnBreakpoints {
    /// Two columns on narrow screens, three from 768px up.
    fn default() -> Self {
        Self::new(2).with_breakpoint(768, 3)
    }
}
