/// A snapshot of the scroll container as reported by the rendering layer.
///
/// `scroll_top_px` may be negative during rubber-band overscroll; the engine treats that as 0.
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top_px: i64,
    pub height_px: i64,
}

impl Viewport {
    pub fn new(scroll_top_px: i64, height_px: i64) -> Self {
        Self {
            scroll_top_px,
            height_px,
        }
    }

    pub fn with_scroll_top(self, scroll_top_px: i64) -> Self {
        Self {
            scroll_top_px,
            ..self
        }
    }

    pub fn with_height(self, height_px: i64) -> Self {
        Self { height_px, ..self }
    }
}
