use crate::{Easing, Tween};

/// One rendered frame of a [`ParallaxTrack`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackFrame {
    /// Horizontal translation of the track, in percent of its own width. Always in `[-100, 0]`.
    pub translate_pct: f32,
    /// Horizontal `object-position` of each image, in percent. Always in `[0, 100]`.
    pub object_position_pct: f32,
}

impl TrackFrame {
    fn at(translate_pct: f32) -> Self {
        Self {
            translate_pct,
            object_position_pct: 100.0 + translate_pct,
        }
    }
}

/// Drag-to-scroll state for a horizontal image track.
///
/// Dragging half the viewport width moves the track by its full travel. The track eases toward
/// each new target instead of jumping; adapters call [`ParallaxTrack::sample`] every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTrack {
    down_at: Option<f32>,
    prev_percentage: f32,
    percentage: f32,
    tween: Option<Tween>,
    duration_ms: u64,
}

impl ParallaxTrack {
    pub const DEFAULT_DURATION_MS: u64 = 1200;
    pub const MIN_PCT: f32 = -100.0;
    pub const MAX_PCT: f32 = 0.0;

    pub fn new() -> Self {
        Self {
            down_at: None,
            prev_percentage: 0.0,
            percentage: 0.0,
            tween: None,
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// The target position the track is moving toward.
    pub fn percentage(&self) -> f32 {
        self.percentage
    }

    pub fn is_dragging(&self) -> bool {
        self.down_at.is_some()
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.down_at = Some(x);
    }

    /// Moves the target for a pointer at `x`. Returns the new target, or `None` when no drag
    /// is in progress or the width is not usable.
    pub fn pointer_move(&mut self, x: f32, viewport_width: f32, now_ms: u64) -> Option<f32> {
        let down = self.down_at?;
        if !(viewport_width > 0.0) {
            atrace!(viewport_width, "ParallaxTrack: width ignored");
            return None;
        }
        let delta = down - x;
        let next = (self.prev_percentage + delta / (viewport_width / 2.0) * -100.0)
            .clamp(Self::MIN_PCT, Self::MAX_PCT);
        if !next.is_finite() {
            return None;
        }

        self.percentage = next;
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, next),
            None => {
                self.tween = Some(Tween::new(
                    self.prev_percentage,
                    next,
                    now_ms,
                    self.duration_ms,
                    Easing::EaseOutCubic,
                ))
            }
        }
        Some(next)
    }

    /// Ends the drag. The next drag continues from the current target.
    pub fn pointer_up(&mut self) {
        self.down_at = None;
        self.prev_percentage = self.percentage;
    }

    pub fn sample(&self, now_ms: u64) -> TrackFrame {
        let pct = match &self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.percentage,
        };
        TrackFrame::at(pct.clamp(Self::MIN_PCT, Self::MAX_PCT))
    }
}

impl Default for ParallaxTrack {
    fn default() -> Self {
        Self::new()
    }
}
