/// Transitions reported by [`LongPress`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressEvent {
    /// The pointer went down.
    Started,
    /// The pointer stayed down for the threshold. Fired once per press.
    LongPress,
    /// The pointer was released after a long press.
    Finished,
    /// The pointer was released (or left) before a long press fired.
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Pressed { since_ms: u64 },
    Held,
}

/// Press-and-hold detection driven by adapter timestamps instead of timers.
///
/// Adapters call `press` on pointer/touch down, `tick` from their frame loop or timer, and
/// `release` on pointer up, touch end, or pointer leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongPress {
    threshold_ms: u64,
    state: State,
}

impl LongPress {
    pub const DEFAULT_THRESHOLD_MS: u64 = 400;

    pub fn new() -> Self {
        Self::with_threshold_ms(Self::DEFAULT_THRESHOLD_MS)
    }

    pub fn with_threshold_ms(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            state: State::Idle,
        }
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    pub fn is_pressed(&self) -> bool {
        self.state != State::Idle
    }

    pub fn is_long_press_active(&self) -> bool {
        self.state == State::Held
    }

    /// Starts (or restarts) a press.
    pub fn press(&mut self, now_ms: u64) -> PressEvent {
        self.state = State::Pressed { since_ms: now_ms };
        PressEvent::Started
    }

    /// Fires [`PressEvent::LongPress`] once the press has lasted `threshold_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<PressEvent> {
        let State::Pressed { since_ms } = self.state else {
            return None;
        };
        if now_ms.saturating_sub(since_ms) < self.threshold_ms {
            return None;
        }
        atrace!(held_ms = now_ms.saturating_sub(since_ms), "LongPress: fired");
        self.state = State::Held;
        Some(PressEvent::LongPress)
    }

    /// Ends the press. Returns `None` when nothing was pressed.
    ///
    /// Only a press that already reported [`PressEvent::LongPress`] finishes; anything else is
    /// cancelled, however long it was held.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn release(&mut self, now_ms: u64) -> Option<PressEvent> {
        let event = match self.state {
            State::Idle => None,
            State::Held => Some(PressEvent::Finished),
            State::Pressed { since_ms } => {
                atrace!(held_ms = now_ms.saturating_sub(since_ms), "LongPress: cancelled");
                Some(PressEvent::Cancelled)
            }
        };
        self.state = State::Idle;
        event
    }
}

impl Default for LongPress {
    fn default() -> Self {
        Self::new()
    }
}
