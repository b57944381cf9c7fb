//! Loop state snapshot — the visible state handed to the host after each advance.

use serde::{Deserialize, Serialize};

use crate::events::LoopEvent;
use crate::types::{BarId, SimTime};

/// Complete state broadcast to the host after each `advance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoopSnapshot {
    pub time: SimTime,
    /// Bars ordered by id.
    pub bars: Vec<BarView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<LoopEvent>,
}

impl LoopSnapshot {
    pub fn bar(&self, id: BarId) -> Option<&BarView> {
        self.bars.iter().find(|b| b.id == id)
    }
}

/// A bar as the host should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarView {
    pub id: BarId,
    pub current: i32,
    pub min: i32,
    pub max: i32,
    /// Whether an active depletion is attached.
    pub depleting: bool,
    /// Depletion amount per tick, 0 when idle.
    pub rate: i32,
}

impl BarView {
    /// Width of the fill for a fill area `full_width` pixels wide.
    ///
    /// Integer arithmetic truncating toward zero; a bar at or below zero
    /// yields a non-positive width, which the host skips.
    pub fn fill_width(&self, full_width: i32) -> i32 {
        if self.max == 0 {
            return 0;
        }
        let width = i64::from(full_width) * i64::from(self.current) / i64::from(self.max);
        width as i32
    }
}
