//! Events emitted by the depletion loop for host feedback.

use serde::{Deserialize, Serialize};

use crate::types::BarId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoopEvent {
    /// A depletion was switched on.
    DepletionStarted { bar: BarId },
    /// All depletions were switched off by a toggle.
    DepletionStopped { cleared: u32 },
    /// A bar dropped below its floor and stopped depleting.
    BarRetired { bar: BarId, current: i32, tick: u64 },
    /// A bar was refilled to its ceiling.
    Refilled { bar: BarId },
}
