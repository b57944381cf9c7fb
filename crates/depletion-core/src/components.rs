//! ECS components for bar entities.
//!
//! Components are plain data structs with minimal methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DEPLETION_PER_TICK;
use crate::types::BarId;

/// A bounded integer gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub id: BarId,
    pub current: i32,
    /// Floor. Depletion stops once `current` drops below it.
    pub min: i32,
    /// Ceiling. Nothing raises `current` above it.
    pub max: i32,
}

impl Bar {
    pub fn new(id: BarId, current: i32, min: i32, max: i32) -> Self {
        Self {
            id,
            current: current.min(max).max(min),
            min,
            max,
        }
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    pub fn is_below_floor(&self) -> bool {
        self.current < self.min
    }
}

/// Active per-tick decrement. Present on a bar entity only while it is depleting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepletionRate {
    pub amount_per_tick: i32,
}

impl Default for DepletionRate {
    fn default() -> Self {
        Self {
            amount_per_tick: DEFAULT_DEPLETION_PER_TICK,
        }
    }
}
