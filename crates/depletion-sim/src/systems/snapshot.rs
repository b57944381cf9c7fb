//! Snapshot system: queries the world and builds a `LoopSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use depletion_core::components::{Bar, DepletionRate};
use depletion_core::events::LoopEvent;
use depletion_core::state::{BarView, LoopSnapshot};
use depletion_core::types::SimTime;

pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<LoopEvent>) -> LoopSnapshot {
    LoopSnapshot {
        time: *time,
        bars: build_bars(world),
        events,
    }
}

/// Build BarView list, ordered by id.
fn build_bars(world: &World) -> Vec<BarView> {
    let mut query = world.query::<(&Bar, Option<&DepletionRate>)>();
    let mut bars: Vec<BarView> = query
        .iter()
        .map(|(_, (bar, rate))| BarView {
            id: bar.id,
            current: bar.current,
            min: bar.min,
            max: bar.max,
            depleting: rate.is_some(),
            rate: rate.map_or(0, |r| r.amount_per_tick),
        })
        .collect();
    bars.sort_unstable_by_key(|b| b.id);
    bars
}
