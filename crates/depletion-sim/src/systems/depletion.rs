//! Depletion system: applies one decrement to every depleting bar and
//! retires the ones that fell below their floor.

use hecs::{Entity, World};
use tracing::debug;

use depletion_core::components::{Bar, DepletionRate};
use depletion_core::events::LoopEvent;
use depletion_core::types::BarId;

/// Bars that crossed their floor this tick, awaiting removal of their `DepletionRate`.
pub type RetireBuffer = Vec<(BarId, Entity, i32)>;

/// Run one tick of depletion.
///
/// Removal is two-phase: the query only collects retirees into `retire_buffer`,
/// which is drained after the query borrow ends. The buffer is sorted by id so
/// events come out in a stable order regardless of archetype layout.
pub fn run(world: &mut World, retire_buffer: &mut RetireBuffer, tick: u64, events: &mut Vec<LoopEvent>) {
    retire_buffer.clear();

    for (entity, (bar, rate)) in world.query_mut::<(&mut Bar, &DepletionRate)>() {
        bar.current -= rate.amount_per_tick;
        if bar.is_below_floor() {
            retire_buffer.push((bar.id, entity, bar.current));
        }
    }

    retire_buffer.sort_unstable_by_key(|(id, _, _)| *id);

    for (bar, entity, current) in retire_buffer.drain(..) {
        let _ = world.remove_one::<DepletionRate>(entity);
        debug!(%bar, current, tick, "bar dropped below floor, depletion stopped");
        events.push(LoopEvent::BarRetired { bar, current, tick });
    }
}

/// Number of bars currently depleting.
pub fn active_count(world: &World) -> usize {
    world.query::<&DepletionRate>().iter().count()
}

/// Strip the depletion from every bar. Returns how many were removed.
pub fn clear_all(world: &mut World) -> u32 {
    let active: Vec<Entity> = world
        .query_mut::<&DepletionRate>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut cleared = 0;
    for entity in active {
        if world.remove_one::<DepletionRate>(entity).is_ok() {
            cleared += 1;
        }
    }
    cleared
}
