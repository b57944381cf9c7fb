//! Spawn factories for the bar arena.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use depletion_core::components::Bar;
use depletion_core::constants::{INITIAL_BAR_CURRENT, INITIAL_BAR_MAX, INITIAL_BAR_MIN};
use depletion_core::types::BarId;

/// Starting values for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSpec {
    pub current: i32,
    pub min: i32,
    pub max: i32,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            current: INITIAL_BAR_CURRENT,
            min: INITIAL_BAR_MIN,
            max: INITIAL_BAR_MAX,
        }
    }
}

/// Spawn one entity per spec. Ids are assigned in order starting at 0.
/// Returns the id → entity index used for lookups.
pub fn spawn_bars(world: &mut World, specs: &[BarSpec]) -> BTreeMap<BarId, Entity> {
    let mut index = BTreeMap::new();
    for (i, spec) in specs.iter().enumerate() {
        let id = BarId(i as u32);
        let entity = world.spawn((Bar::new(id, spec.current, spec.min, spec.max),));
        index.insert(id, entity);
    }
    index
}
