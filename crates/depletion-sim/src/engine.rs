//! Depletion loop — the core of the demo.
//!
//! `DepletionLoop` owns the hecs world holding the bars, applies intents,
//! and advances simulated time in fixed ticks decoupled from the host's
//! frame rate. Completely headless (no windowing dependency), enabling
//! deterministic testing.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use tracing::{debug, warn};

use depletion_core::commands::Intent;
use depletion_core::components::{Bar, DepletionRate};
use depletion_core::constants::{DT, MAX_TICKS_PER_FRAME, TICK_EPSILON};
use depletion_core::error::SimError;
use depletion_core::events::LoopEvent;
use depletion_core::state::LoopSnapshot;
use depletion_core::types::{BarId, SimTime};

use crate::systems;
use crate::systems::depletion::RetireBuffer;
use crate::world_setup::{self, BarSpec};

/// Configuration for starting a new loop.
pub struct SimConfig {
    /// Bars to create, in id order.
    pub bars: Vec<BarSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bars: vec![BarSpec::default()],
        }
    }
}

/// The depletion loop. Owns the bars and all timing state.
pub struct DepletionLoop {
    world: World,
    /// Arena index: stable id → entity.
    index: BTreeMap<BarId, Entity>,
    time: SimTime,
    /// Leftover wall-clock seconds not yet consumed by a tick.
    carry: f64,
    retire_buffer: RetireBuffer,
    events: Vec<LoopEvent>,
}

impl DepletionLoop {
    /// Create a new loop with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let index = world_setup::spawn_bars(&mut world, &config.bars);
        Self {
            world,
            index,
            time: SimTime::default(),
            carry: 0.0,
            retire_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance by `delta_secs` of wall-clock time. Returns the number of ticks run.
    ///
    /// At most `MAX_TICKS_PER_FRAME` ticks run per call; time beyond that
    /// cap is dropped rather than carried, so a long stall never turns into
    /// a burst of catch-up ticks.
    pub fn advance(&mut self, delta_secs: f64) -> u32 {
        let delta = if delta_secs.is_finite() && delta_secs >= 0.0 {
            delta_secs
        } else {
            warn!(delta_secs, "ignoring invalid frame delta");
            0.0
        };

        let cap = f64::from(MAX_TICKS_PER_FRAME) * DT;
        let mut available = (delta + self.carry).min(cap);
        let mut ticks = 0;

        while available + TICK_EPSILON >= DT {
            available -= DT;
            self.tick();
            ticks += 1;
        }

        self.carry = available.max(0.0);
        ticks
    }

    /// Run exactly one fixed step.
    pub(crate) fn tick(&mut self) {
        self.time.advance();
        systems::depletion::run(
            &mut self.world,
            &mut self.retire_buffer,
            self.time.tick,
            &mut self.events,
        );
    }

    /// Global toggle: start depleting `bar` if nothing is depleting,
    /// otherwise stop every depletion.
    pub fn toggle_depletion(&mut self, bar: BarId) -> Result<(), SimError> {
        let entity = self.entity(bar)?;

        if systems::depletion::active_count(&self.world) == 0 {
            if self.world.insert_one(entity, DepletionRate::default()).is_err() {
                return Err(SimError::NotFound { bar });
            }
            debug!(%bar, "depletion started");
            self.events.push(LoopEvent::DepletionStarted { bar });
        } else {
            let cleared = systems::depletion::clear_all(&mut self.world);
            debug!(cleared, "depletion stopped");
            self.events.push(LoopEvent::DepletionStopped { cleared });
        }
        Ok(())
    }

    /// Set `bar` back to its ceiling. Any active depletion keeps running.
    pub fn refill(&mut self, bar: BarId) -> Result<(), SimError> {
        let entity = self.entity(bar)?;
        let target = self
            .world
            .query_one_mut::<&mut Bar>(entity)
            .map_err(|_| SimError::NotFound { bar })?;
        target.refill();
        debug!(%bar, current = target.current, "bar refilled");
        self.events.push(LoopEvent::Refilled { bar });
        Ok(())
    }

    /// Dispatch a host intent.
    pub fn apply(&mut self, intent: Intent) -> Result<(), SimError> {
        match intent {
            Intent::ToggleDepletion { bar } => self.toggle_depletion(bar),
            Intent::Refill { bar } => self.refill(bar),
        }
    }

    /// Build a snapshot of every bar, draining pending events.
    pub fn snapshot(&mut self) -> LoopSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Current state of one bar.
    pub fn bar(&self, bar: BarId) -> Result<Bar, SimError> {
        let entity = self.entity(bar)?;
        self.world
            .get::<&Bar>(entity)
            .map(|b| *b)
            .map_err(|_| SimError::NotFound { bar })
    }

    /// Whether `bar` has an active depletion.
    pub fn is_depleting(&self, bar: BarId) -> bool {
        self.index
            .get(&bar)
            .is_some_and(|&e| self.world.get::<&DepletionRate>(e).is_ok())
    }

    /// Number of active depletions.
    pub fn active_count(&self) -> usize {
        systems::depletion::active_count(&self.world)
    }

    /// Lowest bar id, the one a single-bar host drives.
    pub fn primary_bar(&self) -> Option<BarId> {
        self.index.keys().next().copied()
    }

    /// All bar ids in order.
    pub fn bar_ids(&self) -> impl Iterator<Item = BarId> + '_ {
        self.index.keys().copied()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Leftover seconds waiting for the next tick.
    pub fn carry(&self) -> f64 {
        self.carry
    }

    /// Mutable access to the world (for tests).
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Entity behind `bar` (for tests).
    #[cfg(test)]
    pub(crate) fn entity_of(&self, bar: BarId) -> Option<Entity> {
        self.index.get(&bar).copied()
    }

    fn entity(&self, bar: BarId) -> Result<Entity, SimError> {
        self.index
            .get(&bar)
            .copied()
            .ok_or(SimError::NotFound { bar })
    }
}
