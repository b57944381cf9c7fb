//! Depletion loop for the bar demo.
//!
//! Owns the hecs world holding the bars, advances in fixed ticks,
//! and produces `LoopSnapshot`s for the host.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use depletion_core as core;
pub use engine::{DepletionLoop, SimConfig};
