//! Systems that operate on the bar world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or in buffers
//! handed in by the engine.

pub mod depletion;
pub mod snapshot;
