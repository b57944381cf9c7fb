//! Core types and definitions for the depletion bar demo.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, intents, state snapshots, events, errors, and constants.
//! It has no dependency on any windowing library.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
