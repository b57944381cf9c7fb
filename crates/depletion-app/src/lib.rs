//! Windowed host for the depletion bar demo.
//!
//! This crate owns what the depletion loop leaves to its host:
//! the window, keyboard polling, the frame clock, and drawing.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
