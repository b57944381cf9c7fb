//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Also the highest frame rate the update loop targets.
pub const TICK_RATE: u32 = 30;

/// Lowest frame rate the update loop is expected to keep up with.
pub const MIN_FRAME_RATE: u32 = 15;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound on ticks run by a single `advance` call.
/// Prevents a catch-up spiral after a stall (e.g. window drag).
pub const MAX_TICKS_PER_FRAME: u32 = TICK_RATE / MIN_FRAME_RATE;

/// Slack used when comparing accumulated time against `DT`,
/// so that deltas summing to exactly one tick are not lost to rounding.
pub const TICK_EPSILON: f64 = 1e-9;

// --- Bars ---

/// Starting fill of the demo bar.
pub const INITIAL_BAR_CURRENT: i32 = 90;

/// Floor of the demo bar.
pub const INITIAL_BAR_MIN: i32 = 0;

/// Ceiling of the demo bar.
pub const INITIAL_BAR_MAX: i32 = 100;

/// Amount removed per tick when a depletion is switched on.
pub const DEFAULT_DEPLETION_PER_TICK: i32 = 1;

// --- Window & layout ---

pub const WINDOW_WIDTH: usize = 1024;
pub const WINDOW_HEIGHT: usize = 768;
pub const WINDOW_TITLE: &str = "100 Days of Code 2018";
pub const HINT_TEXT: &str = "Press x key to start / stop depletion of bar, or z key to refill bar";

/// Top-left corner of the hint text, in pixels.
pub const HINT_X: i32 = 10;
pub const HINT_Y: i32 = 10;

/// Glyph cell size of the built-in 8×8 font.
pub const GLYPH_SIZE: i32 = 8;

/// Host frame cap (stand-in for vsync).
pub const TARGET_FPS: usize = 60;

/// Outer bar frame size in pixels.
pub const BAR_OUTER_WIDTH: i32 = 400;
pub const BAR_OUTER_HEIGHT: i32 = 80;

/// Padding between the outer frame and the fill.
pub const BAR_INSET: i32 = 10;

/// Fill width when the bar is at its ceiling.
pub const BAR_INNER_MAX_WIDTH: i32 = BAR_OUTER_WIDTH - 2 * BAR_INSET;
pub const BAR_INNER_HEIGHT: i32 = BAR_OUTER_HEIGHT - 2 * BAR_INSET;

/// Colours as 0RGB.
pub const BACKGROUND_COLOR: u32 = 0x00_00_00_00;
pub const BAR_OUTER_COLOR: u32 = 0x00_32_64_C8;
pub const BAR_INNER_COLOR: u32 = 0x00_14_46_AA;
pub const TEXT_COLOR: u32 = 0x00_FF_FF_FF;
