//! Host loop — polls input, advances the depletion loop, and redraws.
//!
//! Everything runs on the calling thread: each iteration translates key
//! presses into intents, feeds the elapsed monotonic time to
//! `DepletionLoop::advance`, and presents a freshly drawn frame. The
//! window's rate limiter caps the frame rate; the simulation rate is fixed
//! independently of it.

use std::time::Instant;

use anyhow::Context;
use minifb::{KeyRepeat, Window, WindowOptions};
use tracing::{debug, info, warn};

use depletion_core::constants::{HINT_TEXT, WINDOW_TITLE};
use depletion_sim::engine::{DepletionLoop, SimConfig};

use crate::config::HostConfig;
use crate::error::AppError;
use crate::input;
use crate::render::{self, Framebuffer};

/// Monotonic frame timer. Owned by the host, never global.
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous lap. The first lap returns 0.
    pub fn lap(&mut self) -> f64 {
        self.lap_at(Instant::now())
    }

    fn lap_at(&mut self, now: Instant) -> f64 {
        let elapsed = self
            .last
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last = Some(now);
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Binary entry point: `run`, with failures reported once through `anyhow`.
pub fn run_app(config: &HostConfig) -> anyhow::Result<()> {
    run(config).context("Oh no, something bad happened!")
}

/// Open the window and run until it is closed or a quit key is pressed.
pub fn run(config: &HostConfig) -> Result<(), AppError> {
    if config.width == 0 || config.height == 0 {
        return Err(AppError::InvalidSize {
            width: config.width,
            height: config.height,
        });
    }

    let mut window = Window::new(
        WINDOW_TITLE,
        config.width,
        config.height,
        WindowOptions::default(),
    )
    .map_err(AppError::Window)?;
    window.set_target_fps(config.fps);

    let mut sim = DepletionLoop::new(SimConfig::default());
    let bar = sim.primary_bar().ok_or(AppError::NoBars)?;
    let mut frame = Framebuffer::new(config.width, config.height);
    let mut clock = FrameClock::new();

    info!(
        width = config.width,
        height = config.height,
        fps = config.fps,
        "{}",
        HINT_TEXT
    );

    while window.is_open() {
        let pressed = window.get_keys_pressed(KeyRepeat::No);
        if pressed.iter().copied().any(input::is_quit_key) {
            break;
        }
        for intent in input::intents_for_keys(&pressed, bar) {
            if let Err(e) = sim.apply(intent) {
                warn!(error = %e, ?intent, "ignoring intent");
            }
        }

        let ticks = sim.advance(clock.lap());
        let snapshot = sim.snapshot();
        for event in &snapshot.events {
            debug!(?event, ticks, "loop event");
        }

        render::draw_frame(&mut frame, &snapshot);
        window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(AppError::Present)?;
    }

    info!(ticks = sim.time().tick, "window closed");
    Ok(())
}
