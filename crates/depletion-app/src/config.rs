//! Host configuration, parsed from the command line.

use clap::Parser;

use depletion_core::constants::{TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Depletion bar demo: x toggles depletion, z refills, Esc quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "depletion-app", version)]
pub struct HostConfig {
    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: usize,

    /// Frame cap; the simulation still ticks at a fixed 30 Hz
    #[arg(long, default_value_t = TARGET_FPS)]
    pub fps: usize,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: TARGET_FPS,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HostConfig::try_parse_from(["depletion-app"]).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.fps, TARGET_FPS);
        assert!(!config.verbose);
    }

    #[test]
    fn test_overrides() {
        let config = HostConfig::try_parse_from([
            "depletion-app",
            "--width",
            "640",
            "--height",
            "480",
            "--fps",
            "144",
            "-v",
        ])
        .unwrap();
        assert_eq!((config.width, config.height, config.fps), (640, 480, 144));
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(HostConfig::try_parse_from(["depletion-app", "--width", "wide"]).is_err());
    }
}
