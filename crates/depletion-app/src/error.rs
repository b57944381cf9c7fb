//! Host-side failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0:?}")]
    Window(#[source] minifb::Error),

    #[error("failed to present frame: {0:?}")]
    Present(#[source] minifb::Error),

    #[error("invalid window size {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("simulation has no bars to display")]
    NoBars,
}
