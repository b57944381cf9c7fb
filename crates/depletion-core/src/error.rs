//! Errors raised by depletion loop operations.

use thiserror::Error;

use crate::types::BarId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// The addressed bar does not exist.
    #[error("{bar} not found")]
    NotFound { bar: BarId },
}
