//! Intents sent from the host to the depletion loop.
//!
//! The host translates raw input (key presses) into intents; the loop
//! never sees input devices directly.

use serde::{Deserialize, Serialize};

use crate::types::BarId;

/// All possible user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Start depleting `bar` if nothing is depleting, otherwise stop everything.
    ToggleDepletion { bar: BarId },
    /// Set `bar` back to its ceiling.
    Refill { bar: BarId },
}

impl Intent {
    /// The bar this intent addresses.
    pub fn bar(&self) -> BarId {
        match *self {
            Intent::ToggleDepletion { bar } | Intent::Refill { bar } => bar,
        }
    }
}
