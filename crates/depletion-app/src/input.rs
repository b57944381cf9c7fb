//! Keyboard → intent translation.

use minifb::Key;

use depletion_core::commands::Intent;
use depletion_core::types::BarId;

/// Map the keys pressed this frame to intents for `bar`, in press order.
/// Unbound keys are ignored.
pub fn intents_for_keys(keys: &[Key], bar: BarId) -> Vec<Intent> {
    keys.iter()
        .filter_map(|key| match key {
            Key::X => Some(Intent::ToggleDepletion { bar }),
            Key::Z => Some(Intent::Refill { bar }),
            _ => None,
        })
        .collect()
}

/// Keys that end the program.
pub fn is_quit_key(key: Key) -> bool {
    key == Key::Escape
}
