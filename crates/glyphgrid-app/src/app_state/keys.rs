//! Keyboard shortcuts.

use winit::keyboard::{Key, NamedKey};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Return the viewport to its initial zoom and centre.
    ResetView,
    Exit,
}

/// Map a pressed logical key to an action, if it has one.
pub fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Exit),
        Key::Named(NamedKey::Home) => Some(KeyAction::ResetView),
        Key::Character(c) if c.as_str() == "0" => Some(KeyAction::ResetView),
        _ => None,
    }
}
