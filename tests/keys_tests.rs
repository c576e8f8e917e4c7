// Host-side tests for keyboard shortcuts.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use keys::*;

#[test]
fn shortcuts_map_to_actions() {
    assert_eq!(key_action("h"), Some(KeyAction::ToggleHelper));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleHelper));
    assert_eq!(key_action("l"), Some(KeyAction::ToggleLabels));
    assert_eq!(key_action("Escape"), Some(KeyAction::Stop));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["Enter", " ", "x", "Esc", ""] {
        assert_eq!(key_action(key), None, "{key:?}");
    }
}
