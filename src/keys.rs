// Keyboard shortcuts. Kept free of web-sys so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleHelper,
    ToggleLabels,
    Stop,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::ToggleHelper),
        "l" | "L" => Some(KeyAction::ToggleLabels),
        "Escape" => Some(KeyAction::Stop),
        _ => None,
    }
}
