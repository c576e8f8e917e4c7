// Text shown by the start overlay and the score/level HUD.

pub const TITLE: &str = "Welcome to the game WipeIt";

pub const DESCRIPTION: [&str; 3] = [
    "WipeIt is a game where you have to clean by wiping the dust off the screen.",
    "You need to enable the camera of your computer.",
    "Hold your hand flat and open to wipe the dust off the screen.",
];

pub const START_LABEL: &str = "start the game";

#[inline]
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Levels are 0-based internally and shown 1-based.
#[inline]
pub fn level_text(level: usize) -> String {
    format!("Level: {}", level + 1)
}

#[inline]
pub fn level_banner(level: usize) -> String {
    format!("level {}", level + 1)
}

#[inline]
pub fn css_px(v: u32) -> String {
    format!("{}px", v)
}

/// Parses a 0..1 slider value, falling back to `current` on garbage.
pub fn parse_volume(raw: &str, current: f32) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => current,
    }
}
