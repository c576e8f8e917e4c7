// Host-side tests for overlay text and slider parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod hud {
    include!("../src/hud.rs");
}

use hud::*;

#[test]
fn levels_are_shown_one_based() {
    assert_eq!(level_text(0), "Level: 1");
    assert_eq!(level_banner(1), "level 2");
    assert_eq!(score_text(12), "Score: 12");
}

#[test]
fn start_overlay_copy() {
    assert_eq!(TITLE, "Welcome to the game WipeIt");
    assert_eq!(START_LABEL, "start the game");
    assert!(DESCRIPTION.iter().any(|l| l.contains("camera")));
}

#[test]
fn css_px_formats_pixels() {
    assert_eq!(css_px(640), "640px");
}

#[test]
fn volume_is_clamped() {
    assert_eq!(parse_volume("0.25", 0.5), 0.25);
    assert_eq!(parse_volume(" 1.5 ", 0.5), 1.0);
    assert_eq!(parse_volume("-3", 0.5), 0.0);
}

#[test]
fn bad_volume_keeps_current() {
    assert_eq!(parse_volume("", 0.4), 0.4);
    assert_eq!(parse_volume("loud", 0.4), 0.4);
    assert_eq!(parse_volume("NaN", 0.4), 0.4);
}
