// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique() {
    let ids = [
        VIDEO_ID,
        CANVAS_ID,
        START_OVERLAY_ID,
        START_BUTTON_ID,
        HUD_SCORE_ID,
        HUD_LEVEL_ID,
        BANNER_ID,
        PANEL_ID,
        CONFIG_SCRIPT_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "{a:?} is not a valid id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn assets_are_absolute_and_worker_is_js() {
    for path in [RAG_IMAGE, DIRT_IMAGE, SOUND_WIPE, MUSIC_TRACK] {
        assert!(path.starts_with('/'), "{path}");
    }
    assert!(WORKER_URL.ends_with(".js"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn banner_is_shown_briefly() {
    assert!(BANNER_MS > 0 && BANNER_MS <= 5000);
}
