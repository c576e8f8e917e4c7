// Page wiring and asset locations used by the web frontend.

// Element ids
pub const VIDEO_ID: &str = "webcam";
pub const CANVAS_ID: &str = "game-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-game";
pub const HUD_SCORE_ID: &str = "hud-score";
pub const HUD_LEVEL_ID: &str = "hud-level";
pub const BANNER_ID: &str = "level-banner";
pub const PANEL_ID: &str = "debug-panel";
pub const CONFIG_SCRIPT_ID: &str = "wipeit-config";

// Assets
pub const WORKER_URL: &str = "./landmark-worker.js";
pub const RAG_IMAGE: &str = "/images/rag.png";
pub const DIRT_IMAGE: &str = "/images/dirt.webp";
pub const SOUND_WIPE: &str = "/sounds/wipe.mp3";
pub const MUSIC_TRACK: &str = "/sounds/background.mp3";

// Overlay timing
pub const BANNER_MS: i32 = 1500;

// Landmark index labels
pub const LABEL_FONT: &str = "12px Arial";
