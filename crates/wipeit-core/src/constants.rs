// Gameplay and drawing tuning constants shared by the web and native front-ends.

// Gesture classification
// tip must be this much farther from the wrist than the PIP joint
pub const EXTENSION_RATIO: f32 = 1.1;
pub const PARALLEL_MIN_COS: f32 = 0.80; // finger vs. mean finger direction, ~37 degrees

// Rag (wipe tool)
pub const RAG_ANCHOR: usize = 9; // middle finger MCP, roughly the palm center
pub const RAG_SCALE: f32 = 1.0; // footprint side relative to the hand's bounding-box span

// Dirt sprites
pub const DIRT_SIZE_PX: f32 = 100.0;

// Debug overlay
pub const LANDMARK_RADIUS_PX: f32 = 6.0;
pub const LANDMARK_LINE_WIDTH: f32 = 1.0;
pub const CONNECTOR_LINE_WIDTH: f32 = 1.0;
pub const CONNECTOR_COLOR: &str = "#00FF00";
pub const LABEL_COLOR: &str = "#000000";
pub const LABEL_OFFSET_PX: f32 = 5.0;

/// Fill colors per landmark ring level, wrist outwards.
pub const RING_COLORS: [&str; 5] = [
    "#FF0000", // wrist
    "#FFA500",
    "#FFFF00",
    "#008000",
    "#0000FF", // finger tips
];

// Audio
pub const WIPE_VOLUME: f32 = 0.9;
pub const MUSIC_VOLUME: f32 = 0.5;

// Default progression: (score threshold, spawn interval ms, max dirt)
pub const DEFAULT_LEVELS: [(u32, u64, usize); 5] = [
    (5, 1000, 3),
    (15, 700, 5),
    (30, 500, 7),
    (50, 350, 9),
    (80, 250, 12),
];

pub const DEFAULT_SEED: u64 = 42;
