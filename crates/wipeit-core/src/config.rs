//! Runtime configuration. Every field has a default, so an empty JSON object
//! is a valid config.

use crate::constants::{DIRT_SIZE_PX, MUSIC_VOLUME, RAG_ANCHOR, RAG_SCALE, WIPE_VOLUME};
use crate::error::ConfigError;
use crate::gesture::GestureThresholds;
use crate::landmarks::HAND_LANDMARKS;
use crate::level::LevelTable;
use crate::render::RenderConfig;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub levels: LevelTable,
    pub gesture: GestureThresholds,
    pub rag_anchor: usize,
    pub rag_scale: f32,
    pub dirt_size: f32,
    pub wipe_volume: f32,
    pub music_volume: f32,
    pub render: RenderConfig,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: LevelTable::default(),
            gesture: GestureThresholds::default(),
            rag_anchor: RAG_ANCHOR,
            rag_scale: RAG_SCALE,
            dirt_size: DIRT_SIZE_PX,
            wipe_volume: WIPE_VOLUME,
            music_volume: MUSIC_VOLUME,
            render: RenderConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let mut cfg: GameConfig = serde_json::from_str(s)?;
        cfg.wipe_volume = cfg.wipe_volume.clamp(0.0, 1.0);
        cfg.music_volume = cfg.music_volume.clamp(0.0, 1.0);
        if !(cfg.rag_scale.is_finite() && cfg.rag_scale > 0.0) {
            cfg.rag_scale = RAG_SCALE;
        }
        if cfg.rag_anchor >= HAND_LANDMARKS {
            cfg.rag_anchor = RAG_ANCHOR;
        }
        if !(cfg.dirt_size.is_finite() && cfg.dirt_size > 0.0) {
            cfg.dirt_size = DIRT_SIZE_PX;
        }
        Ok(cfg)
    }
}
