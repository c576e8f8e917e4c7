//! Score thresholds that escalate dirt spawn rate and cap.

use crate::constants::DEFAULT_LEVELS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Score that must be exceeded to leave this level.
    pub score: u32,
    /// Spawn interval in milliseconds.
    pub speed: u64,
    #[serde(rename = "maxDirt", alias = "max_dirt")]
    pub max_dirt: usize,
}

impl LevelConfig {
    #[inline]
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }
}

/// Validated, immutable level table. Never empty; thresholds strictly increase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (index, level) in levels.iter().enumerate() {
            if level.speed == 0 {
                return Err(ConfigError::ZeroInterval { index });
            }
            if index > 0 && level.score <= levels[index - 1].score {
                return Err(ConfigError::UnorderedThreshold {
                    index,
                    threshold: level.score,
                    previous: levels[index - 1].score,
                });
            }
        }
        Ok(Self { levels })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    /// Config for `level`, clamped to the last entry.
    #[inline]
    pub fn get(&self, level: usize) -> &LevelConfig {
        &self.levels[level.min(self.max_level())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> {
        self.levels.iter()
    }

    /// Number of thresholds strictly exceeded by `score`, clamped to the
    /// last level.
    pub fn level_for_score(&self, score: u32) -> usize {
        let passed = self.levels.iter().take_while(|l| score > l.score).count();
        passed.min(self.max_level())
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS
                .iter()
                .map(|&(score, speed, max_dirt)| LevelConfig {
                    score,
                    speed,
                    max_dirt,
                })
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for LevelTable {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let levels = Vec::<LevelConfig>::deserialize(d)?;
        LevelTable::new(levels).map_err(serde::de::Error::custom)
    }
}
