//! Game session state: score, level and the live dirt set.
//!
//! The session is the single owner of the dirt targets. The spawner inserts
//! (bounded by the current level's cap) and the wipe test removes; nothing
//! else mutates the set.

use crate::collision::{rag_footprint, wipe_targets};
use crate::config::GameConfig;
use crate::dirt::{DirtId, DirtSpawner, DirtTarget};
use crate::gesture::{classify, Gesture, GestureThresholds};
use crate::landmarks::{DetectionResult, Rect, Viewport};
use crate::level::{LevelConfig, LevelTable};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started,
    Stopped,
    Spawned { id: DirtId, position: Vec2 },
    Wiped { id: DirtId },
    LevelUp { from: usize, to: usize },
}

pub struct GameSession {
    levels: LevelTable,
    gesture: GestureThresholds,
    rag_anchor: usize,
    rag_scale: f32,
    dirt_size: f32,
    score: u32,
    level: usize,
    started: bool,
    targets: Vec<DirtTarget>,
    spawner: DirtSpawner,
    rng: StdRng,
    next_id: u64,
    last_gesture: Gesture,
}

impl GameSession {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            levels: config.levels.clone(),
            gesture: config.gesture,
            rag_anchor: config.rag_anchor,
            rag_scale: config.rag_scale,
            dirt_size: config.dirt_size,
            score: 0,
            level: 0,
            started: false,
            targets: Vec::new(),
            spawner: DirtSpawner::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            last_gesture: Gesture::Unknown,
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn targets(&self) -> &[DirtTarget] {
        &self.targets
    }

    #[inline]
    pub fn spawner(&self) -> &DirtSpawner {
        &self.spawner
    }

    #[inline]
    pub fn level_config(&self) -> &LevelConfig {
        self.levels.get(self.level)
    }

    #[inline]
    pub fn spawn_interval(&self) -> Duration {
        self.level_config().spawn_interval()
    }

    #[inline]
    pub fn max_dirt(&self) -> usize {
        self.level_config().max_dirt
    }

    #[inline]
    pub fn dirt_size(&self) -> f32 {
        self.dirt_size
    }

    #[inline]
    pub fn last_gesture(&self) -> Gesture {
        self.last_gesture
    }

    /// Resets score, level and dirt and arms the spawner.
    pub fn start(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        self.score = 0;
        self.level = 0;
        self.targets.clear();
        self.last_gesture = Gesture::Unknown;
        self.started = true;
        self.spawner.start(now, self.spawn_interval());
        log::info!(
            "[game] started: interval={}ms cap={}",
            self.level_config().speed,
            self.max_dirt()
        );
        events.push(GameEvent::Started);
    }

    /// Halts spawning and scoring. Score, level and dirt stay visible.
    pub fn stop(&mut self, events: &mut Vec<GameEvent>) {
        if !self.started {
            return;
        }
        self.started = false;
        self.spawner.stop();
        log::info!("[game] stopped at score={} level={}", self.score, self.level);
        events.push(GameEvent::Stopped);
    }

    /// Inserts a target if the session is running and below the current cap.
    pub fn spawn_target_at(&mut self, position: Vec2) -> Option<DirtId> {
        if !self.started || self.targets.len() >= self.max_dirt() {
            return None;
        }
        let id = DirtId(self.next_id);
        self.next_id += 1;
        self.targets.push(DirtTarget { id, position });
        Some(id)
    }

    /// Runs the spawn timer; inserts at most one random target.
    pub fn poll_spawner(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        if !self.spawner.poll(now, self.spawn_interval()) {
            return;
        }
        let position = Vec2::new(self.rng.gen::<f32>(), self.rng.gen::<f32>());
        if let Some(id) = self.spawn_target_at(position) {
            log::debug!(
                "[spawn] {:?} at ({:.2},{:.2}) live={}",
                id,
                position.x,
                position.y,
                self.targets.len()
            );
            events.push(GameEvent::Spawned { id, position });
        }
    }

    /// Footprint of the rag for the first hand of `detection`, if any.
    pub fn rag_footprint(&self, detection: &DetectionResult, viewport: Viewport) -> Option<Rect> {
        let hand = detection.primary_hand()?;
        rag_footprint(hand, viewport, self.rag_anchor, self.rag_scale)
    }

    /// Classifies the first hand and, on a paper gesture, wipes every dirt
    /// target under the rag. Returns the gesture seen.
    pub fn apply_detection(
        &mut self,
        detection: &DetectionResult,
        viewport: Option<Viewport>,
        events: &mut Vec<GameEvent>,
    ) -> Gesture {
        let gesture = classify(detection.primary_hand(), &self.gesture);
        if gesture != self.last_gesture {
            log::debug!("[game] gesture {:?} -> {:?}", self.last_gesture, gesture);
            self.last_gesture = gesture;
        }
        if !self.started || gesture != Gesture::Paper {
            return gesture;
        }
        let Some(viewport) = viewport else {
            return gesture;
        };
        let Some(footprint) = self.rag_footprint(detection, viewport) else {
            return gesture;
        };
        let hits = wipe_targets(&mut self.targets, footprint, viewport, self.dirt_size);
        for id in hits {
            events.push(GameEvent::Wiped { id });
            self.add_point(events);
        }
        gesture
    }

    fn add_point(&mut self, events: &mut Vec<GameEvent>) {
        self.score += 1;
        let level = self.levels.level_for_score(self.score);
        if level != self.level {
            let from = self.level;
            self.level = level;
            log::info!(
                "[game] level {} -> {} at score {} (interval={}ms cap={})",
                from,
                level,
                self.score,
                self.level_config().speed,
                self.max_dirt()
            );
            events.push(GameEvent::LevelUp { from, to: level });
        }
    }

    /// One frame of game logic: spawn timer, then the wipe test against the
    /// most recent detection. Wiped targets are removed, so re-applying the
    /// same detection never scores twice.
    pub fn update(
        &mut self,
        now: Duration,
        latest: Option<&DetectionResult>,
        viewport: Option<Viewport>,
        events: &mut Vec<GameEvent>,
    ) {
        self.poll_spawner(now, events);
        if let Some(detection) = latest {
            self.apply_detection(detection, viewport, events);
        }
    }
}
