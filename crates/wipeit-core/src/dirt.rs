//! Dirt targets and the timer that spawns them.

use crate::landmarks::{Rect, Viewport};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirtId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirtTarget {
    pub id: DirtId,
    /// Normalized position in `[0, 1)`.
    pub position: Vec2,
}

impl DirtTarget {
    /// Sprite rectangle in pixels. The sprite is shifted back by its own size
    /// in proportion to the position so it always stays on the surface.
    pub fn sprite_rect(&self, viewport: Viewport, dirt_size: f32) -> Rect {
        let min = self.position * viewport.size() - self.position * dirt_size;
        Rect {
            min,
            size: Vec2::splat(dirt_size),
        }
    }

    #[inline]
    pub fn center_px(&self, viewport: Viewport, dirt_size: f32) -> Vec2 {
        self.sprite_rect(viewport, dirt_size).center()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnerState {
    Idle,
    Running { next_due: Duration },
}

/// Fixed-interval spawn timer. The interval is supplied on every poll so a
/// level change applies from the next tick on.
#[derive(Clone, Debug)]
pub struct DirtSpawner {
    state: SpawnerState,
}

impl Default for DirtSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtSpawner {
    pub fn new() -> Self {
        Self {
            state: SpawnerState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SpawnerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, SpawnerState::Running { .. })
    }

    pub fn start(&mut self, now: Duration, interval: Duration) {
        self.state = SpawnerState::Running {
            next_due: now + interval,
        };
    }

    /// Cancels the pending tick.
    pub fn stop(&mut self) {
        self.state = SpawnerState::Idle;
    }

    /// Returns true when a tick is due at `now`. At most one tick fires per
    /// poll; if the caller fell more than one interval behind, the missed
    /// ticks are dropped and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Duration, interval: Duration) -> bool {
        let SpawnerState::Running { next_due } = self.state else {
            return false;
        };
        if now < next_due {
            return false;
        }
        let mut next = next_due + interval;
        if next <= now {
            next = now + interval;
        }
        self.state = SpawnerState::Running { next_due: next };
        true
    }
}
