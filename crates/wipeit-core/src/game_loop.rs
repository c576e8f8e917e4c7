//! One explicit tick of the frame-synchronous pipeline:
//! submit frame → collect result → spawn/wipe → draw.

use crate::clock::as_millis_f64;
use crate::config::GameConfig;
use crate::landmarks::DetectionResult;
use crate::render::{Renderer, Surface};
use crate::session::{GameEvent, GameSession};
use crate::worker::{FrameGate, LandmarkWorker, MailboxReceiver};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A frame was posted to the worker.
    pub submitted: bool,
    /// A new detection result was consumed this tick.
    pub fresh_result: bool,
}

pub struct GameLoop {
    pub session: GameSession,
    pub renderer: Renderer,
    gate: FrameGate,
    inbox: MailboxReceiver<DetectionResult>,
    latest: Option<DetectionResult>,
}

impl GameLoop {
    pub fn new(config: &GameConfig, seed: u64, inbox: MailboxReceiver<DetectionResult>) -> Self {
        Self {
            session: GameSession::new(config, seed),
            renderer: Renderer::new(config.render),
            gate: FrameGate::default(),
            inbox,
            latest: None,
        }
    }

    /// Most recent detection. It keeps being drawn and wiped with until a
    /// newer one arrives.
    #[inline]
    pub fn latest(&self) -> Option<&DetectionResult> {
        self.latest.as_ref()
    }

    pub fn start(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        self.gate.reset();
        self.latest = None;
        self.session.start(now, events);
    }

    pub fn stop(&mut self, events: &mut Vec<GameEvent>) {
        self.session.stop(events);
    }

    pub fn tick<W, S>(
        &mut self,
        now: Duration,
        video_time: Option<f64>,
        worker: &mut W,
        surface: &mut S,
        events: &mut Vec<GameEvent>,
    ) -> TickOutcome
    where
        W: LandmarkWorker + ?Sized,
        S: Surface + ?Sized,
    {
        let mut outcome = TickOutcome::default();

        if let Some(t) = video_time {
            if self.gate.advance(t) {
                if worker.is_ready() {
                    match worker.detect(as_millis_f64(now)) {
                        Ok(()) => outcome.submitted = true,
                        Err(e) => log::warn!("[worker] detect skipped: {}", e),
                    }
                } else {
                    log::debug!("[worker] not ready, frame dropped");
                }
            }
        }

        if let Some(result) = self.inbox.take() {
            self.latest = Some(result);
            outcome.fresh_result = true;
        }

        self.session.update(now, self.latest.as_ref(), surface.viewport(), events);
        self.renderer.draw(surface, self.latest.as_ref(), &self.session);
        outcome
    }
}
