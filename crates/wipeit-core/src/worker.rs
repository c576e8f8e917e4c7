//! Landmark worker protocol and the result mailbox.
//!
//! The render loop posts `detect` requests and never waits for the answer.
//! Answers land in a single-slot mailbox: a newer result overwrites an older
//! one that was not consumed yet. There is no request/response correlation;
//! a result for an older frame is applied like any other.

use crate::error::WorkerError;
use crate::landmarks::{DetectionResult, Hand, Landmark};
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const MSG_DETECT: &str = "detect";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Loading,
    Ready,
}

/// Metadata of a `detect` request. The pixel buffer travels next to it as a
/// transferable, so it is not part of this struct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectRequest {
    pub width: u32,
    pub height: u32,
    pub timestamp: f64,
}

/// Result object as produced by the hand-landmark model. Only `landmarks`
/// is consumed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WireResults {
    #[serde(default)]
    pub landmarks: Vec<Vec<Landmark>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerResponse {
    Results {
        #[serde(default)]
        results: WireResults,
        #[serde(default)]
        timestamp: f64,
    },
    Status {
        // older worker builds posted the status under `results`
        #[serde(alias = "results")]
        status: WorkerStatus,
    },
}

impl WorkerResponse {
    pub fn from_json(s: &str) -> Result<Self, WorkerError> {
        serde_json::from_str(s).map_err(|e| WorkerError::Malformed(e.to_string()))
    }
}

impl From<(WireResults, f64)> for DetectionResult {
    fn from((results, timestamp_ms): (WireResults, f64)) -> Self {
        DetectionResult::new(results.landmarks.into_iter().map(Hand::new), timestamp_ms)
    }
}

/// Sending half of a single-slot mailbox.
pub struct MailboxSender<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for MailboxSender<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> MailboxSender<T> {
    /// Stores `value`, returning true if it replaced an unconsumed one.
    pub fn post(&self, value: T) -> bool {
        self.slot.borrow_mut().replace(value).is_some()
    }
}

/// Receiving half of a single-slot mailbox.
pub struct MailboxReceiver<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> MailboxReceiver<T> {
    pub fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

pub fn mailbox<T>() -> (MailboxSender<T>, MailboxReceiver<T>) {
    let slot = Rc::new(RefCell::new(None));
    (
        MailboxSender { slot: slot.clone() },
        MailboxReceiver { slot },
    )
}

/// The message handler side of a worker: tracks readiness and forwards
/// results into the mailbox. Cloned into the worker's `onmessage` callback.
#[derive(Clone)]
pub struct WorkerLink {
    status: Rc<Cell<WorkerStatus>>,
    results: MailboxSender<DetectionResult>,
}

impl WorkerLink {
    pub fn new() -> (Self, MailboxReceiver<DetectionResult>) {
        let (tx, rx) = mailbox();
        (
            Self {
                status: Rc::new(Cell::new(WorkerStatus::Loading)),
                results: tx,
            },
            rx,
        )
    }

    #[inline]
    pub fn status(&self) -> WorkerStatus {
        self.status.get()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.status.get() == WorkerStatus::Ready
    }

    pub fn dispatch(&self, response: WorkerResponse) {
        match response {
            WorkerResponse::Status { status } => {
                log::info!("[worker] status {:?}", status);
                self.status.set(status);
            }
            WorkerResponse::Results { results, timestamp } => {
                // a result implies the model is loaded even if the status got lost
                self.status.set(WorkerStatus::Ready);
                let detection = DetectionResult::from((results, timestamp));
                log::trace!(
                    "[worker] {} hand(s) @ {:.1}ms",
                    detection.hands.len(),
                    timestamp
                );
                if self.results.post(detection) {
                    log::trace!("[worker] unconsumed result overwritten");
                }
            }
        }
    }

    pub fn dispatch_json(&self, json: &str) -> Result<(), WorkerError> {
        self.dispatch(WorkerResponse::from_json(json)?);
        Ok(())
    }
}

/// The request side of a landmark worker.
pub trait LandmarkWorker {
    fn is_ready(&self) -> bool;
    /// Captures the current frame and posts it. Must not block on the reply.
    fn detect(&mut self, timestamp_ms: f64) -> Result<(), WorkerError>;
}

/// Lets a frame through only when the video clock has moved.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    last_video_time: Option<f64>,
}

impl FrameGate {
    pub fn advance(&mut self, video_time: f64) -> bool {
        if self.last_video_time == Some(video_time) {
            return false;
        }
        self.last_video_time = Some(video_time);
        true
    }

    pub fn reset(&mut self) {
        self.last_video_time = None;
    }
}
