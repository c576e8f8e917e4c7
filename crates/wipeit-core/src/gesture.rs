//! Rock/paper/scissors classification of a single hand.
//!
//! Only [`Gesture::Paper`] (flat open hand) matters for gameplay: it arms the
//! rag. The other poses are reported for logging and the debug overlay.
//!
//! A finger counts as extended when its tip is farther from the wrist than its
//! PIP joint by [`GestureThresholds::extension_ratio`]. Paper additionally
//! requires the four fingers to point roughly the same way: each finger's
//! MCP→tip direction must be within [`GestureThresholds::parallel_min_cos`] of
//! the mean direction.

use crate::constants::{EXTENSION_RATIO, PARALLEL_MIN_COS};
use crate::landmarks::{Hand, FINGERS, WRIST};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureThresholds {
    pub extension_ratio: f32,
    pub parallel_min_cos: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            extension_ratio: EXTENSION_RATIO,
            parallel_min_cos: PARALLEL_MIN_COS,
        }
    }
}

/// Per-finger extension flags, index to pinky. `None` if the hand is unusable.
pub fn finger_extension(hand: &Hand, t: &GestureThresholds) -> Option<[bool; 4]> {
    if !hand.is_complete() {
        return None;
    }
    let wrist = hand.get(WRIST)?;
    if !wrist.is_finite() {
        return None;
    }
    let wrist = wrist.xy();
    let mut out = [false; 4];
    for (slot, [_, pip, _, tip]) in out.iter_mut().zip(FINGERS) {
        let (pip, tip) = (hand.get(pip)?, hand.get(tip)?);
        if !pip.is_finite() || !tip.is_finite() {
            return None;
        }
        let pip_dist = wrist.distance(pip.xy());
        let tip_dist = wrist.distance(tip.xy());
        *slot = tip_dist > pip_dist * t.extension_ratio;
    }
    Some(out)
}

fn fingers_parallel(hand: &Hand, t: &GestureThresholds) -> bool {
    let mut dirs = [Vec2::ZERO; 4];
    for (dir, [mcp, _, _, tip]) in dirs.iter_mut().zip(FINGERS) {
        let (Some(mcp), Some(tip)) = (hand.get(mcp), hand.get(tip)) else {
            return false;
        };
        match (tip.xy() - mcp.xy()).try_normalize() {
            Some(d) => *dir = d,
            None => return false,
        }
    }
    let Some(mean) = dirs.iter().copied().sum::<Vec2>().try_normalize() else {
        return false;
    };
    dirs.iter().all(|d| d.dot(mean) >= t.parallel_min_cos)
}

pub fn classify(hand: Option<&Hand>, t: &GestureThresholds) -> Gesture {
    let Some(hand) = hand else {
        return Gesture::Unknown;
    };
    let Some(ext) = finger_extension(hand, t) else {
        return Gesture::Unknown;
    };
    match ext {
        [true, true, true, true] if fingers_parallel(hand, t) => Gesture::Paper,
        [false, false, false, false] => Gesture::Rock,
        [true, true, false, false] => Gesture::Scissors,
        _ => Gesture::Unknown,
    }
}

/// Whether the hand is a flat open hand. Fails closed on absent or
/// incomplete input.
#[inline]
pub fn is_paper(hand: Option<&Hand>, t: &GestureThresholds) -> bool {
    classify(hand, t) == Gesture::Paper
}
