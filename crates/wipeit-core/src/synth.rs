//! Synthetic hand poses for the simulator and tests.
//!
//! Poses are built in a hand-local frame (wrist at the origin, fingers
//! pointing up, one unit = palm length) and then placed at `center` with a
//! uniform `scale` in normalized image coordinates.

use crate::landmarks::{Hand, Landmark, HAND_LANDMARKS};
use glam::Vec2;

// x offsets of the finger bases, thumb side first
const BASE_X: [f32; 5] = [-0.35, -0.3, -0.1, 0.1, 0.3];
// y of the finger MCP joints, then the distance between successive joints
const MCP_Y: [f32; 5] = [0.25, 0.9, 1.0, 0.95, 0.85];
const SEGMENT: [f32; 5] = [0.3, 0.35, 0.38, 0.35, 0.28];

fn place(local: &[Vec2; HAND_LANDMARKS], center: Vec2, scale: f32) -> Hand {
    // local (0, 0.5) is about the middle of the palm
    let mid_palm = Vec2::new(0.0, 0.5);
    Hand::new(
        local
            .iter()
            .map(|p| {
                // image y grows downwards
                let v = (*p - mid_palm) * scale;
                let q = center + Vec2::new(v.x, -v.y);
                Landmark::new(q.x, q.y, 0.0)
            })
            .collect(),
    )
}

fn pose(extended: [bool; 5]) -> [Vec2; HAND_LANDMARKS] {
    let mut pts = [Vec2::ZERO; HAND_LANDMARKS];
    for finger in 0..5 {
        let base = 1 + finger * 4;
        let mcp = Vec2::new(BASE_X[finger], MCP_Y[finger]);
        let seg = SEGMENT[finger];
        pts[base] = mcp;
        if extended[finger] {
            for j in 1..4 {
                pts[base + j] = mcp + Vec2::new(0.0, seg * j as f32);
            }
        } else {
            // curled back down towards the palm
            pts[base + 1] = mcp + Vec2::new(0.0, seg * 0.8);
            pts[base + 2] = mcp + Vec2::new(0.0, seg * 0.4);
            pts[base + 3] = mcp + Vec2::new(0.0, -seg * 0.3);
        }
    }
    pts
}

/// Flat open hand: every finger straight and parallel.
pub fn open_hand(center: Vec2, scale: f32) -> Hand {
    place(&pose([true; 5]), center, scale)
}

/// Closed fist: every fingertip folded back below its PIP joint.
pub fn fist(center: Vec2, scale: f32) -> Hand {
    place(&pose([false; 5]), center, scale)
}

/// Index and middle fingers extended, ring and pinky curled.
pub fn scissors(center: Vec2, scale: f32) -> Hand {
    place(&pose([false, true, true, false, false]), center, scale)
}
