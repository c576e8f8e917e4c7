//! Hand landmark types as produced by the external hand-landmark model.
//!
//! Coordinates are normalized to the source frame: `x` and `y` are in
//! `[0, 1]` relative to width and height, `z` is a relative depth that the
//! game never uses for logic.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of landmarks in a complete hand.
pub const HAND_LANDMARKS: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmark indices of the four non-thumb fingers as `[mcp, pip, dip, tip]`.
pub const FINGERS: [[usize; 4]; 4] = [
    [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

/// Skeleton edges between anatomically adjacent landmarks.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// Ring level of a landmark: 0 for the wrist, 1..=4 along each finger outwards.
#[inline]
pub fn ring_level(index: usize) -> usize {
    if index == WRIST {
        0
    } else {
        (index - 1) % 4 + 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Position in pixels for a surface of the given size.
    #[inline]
    pub fn to_pixels(&self, viewport: Viewport) -> Vec2 {
        Vec2::new(self.x * viewport.width, self.y * viewport.height)
    }
}

/// Pixel size of the drawing surface the normalized coordinates map onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
            .then_some(Self { width, height })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn centered(center: Vec2, side: f32) -> Self {
        Self {
            min: center - Vec2::splat(side / 2.0),
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// One detected hand. Complete hands have exactly 21 landmarks; malformed
/// model output is kept as-is so that consumers can reject it instead of
/// panicking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub points: Vec<Landmark>,
}

impl Hand {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.points.len() == HAND_LANDMARKS
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }

    /// Pixel-space bounding box of all landmarks, `None` for an empty or
    /// non-finite hand.
    pub fn pixel_bounds(&self, viewport: Viewport) -> Option<Rect> {
        let mut iter = self.points.iter().filter(|p| p.is_finite());
        let first = iter.next()?.to_pixels(viewport);
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            let px = p.to_pixels(viewport);
            (min.min(px), max.max(px))
        });
        Some(Rect {
            min,
            size: max - min,
        })
    }
}

/// Hands found in one frame plus the timestamp of the frame they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionResult {
    pub hands: SmallVec<[Hand; 2]>,
    pub timestamp_ms: f64,
}

impl DetectionResult {
    pub fn new(hands: impl IntoIterator<Item = Hand>, timestamp_ms: f64) -> Self {
        Self {
            hands: hands.into_iter().collect(),
            timestamp_ms,
        }
    }

    /// The hand that drives the rag. Additional hands are only drawn.
    #[inline]
    pub fn primary_hand(&self) -> Option<&Hand> {
        self.hands.first()
    }
}
