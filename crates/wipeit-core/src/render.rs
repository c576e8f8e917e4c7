//! Frame drawing over an abstract 2D surface.
//!
//! The same [`Renderer`] serves the game and the landmark debug view; the
//! debug layer is a config flag rather than a separate code path.

use crate::constants::{
    CONNECTOR_COLOR, CONNECTOR_LINE_WIDTH, LABEL_COLOR, LABEL_OFFSET_PX, LANDMARK_LINE_WIDTH,
    LANDMARK_RADIUS_PX, RING_COLORS,
};
use crate::landmarks::{
    ring_level, DetectionResult, Hand, Rect, Viewport, HAND_CONNECTIONS, HAND_LANDMARKS,
};
use crate::session::GameSession;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Rag,
    Dirt,
}

/// Minimal drawing API the renderer needs. Implementations must tolerate
/// being called before they are ready; `viewport()` returning `None` makes
/// the renderer skip the frame entirely.
pub trait Surface {
    fn viewport(&self) -> Option<Viewport>;
    fn clear(&mut self);
    fn circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);
    fn text(&mut self, at: Vec2, text: &str, color: &str);
    fn sprite(&mut self, sprite: Sprite, rect: Rect);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub debug_overlay: bool,
    pub landmark_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug_overlay: true,
            landmark_labels: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Clears and redraws: debug skeletons, then the rag, then dirt on top.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        detection: Option<&DetectionResult>,
        session: &GameSession,
    ) {
        let Some(viewport) = surface.viewport() else {
            return;
        };
        surface.clear();

        if let Some(detection) = detection {
            if self.config.debug_overlay {
                for hand in &detection.hands {
                    self.draw_hand(surface, hand, viewport);
                }
            }
            if let Some(rag) = session.rag_footprint(detection, viewport) {
                surface.sprite(Sprite::Rag, rag);
            }
        }

        for target in session.targets() {
            surface.sprite(Sprite::Dirt, target.sprite_rect(viewport, session.dirt_size()));
        }
    }

    fn draw_hand<S: Surface + ?Sized>(&self, surface: &mut S, hand: &Hand, viewport: Viewport) {
        for (i, p) in hand.points.iter().enumerate().take(HAND_LANDMARKS) {
            if !p.is_finite() {
                continue;
            }
            let color = RING_COLORS[ring_level(i)];
            surface.circle(p.to_pixels(viewport), LANDMARK_RADIUS_PX, color, LANDMARK_LINE_WIDTH);
        }

        for (a, b) in HAND_CONNECTIONS {
            if let (Some(from), Some(to)) = (hand.get(a), hand.get(b)) {
                if from.is_finite() && to.is_finite() {
                    surface.line(
                        from.to_pixels(viewport),
                        to.to_pixels(viewport),
                        CONNECTOR_COLOR,
                        CONNECTOR_LINE_WIDTH,
                    );
                }
            }
        }

        if self.config.landmark_labels {
            for (i, p) in hand.points.iter().enumerate().take(HAND_LANDMARKS) {
                if p.is_finite() {
                    let at = p.to_pixels(viewport) + Vec2::splat(LABEL_OFFSET_PX);
                    surface.text(at, &i.to_string(), LABEL_COLOR);
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
    },
    Text {
        at: Vec2,
        text: String,
    },
    Sprite {
        sprite: Sprite,
        rect: Rect,
    },
}

/// Surface that records draw calls instead of rasterizing them. `clear`
/// discards everything recorded so far, like clearing a canvas would.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(viewport: Option<Viewport>) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn resize(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    pub fn sprites(&self, kind: Sprite) -> impl Iterator<Item = &Rect> {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Sprite { sprite, rect } if *sprite == kind => Some(rect),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: &str, _line_width: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, _width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
        });
    }

    fn text(&mut self, at: Vec2, text: &str, _color: &str) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_string(),
        });
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.ops.push(DrawOp::Sprite { sprite, rect });
    }
}
