use glam::Vec2;
use wipeit_core::render::DrawOp;
use wipeit_core::{
    synth, DetectionResult, GameConfig, GameSession, RecordingSurface, RenderConfig, Renderer,
    Sprite, Viewport, RING_COLORS,
};

fn viewport() -> Option<Viewport> {
    Viewport::new(640.0, 480.0)
}

fn running_session() -> GameSession {
    let mut session = GameSession::new(&GameConfig::default(), 3);
    let mut events = Vec::new();
    session.start(Default::default(), &mut events);
    session.spawn_target_at(Vec2::new(0.1, 0.1));
    session.spawn_target_at(Vec2::new(0.9, 0.8));
    session
}

fn detection() -> DetectionResult {
    DetectionResult::new([synth::open_hand(Vec2::new(0.5, 0.5), 0.2)], 12.0)
}

fn position_of(ops: &[DrawOp], pred: impl Fn(&DrawOp) -> bool) -> Option<usize> {
    ops.iter().position(pred)
}

#[test]
fn nothing_is_drawn_without_viewport() {
    let session = running_session();
    let mut surface = RecordingSurface::new(None);
    Renderer::default().draw(&mut surface, Some(&detection()), &session);
    assert!(surface.ops.is_empty());
}

#[test]
fn draws_debug_then_rag_then_dirt() {
    let session = running_session();
    let mut surface = RecordingSurface::new(viewport());
    Renderer::new(RenderConfig::default()).draw(&mut surface, Some(&detection()), &session);

    let ops = &surface.ops;
    assert_eq!(ops.first(), Some(&DrawOp::Clear));
    let last_debug = ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Circle { .. } | DrawOp::Line { .. }))
        .expect("debug layer");
    let rag = position_of(ops, |op| matches!(op, DrawOp::Sprite { sprite: Sprite::Rag, .. }))
        .expect("rag");
    let first_dirt = position_of(ops, |op| {
        matches!(op, DrawOp::Sprite { sprite: Sprite::Dirt, .. })
    })
    .expect("dirt");
    assert!(last_debug < rag);
    assert!(rag < first_dirt);
    assert_eq!(surface.sprites(Sprite::Dirt).count(), 2);
}

#[test]
fn debug_layer_has_landmarks_and_connectors() {
    let session = running_session();
    let mut surface = RecordingSurface::new(viewport());
    Renderer::default().draw(&mut surface, Some(&detection()), &session);

    let circles: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { color, .. } => Some(color.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 21);
    assert_eq!(circles[0], RING_COLORS[0]);
    assert_eq!(circles[4], RING_COLORS[4]);
    assert_eq!(circles[5], RING_COLORS[1]);
    let lines = surface
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { .. }))
        .count();
    assert_eq!(lines, 21);
}

#[test]
fn labels_only_when_enabled() {
    let session = running_session();
    let has_text = |config: RenderConfig| {
        let mut surface = RecordingSurface::new(viewport());
        Renderer::new(config).draw(&mut surface, Some(&detection()), &session);
        surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count()
    };
    assert_eq!(has_text(RenderConfig::default()), 0);
    assert_eq!(
        has_text(RenderConfig {
            debug_overlay: true,
            landmark_labels: true
        }),
        21
    );
}

#[test]
fn debug_off_still_draws_rag_and_dirt() {
    let session = running_session();
    let mut surface = RecordingSurface::new(viewport());
    let config = RenderConfig {
        debug_overlay: false,
        landmark_labels: true,
    };
    Renderer::new(config).draw(&mut surface, Some(&detection()), &session);
    assert!(!surface
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::Circle { .. } | DrawOp::Line { .. } | DrawOp::Text { .. })));
    assert_eq!(surface.sprites(Sprite::Rag).count(), 1);
    assert_eq!(surface.sprites(Sprite::Dirt).count(), 2);
}

#[test]
fn no_rag_without_hand() {
    let session = running_session();
    let mut surface = RecordingSurface::new(viewport());
    Renderer::default().draw(&mut surface, None, &session);
    assert_eq!(surface.sprites(Sprite::Rag).count(), 0);
    assert_eq!(surface.sprites(Sprite::Dirt).count(), 2);
}

#[test]
fn redraw_of_same_state_is_identical() {
    let session = running_session();
    let det = detection();
    let renderer = Renderer::default();
    let mut surface = RecordingSurface::new(viewport());

    renderer.draw(&mut surface, Some(&det), &session);
    let first = surface.ops.clone();
    renderer.draw(&mut surface, Some(&det), &session);
    assert_eq!(surface.ops, first);
}
