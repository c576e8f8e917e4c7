use glam::Vec2;
use wipeit_core::collision::{rag_footprint, wipe_targets};
use wipeit_core::{synth, DirtId, DirtTarget, Hand, Landmark, Rect, Viewport, RAG_ANCHOR};

fn viewport() -> Viewport {
    Viewport::new(640.0, 480.0).expect("viewport")
}

fn target(id: u64, x: f32, y: f32) -> DirtTarget {
    DirtTarget {
        id: DirtId(id),
        position: Vec2::new(x, y),
    }
}

#[test]
fn footprint_is_square_on_anchor() {
    let hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    let rect = rag_footprint(&hand, viewport(), RAG_ANCHOR, 1.0).expect("footprint");
    let anchor = hand.points[RAG_ANCHOR].to_pixels(viewport());
    assert!((rect.center() - anchor).length() < 1e-3);
    assert_eq!(rect.size.x, rect.size.y);

    let bounds = hand.pixel_bounds(viewport()).expect("bounds");
    assert!((rect.size.x - bounds.size.x.max(bounds.size.y)).abs() < 1e-3);
}

#[test]
fn footprint_scales() {
    let hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    let one = rag_footprint(&hand, viewport(), RAG_ANCHOR, 1.0).expect("footprint");
    let half = rag_footprint(&hand, viewport(), RAG_ANCHOR, 0.5).expect("footprint");
    assert!((half.size.x * 2.0 - one.size.x).abs() < 1e-3);
    assert!((half.center() - one.center()).length() < 1e-3);
}

#[test]
fn no_footprint_for_incomplete_or_degenerate_hand() {
    let short = Hand::new(vec![Landmark::new(0.5, 0.5, 0.0); 10]);
    assert!(rag_footprint(&short, viewport(), RAG_ANCHOR, 1.0).is_none());

    let collapsed = Hand::new(vec![Landmark::new(0.5, 0.5, 0.0); 21]);
    assert!(rag_footprint(&collapsed, viewport(), RAG_ANCHOR, 1.0).is_none());

    let mut long = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    long.points.push(Landmark::new(0.1, 0.1, 0.0));
    assert!(rag_footprint(&long, viewport(), RAG_ANCHOR, 1.0).is_none());
}

#[test]
fn dirt_sprite_stays_on_surface() {
    let vp = viewport();
    for (x, y) in [(0.0, 0.0), (0.999, 0.999), (0.5, 0.25)] {
        let rect = target(0, x, y).sprite_rect(vp, 100.0);
        assert!(rect.min.x >= 0.0 && rect.min.y >= 0.0);
        assert!(rect.max().x <= vp.width && rect.max().y <= vp.height);
    }
}

#[test]
fn wipes_only_targets_centered_inside() {
    let vp = viewport();
    // sprite centers: (50,50), (320,240), (590,430)
    let mut targets = vec![target(1, 0.0, 0.0), target(2, 0.5, 0.5), target(3, 1.0, 1.0)];
    let footprint = Rect::centered(Vec2::new(320.0, 240.0), 100.0);

    let hits = wipe_targets(&mut targets, footprint, vp, 100.0);

    assert_eq!(hits.as_slice(), &[DirtId(2)]);
    let left: Vec<_> = targets.iter().map(|t| t.id).collect();
    assert_eq!(left, vec![DirtId(1), DirtId(3)]);
}

#[test]
fn containment_includes_edges() {
    let rect = Rect::centered(Vec2::new(100.0, 100.0), 50.0);
    assert!(rect.contains(Vec2::new(75.0, 75.0)));
    assert!(rect.contains(Vec2::new(125.0, 125.0)));
    assert!(!rect.contains(Vec2::new(125.1, 100.0)));
}
