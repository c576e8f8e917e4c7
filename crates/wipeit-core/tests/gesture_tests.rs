use glam::Vec2;
use wipeit_core::landmarks::{HAND_LANDMARKS, INDEX_TIP};
use wipeit_core::{classify, is_paper, synth, Gesture, GestureThresholds, Hand, Landmark};

fn t() -> GestureThresholds {
    GestureThresholds::default()
}

#[test]
fn absent_hand_is_not_paper() {
    assert!(!is_paper(None, &t()));
    assert_eq!(classify(None, &t()), Gesture::Unknown);
}

#[test]
fn short_hand_is_rejected_without_panicking() {
    for n in [0, 1, 5, 20] {
        let hand = Hand::new(vec![Landmark::new(0.5, 0.5, 0.0); n]);
        assert!(!is_paper(Some(&hand), &t()), "{n} points");
        assert_eq!(classify(Some(&hand), &t()), Gesture::Unknown);
    }
}

#[test]
fn hand_with_extra_points_is_rejected() {
    let mut hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    hand.points.push(Landmark::new(0.5, 0.5, 0.0));
    assert!(!hand.is_complete());
    assert!(!is_paper(Some(&hand), &t()));
    assert_eq!(classify(Some(&hand), &t()), Gesture::Unknown);
}

#[test]
fn flat_open_hand_is_paper() {
    let hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    assert_eq!(hand.points.len(), HAND_LANDMARKS);
    assert!(is_paper(Some(&hand), &t()));
}

#[test]
fn open_hand_is_paper_at_any_position_and_scale() {
    for (x, y, s) in [(0.2, 0.3, 0.1), (0.8, 0.7, 0.25), (0.5, 0.5, 0.05)] {
        let hand = synth::open_hand(Vec2::new(x, y), s);
        assert_eq!(classify(Some(&hand), &t()), Gesture::Paper, "at ({x},{y}) x{s}");
    }
}

#[test]
fn fist_is_rock_not_paper() {
    let hand = synth::fist(Vec2::new(0.5, 0.5), 0.2);
    assert!(!is_paper(Some(&hand), &t()));
    assert_eq!(classify(Some(&hand), &t()), Gesture::Rock);
}

#[test]
fn two_fingers_is_scissors() {
    let hand = synth::scissors(Vec2::new(0.4, 0.6), 0.2);
    assert_eq!(classify(Some(&hand), &t()), Gesture::Scissors);
}

#[test]
fn splayed_index_breaks_paper() {
    let mut hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    // swing the index tip far out sideways; still extended, no longer parallel
    let tip = hand.points[INDEX_TIP];
    hand.points[INDEX_TIP] = Landmark::new(tip.x - 0.5, tip.y + 0.3, 0.0);
    assert!(!is_paper(Some(&hand), &t()));
}

#[test]
fn non_finite_landmark_fails_closed() {
    let mut hand = synth::open_hand(Vec2::new(0.5, 0.5), 0.2);
    hand.points[0] = Landmark::new(f32::NAN, 0.5, 0.0);
    assert_eq!(classify(Some(&hand), &t()), Gesture::Unknown);
}
