// Host-side tests for the drag tracker.

use lab_carousel::core::DragTracker;

#[test]
fn pointer_down_starts_drag_with_zero_delta() {
    let mut d = DragTracker::default();
    assert!(!d.dragging());

    d.pointer_down(100.0);
    assert!(d.dragging());
    assert_eq!(d.velocity_px(), 0.0);

    let f = d.frame_sample();
    assert!(f.dragging);
    assert_eq!(f.moved_px, 0.0);
    assert_eq!(f.release_px, None);
}

#[test]
fn velocity_is_latest_sample_not_average() {
    let mut d = DragTracker::default();
    d.pointer_down(0.0);
    d.pointer_move(10.0);
    d.pointer_move(13.0);
    assert_eq!(d.velocity_px(), 3.0);
    assert_eq!(d.travel_px(), 13.0);
}

#[test]
fn frame_sample_consumes_accumulated_motion() {
    let mut d = DragTracker::default();
    d.pointer_down(50.0);
    d.pointer_move(60.0);
    d.pointer_move(55.0);

    let f = d.frame_sample();
    assert_eq!(f.moved_px, 5.0);

    // nothing moved since the last frame
    let f = d.frame_sample();
    assert_eq!(f.moved_px, 0.0);
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut d = DragTracker::default();
    d.pointer_move(10.0);
    d.pointer_move(40.0);
    assert_eq!(d.velocity_px(), 0.0);
    assert_eq!(d.frame_sample().moved_px, 0.0);
}

#[test]
fn release_velocity_is_available_for_exactly_one_frame() {
    let mut d = DragTracker::default();
    d.pointer_down(0.0);
    d.pointer_move(8.0);
    d.pointer_up();
    assert!(!d.dragging());

    let f = d.frame_sample();
    assert!(!f.dragging);
    assert_eq!(f.release_px, Some(8.0));

    assert_eq!(d.frame_sample().release_px, None);
}

#[test]
fn repeated_pointer_up_does_not_reseed_release() {
    let mut d = DragTracker::default();
    d.pointer_down(0.0);
    d.pointer_move(4.0);
    d.pointer_up();
    _ = d.frame_sample();

    d.pointer_leave();
    assert_eq!(d.frame_sample().release_px, None);
}

#[test]
fn new_drag_resets_previous_velocity() {
    let mut d = DragTracker::default();
    d.pointer_down(0.0);
    d.pointer_move(20.0);
    d.pointer_up();
    d.pointer_down(300.0);
    assert_eq!(d.velocity_px(), 0.0);
    assert_eq!(d.travel_px(), 0.0);
    // the unconsumed release from the earlier drag is dropped
    assert_eq!(d.frame_sample().release_px, None);
}

#[test]
fn leaving_mid_drag_releases_like_pointer_up() {
    let mut d = DragTracker::default();
    d.pointer_down(10.0);
    d.pointer_move(4.0);
    d.pointer_leave();
    assert!(!d.dragging());
    assert_eq!(d.frame_sample().release_px, Some(-6.0));
}
