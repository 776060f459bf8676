// Host-side tests for the widget model: view switching, lightbox flow,
// reduced motion and idle auto-spin working together.

use lab_carousel::core::*;

const FRAME: f64 = 16.0;

fn carousel() -> LabState {
    LabState::new(default_projects(), ViewMode::Carousel, false, Some(8))
}

/// Run frames from `from_ms` up to and including `to_ms`.
fn run(state: &mut LabState, from_ms: f64, to_ms: f64) -> f64 {
    let mut now = from_ms;
    while now < to_ms {
        now = (now + FRAME).min(to_ms);
        state.tick(FRAME, now);
    }
    now
}

#[test]
fn toggling_view_switches_between_ring_and_grid() {
    let mut s = carousel();
    assert_eq!(s.view(), ViewMode::Carousel);
    assert!(s.should_animate());

    assert_eq!(s.toggle_view(), ViewMode::Grid);
    assert!(!s.should_animate());
    assert_eq!(s.projects().len(), 6);
    assert_eq!(s.grid_label(), "Project grid");

    assert_eq!(s.toggle_view(), ViewMode::Carousel);
    assert!(s.should_animate());
}

#[test]
fn toggle_label_describes_the_next_view() {
    assert_eq!(ViewMode::Carousel.toggle_text(), "View as Grid");
    assert_eq!(ViewMode::Grid.toggle_text(), "View as Carousel");
}

#[test]
fn opening_a_tile_selects_it_and_closing_clears() {
    let mut s = carousel();
    let title = s.open(2, 0.0).map(|p| p.title.clone());
    assert_eq!(title.as_deref(), Some("Project Gamma"));
    assert_eq!(s.selection(), Some(2));
    assert!(s.gates().modal_open);

    assert_eq!(s.close(10.0), Some(2));
    assert_eq!(s.selected(), None);
    assert_eq!(s.close(20.0), None);
}

#[test]
fn out_of_range_selection_is_refused() {
    let mut s = carousel();
    assert!(s.open(6, 0.0).is_none());
    assert!(s.open(usize::MAX, 0.0).is_none());
    assert_eq!(s.selection(), None);
    assert!(s.selected().is_none());
}

#[test]
fn reduced_motion_forces_grid_and_disables_fx() {
    let mut s = carousel();
    s.set_fx(FxConfig {
        enabled: true,
        ..FxConfig::default()
    });
    assert!(s.effective_fx().active);

    assert!(s.set_reduced_motion(true));
    assert_eq!(s.view(), ViewMode::Grid);
    assert!(!s.effective_fx().active);
    assert!(!s.rotation().auto_spin());

    // idempotent
    assert!(!s.set_reduced_motion(true));
    assert_eq!(s.view(), ViewMode::Grid);
    assert!(!s.effective_fx().active);
}

#[test]
fn reduced_motion_at_startup_overrides_requested_carousel() {
    let s = LabState::new(default_projects(), ViewMode::Carousel, true, Some(8));
    assert_eq!(s.view(), ViewMode::Grid);
}

#[test]
fn dragging_suppresses_auto_spin_and_release_leaves_inertia() {
    let mut s = carousel();
    s.tick(FRAME, 0.0);
    assert!(s.rotation().auto_spin());

    s.pointer_down(100.0);
    s.pointer_move(130.0);
    s.tick(FRAME, 16.0);
    assert!(s.dragging());
    assert!(!s.rotation().auto_spin());
    assert_eq!(s.rotation().velocity_deg(), 0.0);

    s.pointer_move(140.0);
    s.pointer_up();
    s.tick(FRAME, 32.0);
    assert!(!s.dragging());
    assert!(s.rotation().velocity_deg() > 0.0);
    assert!(!s.activation_allowed());
}

#[test]
fn short_press_still_activates_tiles() {
    let mut s = carousel();
    s.pointer_down(10.0);
    s.pointer_move(12.0);
    s.pointer_up();
    assert!(s.activation_allowed());
}

#[test]
fn auto_spin_resumes_after_idle_only_without_modal() {
    let mut s = carousel();
    assert!(s.wheel(0.0, 20.0, 0.0));
    let now = run(&mut s, 0.0, IDLE_RESUME_MS - 1.0);
    assert!(!s.rotation().auto_spin());

    let now = run(&mut s, now, IDLE_RESUME_MS + FRAME);
    assert!(s.rotation().auto_spin());

    // a modal holds it off, and closing counts as an interaction
    s.open(0, now);
    let now = run(&mut s, now, now + 3.0 * IDLE_RESUME_MS);
    assert!(!s.rotation().auto_spin());
    s.close(now);
    let now = run(&mut s, now, now + IDLE_RESUME_MS - 1.0);
    assert!(!s.rotation().auto_spin());
    run(&mut s, now, now + 2.0 * FRAME);
    assert!(s.rotation().auto_spin());
}

#[test]
fn hover_and_focus_pause_auto_spin() {
    let mut s = carousel();
    s.set_pointer_inside(true);
    s.tick(FRAME, 5000.0);
    assert!(!s.rotation().auto_spin());

    s.set_pointer_inside(false);
    s.set_focus_within(true);
    s.tick(FRAME, 5016.0);
    assert!(!s.rotation().auto_spin());

    s.set_focus_within(false);
    s.tick(FRAME, 5032.0);
    assert!(s.rotation().auto_spin());
}

#[test]
fn grid_ignores_wheel_and_pointer() {
    let mut s = carousel();
    s.toggle_view();
    assert!(!s.wheel(10.0, 10.0, 0.0));
    s.pointer_down(0.0);
    assert!(!s.dragging());
    assert!(!s.step_tiles(1, 0.0));
    assert_eq!(s.rotation().angle_deg(), 0.0);
}

#[test]
fn switching_to_grid_mid_drag_ends_the_drag() {
    let mut s = carousel();
    s.pointer_down(0.0);
    s.pointer_move(50.0);
    s.toggle_view();
    assert!(!s.dragging());
    assert_eq!(s.rotation().velocity_deg(), 0.0);
}

#[test]
fn arrow_steps_bring_next_tile_to_front() {
    let mut s = carousel();
    assert!(s.step_tiles(1, 0.0));
    let hints = s.tile_hints();
    assert!((hints[1].depth - 1.0).abs() < 1e-9);
    assert_eq!(hints[1].z_index, 6);
}

#[test]
fn tile_hints_cover_every_tile_with_floor() {
    let s = carousel();
    let hints = s.tile_hints();
    assert_eq!(hints.len(), 6);
    assert!(hints.iter().all(|h| h.opacity >= DEPTH_OPACITY_FLOOR));
    assert!(hints[0].opacity > hints[3].opacity + 0.15);
}

#[test]
fn empty_project_list_does_not_panic() {
    let mut s = LabState::new(Vec::new(), ViewMode::Carousel, false, None);
    assert_eq!(s.radius_px(), RING_RADIUS_FALLBACK_PX);
    s.tick(FRAME, 0.0);
    assert!(s.tile_hints().is_empty());
    assert!(s.open(0, 0.0).is_none());
    assert!(s.step_tiles(1, 0.0));
}

#[test]
fn motion_just_before_release_still_turns_the_ring() {
    let mut s = carousel();
    s.pointer_down(0.0);
    s.pointer_move(10.0);
    s.tick(FRAME, FRAME);
    let a1 = s.rotation().angle_deg();
    assert!((a1 - 2.0).abs() < 1e-9);

    // three moves and the release all land between two frames
    s.pointer_move(20.0);
    s.pointer_move(30.0);
    s.pointer_move(40.0);
    s.pointer_up();
    s.tick(FRAME, 2.0 * FRAME);
    let a2 = s.rotation().angle_deg();

    // 30 px of pending drag (6 deg) plus the first inertia step (2 deg)
    assert!((a2 - a1 - 8.0).abs() < 1e-9, "moved {}", a2 - a1);
    assert!(s.rotation().velocity_deg() > 0.0);
}
