// Host-side tests for the rotation state machine.

use lab_carousel::core::*;

const FRAME: f64 = 16.0;

fn idle_input(now_ms: f64) -> FrameInput {
    FrameInput {
        dt_ms: FRAME,
        now_ms,
        drag: DragFrame::default(),
        gates: SpinGates::default(),
    }
}

fn drag_input(now_ms: f64, moved_px: f64) -> FrameInput {
    FrameInput {
        drag: DragFrame {
            dragging: true,
            moved_px,
            release_px: None,
        },
        ..idle_input(now_ms)
    }
}

fn release_input(now_ms: f64, release_px: f64) -> FrameInput {
    FrameInput {
        drag: DragFrame {
            dragging: false,
            moved_px: 0.0,
            release_px: Some(release_px),
        },
        ..idle_input(now_ms)
    }
}

fn angle_delta(before: f64, after: f64) -> f64 {
    let d = normalize_deg(after - before);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

#[test]
fn auto_spin_starts_when_never_interacted() {
    let mut r = Rotation::new();
    r.tick(&idle_input(0.0));
    assert!(r.auto_spin());
    assert!((r.angle_deg() - FRAME * AUTO_SPIN_DEG_PER_MS).abs() < 1e-9);
}

#[test]
fn drag_rotates_by_factor_and_suppresses_spin_and_inertia() {
    let mut r = Rotation::new();
    r.tick(&idle_input(0.0));
    let before = r.angle_deg();

    r.tick(&drag_input(16.0, 10.0));
    assert!(!r.auto_spin());
    assert_eq!(r.velocity_deg(), 0.0);
    assert!((angle_delta(before, r.angle_deg()) - 10.0 * DRAG_TO_DEG).abs() < 1e-9);
}

#[test]
fn zero_drag_delta_is_a_no_op() {
    let mut r = Rotation::new();
    r.tick(&drag_input(0.0, 0.0));
    assert_eq!(r.angle_deg(), 0.0);
}

#[test]
fn release_seeds_inertia_that_decays_monotonically() {
    let mut r = Rotation::new();
    r.tick(&drag_input(0.0, 5.0));
    r.tick(&release_input(16.0, 6.0));
    assert!(r.inertia_active());
    let mut prev = r.velocity_deg().abs();
    assert!(prev > 0.0);

    let mut now = 32.0;
    for _ in 0..50 {
        r.tick(&idle_input(now));
        let v = r.velocity_deg().abs();
        assert!(v < prev, "velocity must shrink: {} !< {}", v, prev);
        prev = v;
        now += FRAME;
    }
}

#[test]
fn inertia_eventually_clears_to_rest() {
    let mut r = Rotation::new();
    r.tick(&release_input(0.0, 20.0));
    let mut now = 16.0;
    for _ in 0..1000 {
        r.tick(&idle_input(now));
        now += FRAME;
    }
    assert_eq!(r.velocity_deg(), 0.0);
    assert!(!r.inertia_active());
}

#[test]
fn tiny_release_does_not_seed_inertia() {
    let mut r = Rotation::new();
    r.tick(&release_input(0.0, RELEASE_MIN_PX * 0.5));
    assert_eq!(r.velocity_deg(), 0.0);
}

#[test]
fn auto_spin_waits_for_idle_threshold_after_interaction() {
    let mut r = Rotation::new();
    r.wheel(0.0, 30.0, 1000.0);
    assert!(!r.auto_spin());

    let mut now = 1000.0;
    while now < 1000.0 + IDLE_RESUME_MS - FRAME {
        now += FRAME;
        r.tick(&idle_input(now));
        assert!(!r.auto_spin(), "resumed early at {}ms idle", now - 1000.0);
    }

    r.tick(&idle_input(1000.0 + IDLE_RESUME_MS));
    assert!(r.auto_spin());
}

#[test]
fn closed_gates_block_auto_spin() {
    let gates = [
        SpinGates {
            reduced_motion: true,
            ..Default::default()
        },
        SpinGates {
            grid: true,
            ..Default::default()
        },
        SpinGates {
            hovered: true,
            ..Default::default()
        },
        SpinGates {
            modal_open: true,
            ..Default::default()
        },
    ];
    for g in gates {
        let mut r = Rotation::new();
        r.tick(&FrameInput {
            gates: g,
            ..idle_input(10_000.0)
        });
        assert!(!r.auto_spin(), "gate {:?} should hold auto-spin", g);
        assert_eq!(r.angle_deg(), 0.0);
    }
}

#[test]
fn wheel_uses_dominant_axis_and_cancels_spin() {
    let mut r = Rotation::new();
    r.tick(&idle_input(0.0));
    assert!(r.auto_spin());
    let before = r.angle_deg();

    r.wheel(-40.0, 10.0, 50.0);
    assert!(!r.auto_spin());
    assert!((angle_delta(before, r.angle_deg()) - (-40.0 * WHEEL_TO_DEG)).abs() < 1e-9);
    assert_eq!(r.idle_ms(50.0), Some(0.0));
}

#[test]
fn huge_frame_gap_is_clamped() {
    let mut r = Rotation::new();
    r.tick(&FrameInput {
        dt_ms: 60_000.0,
        ..idle_input(0.0)
    });
    assert!(r.angle_deg() <= MAX_FRAME_MS * AUTO_SPIN_DEG_PER_MS + 1e-9);
}

#[test]
fn angle_stays_wrapped() {
    let mut r = Rotation::new();
    for i in 0..100 {
        r.wheel(0.0, 900.0, i as f64);
    }
    assert!(r.angle_deg() >= 0.0 && r.angle_deg() < 360.0);
}
