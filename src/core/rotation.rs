//! Rotation state machine for the tile ring.
//!
//! One [`Rotation`] lives per mounted widget. The frame loop calls
//! [`Rotation::tick`] once per display refresh; wheel events call
//! [`Rotation::wheel`] directly. Contributions are applied in a fixed
//! precedence: drag, release seeding, inertia, idle resume, auto-spin.

use super::constants::*;
use super::depth::normalize_deg;
use super::drag::DragFrame;

/// Conditions that keep auto-spin from resuming.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinGates {
    pub reduced_motion: bool,
    pub grid: bool,
    pub hovered: bool,
    pub modal_open: bool,
}

impl SpinGates {
    #[inline]
    pub fn open(&self) -> bool {
        !(self.reduced_motion || self.grid || self.hovered || self.modal_open)
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct FrameInput {
    pub dt_ms: f64,
    pub now_ms: f64,
    pub drag: DragFrame,
    pub gates: SpinGates,
}

#[derive(Clone, Debug)]
pub struct Rotation {
    angle_deg: f64,
    velocity_deg: f64,
    auto_spin: bool,
    last_interaction_ms: Option<f64>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

impl Rotation {
    pub fn new() -> Self {
        Self {
            angle_deg: 0.0,
            velocity_deg: 0.0,
            auto_spin: false,
            last_interaction_ms: None,
        }
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn velocity_deg(&self) -> f64 {
        self.velocity_deg
    }

    pub fn auto_spin(&self) -> bool {
        self.auto_spin
    }

    pub fn inertia_active(&self) -> bool {
        self.velocity_deg != 0.0
    }

    /// Milliseconds since the last interaction; `None` before the first one.
    pub fn idle_ms(&self, now_ms: f64) -> Option<f64> {
        self.last_interaction_ms.map(|t| (now_ms - t).max(0.0))
    }

    /// Record a user interaction that should hold off auto-spin.
    pub fn touch(&mut self, now_ms: f64) {
        self.auto_spin = false;
        self.last_interaction_ms = Some(now_ms);
    }

    /// Stop all motion, e.g. when reduced motion switches on.
    pub fn halt(&mut self) {
        self.velocity_deg = 0.0;
        self.auto_spin = false;
    }

    pub fn tick(&mut self, input: &FrameInput) {
        let dt_ms = input.dt_ms.clamp(0.0, MAX_FRAME_MS);
        let drag = &input.drag;

        if drag.dragging {
            if drag.moved_px != 0.0 {
                self.add(drag.moved_px * DRAG_TO_DEG);
            }
            self.velocity_deg = 0.0;
            self.touch(input.now_ms);
        } else {
            // motion between the last frame and pointer up
            if drag.moved_px != 0.0 {
                self.add(drag.moved_px * DRAG_TO_DEG);
            }
            if let Some(residual) = drag.release_px {
                if residual.abs() > RELEASE_MIN_PX {
                    self.velocity_deg = residual * DRAG_TO_DEG;
                }
                self.touch(input.now_ms);
            }
            if self.velocity_deg.abs() > INERTIA_MIN_DEG {
                self.add(self.velocity_deg);
                self.velocity_deg *= INERTIA_DAMPING;
            } else {
                self.velocity_deg = 0.0;
            }
        }

        if !input.gates.open() || drag.dragging {
            self.auto_spin = false;
        } else if !self.auto_spin {
            let idle = self
                .idle_ms(input.now_ms)
                .map_or(true, |ms| ms >= IDLE_RESUME_MS);
            if idle {
                self.auto_spin = true;
            }
        }

        if self.auto_spin && !drag.dragging {
            self.add(dt_ms * AUTO_SPIN_DEG_PER_MS);
        }
    }

    /// Rotate by a fixed amount, e.g. from arrow keys.
    pub fn nudge(&mut self, deg: f64, now_ms: f64) {
        self.add(deg);
        self.touch(now_ms);
    }

    /// Wheel input over the ring. The larger-magnitude axis wins.
    pub fn wheel(&mut self, dx: f64, dy: f64, now_ms: f64) {
        let delta = if dx.abs() > dy.abs() { dx } else { dy };
        self.add(delta * WHEEL_TO_DEG);
        self.touch(now_ms);
    }

    #[inline]
    fn add(&mut self, deg: f64) {
        // kept in [0, 360)
        self.angle_deg = normalize_deg(self.angle_deg + deg);
    }
}
