/// What one animation frame sees of the pointer.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    pub dragging: bool,
    /// Horizontal pixels moved since the previous frame.
    pub moved_px: f64,
    /// Latest per-move delta, present only on the first frame after release.
    pub release_px: Option<f64>,
}

/// Converts pointer down/move/up into a dragging flag and a horizontal delta.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    dragging: bool,
    start_x: f64,
    last_x: f64,
    velocity_px: f64,
    pending_px: f64,
    release_pending: bool,
}

impl DragTracker {
    pub fn pointer_down(&mut self, x: f64) {
        self.start_x = x;
        self.last_x = x;
        self.velocity_px = 0.0;
        self.pending_px = 0.0;
        self.release_pending = false;
        self.dragging = true;
    }

    pub fn pointer_move(&mut self, x: f64) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        // latest sample, not an average
        self.velocity_px = dx;
        self.pending_px += dx;
    }

    /// Pointer up and cancel end the drag; the last sample becomes the
    /// release velocity.
    pub fn pointer_up(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.release_pending = true;
        }
    }

    /// Leaving the ring mid-drag releases exactly like pointer up.
    #[inline]
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Latest per-move delta in pixels.
    pub fn velocity_px(&self) -> f64 {
        self.velocity_px
    }

    /// Total horizontal travel since pointer down.
    pub fn travel_px(&self) -> f64 {
        self.last_x - self.start_x
    }

    /// Hand the accumulated motion (and a pending release) to one frame.
    pub fn frame_sample(&mut self) -> DragFrame {
        let moved_px = std::mem::take(&mut self.pending_px);
        let release_px = if std::mem::take(&mut self.release_pending) {
            Some(self.velocity_px)
        } else {
            None
        };
        DragFrame {
            dragging: self.dragging,
            moved_px,
            release_px,
        }
    }
}
