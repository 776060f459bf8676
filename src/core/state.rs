//! Per-widget model: everything the DOM layer renders from.
//!
//! `LabState` is created on mount and dropped on unmount. Event handlers and
//! the frame callback mutate it; they never touch each other directly.

use super::constants::{CLICK_SLOP_PX, GRID_REGION_LABEL, TILE_WIDTH_PX};
use super::depth::{depth_factor, tile_opacity};
use super::drag::DragTracker;
use super::fx::{EffectiveFx, FxConfig, FxEnvironment};
use super::layout::{angle_step_deg, ring_radius_px, stacking_order, tile_angle_deg};
use super::projects::Project;
use super::rotation::{FrameInput, Rotation, SpinGates};
use super::view_mode::ViewMode;

/// Per-tile render hints for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileHint {
    pub depth: f64,
    pub opacity: f64,
    pub z_index: i32,
}

#[derive(Clone, Debug)]
pub struct LabState {
    projects: Vec<Project>,
    view: ViewMode,
    rotation: Rotation,
    drag: DragTracker,
    selection: Option<usize>,
    pointer_inside: bool,
    focus_within: bool,
    reduced_motion: bool,
    fx: FxConfig,
    cores: Option<u32>,
    radius_px: f64,
}

impl LabState {
    pub fn new(
        projects: Vec<Project>,
        view: ViewMode,
        reduced_motion: bool,
        cores: Option<u32>,
    ) -> Self {
        let radius_px = ring_radius_px(projects.len(), TILE_WIDTH_PX);
        Self {
            projects,
            view: view.under_motion_pref(reduced_motion),
            rotation: Rotation::new(),
            drag: DragTracker::default(),
            selection: None,
            pointer_inside: false,
            focus_within: false,
            reduced_motion,
            fx: FxConfig::default(),
            cores,
            radius_px,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn dragging(&self) -> bool {
        self.drag.dragging()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn radius_px(&self) -> f64 {
        self.radius_px
    }

    /// Switch views. Returns true if the mode changed.
    pub fn set_view(&mut self, mode: ViewMode) -> bool {
        if self.view == mode {
            return false;
        }
        self.view = mode;
        if mode.is_grid() {
            self.drag.pointer_up();
            _ = self.drag.frame_sample();
            self.rotation.halt();
            self.pointer_inside = false;
            self.focus_within = false;
        }
        true
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        self.set_view(self.view.toggled());
        self.view
    }

    /// Apply a reduced-motion change. Returns true if the view changed.
    /// Turning the preference off leaves the current view alone.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        self.reduced_motion = reduced;
        if reduced {
            self.rotation.halt();
            return self.set_view(ViewMode::Grid);
        }
        false
    }

    /// The frame loop runs only while the ring is on screen.
    pub fn should_animate(&self) -> bool {
        self.view == ViewMode::Carousel
    }

    pub fn set_pointer_inside(&mut self, inside: bool) {
        self.pointer_inside = inside;
    }

    pub fn set_focus_within(&mut self, within: bool) {
        self.focus_within = within;
    }

    /// Hovered or keyboard-focused; either pauses auto-spin.
    pub fn engaged(&self) -> bool {
        self.pointer_inside || self.focus_within
    }

    pub fn pointer_down(&mut self, x: f64) {
        if self.view == ViewMode::Carousel {
            self.drag.pointer_down(x);
        }
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.drag.pointer_move(x);
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.pointer_leave();
        self.pointer_inside = false;
    }

    /// A click right after a real drag is the end of the drag, not a tile
    /// activation.
    pub fn activation_allowed(&self) -> bool {
        self.drag.travel_px().abs() <= CLICK_SLOP_PX
    }

    /// Rotate by whole tiles; positive brings the next tile to the front.
    pub fn step_tiles(&mut self, tiles: i32, now_ms: f64) -> bool {
        if self.view != ViewMode::Carousel {
            return false;
        }
        let step = angle_step_deg(self.projects.len());
        self.rotation.nudge(-(tiles as f64) * step, now_ms);
        true
    }

    /// Accessible name of the grid region.
    pub fn grid_label(&self) -> &'static str {
        GRID_REGION_LABEL
    }

    /// Wheel over the ring. Ignored outside carousel view.
    pub fn wheel(&mut self, dx: f64, dy: f64, now_ms: f64) -> bool {
        if self.view != ViewMode::Carousel {
            return false;
        }
        self.rotation.wheel(dx, dy, now_ms);
        true
    }

    pub fn gates(&self) -> SpinGates {
        SpinGates {
            reduced_motion: self.reduced_motion,
            grid: self.view.is_grid(),
            hovered: self.engaged(),
            modal_open: self.selection.is_some(),
        }
    }

    /// Collect this frame's input. Consumes pending drag motion.
    pub fn frame_input(&mut self, dt_ms: f64, now_ms: f64) -> FrameInput {
        FrameInput {
            dt_ms,
            now_ms,
            drag: self.drag.frame_sample(),
            gates: self.gates(),
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt_ms: f64, now_ms: f64) {
        let input = self.frame_input(dt_ms, now_ms);
        self.rotation.tick(&input);
    }

    /// Open the lightbox on `index`. Out-of-range indices are refused.
    pub fn open(&mut self, index: usize, now_ms: f64) -> Option<&Project> {
        if index >= self.projects.len() {
            log::warn!("[lightbox] no project at index {}", index);
            return None;
        }
        self.selection = Some(index);
        self.rotation.touch(now_ms);
        self.projects.get(index)
    }

    /// Close the lightbox; returns the index that was open.
    pub fn close(&mut self, now_ms: f64) -> Option<usize> {
        let prev = self.selection.take();
        if prev.is_some() {
            self.rotation.touch(now_ms);
        }
        prev
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selected project, or `None` if nothing (valid) is selected.
    pub fn selected(&self) -> Option<&Project> {
        self.selection.and_then(|i| self.projects.get(i))
    }

    pub fn fx(&self) -> FxConfig {
        self.fx
    }

    pub fn set_fx(&mut self, fx: FxConfig) {
        self.fx = fx;
    }

    pub fn fx_environment(&self) -> FxEnvironment {
        FxEnvironment {
            reduced_motion: self.reduced_motion,
            cores: self.cores,
        }
    }

    pub fn effective_fx(&self) -> EffectiveFx {
        self.fx.effective(&self.fx_environment())
    }

    /// Depth, opacity and stacking for every tile at the current angle.
    pub fn tile_hints(&self) -> Vec<TileHint> {
        let count = self.projects.len();
        let angle = self.rotation.angle_deg();
        let z = stacking_order(count, self.radius_px, angle);
        (0..count)
            .map(|i| {
                let depth = depth_factor(tile_angle_deg(i, count), angle);
                TileHint {
                    depth,
                    opacity: tile_opacity(depth),
                    z_index: z[i],
                }
            })
            .collect()
    }
}
