//! One mounted carousel: owns its DOM, listeners, frame loop and model.

use crate::announce::Announcer;
use crate::core::{
    initial_view_mode, open_announcement, projects_or_default, save_view_mode, FxConfig,
    LabState, ViewMode,
};
use crate::dom::Listener;
use crate::frame::{Clock, FrameLoop};
use crate::lightbox::Lightbox;
use crate::motion::MotionSensor;
use crate::render::{Shell, ViewDom};
use crate::storage::LocalStore;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const FX_MASTER_ID: &str = "fx-master";
const FX_SCANLINES_ID: &str = "fx-scanlines";
const FX_RGB_SPLIT_ID: &str = "fx-rgb-split";
const FX_DEPTH_FADE_ID: &str = "fx-depth-fade";

/// Changes that may tear down DOM or listeners. They run after the
/// triggering event handler has returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleView,
    ReducedMotion(bool),
    Open(usize),
    Close,
    FxInputsChanged,
    Visibility(bool),
}

pub type Dispatch = Rc<dyn Fn(Action)>;

pub struct Widget {
    document: web::Document,
    mount: web::Element,
    state: Rc<RefCell<LabState>>,
    clock: Clock,
    store: LocalStore,
    dispatch: Dispatch,
    mounted: Cell<bool>,
    frame: RefCell<Option<FrameLoop>>,
    motion: RefCell<Option<MotionSensor>>,
    shell: RefCell<Option<Shell>>,
    view: RefCell<Option<ViewDom>>,
    lightbox: RefCell<Option<Lightbox>>,
    announcer: RefCell<Option<Announcer>>,
    listeners: RefCell<Vec<Listener>>,
}

impl Widget {
    pub fn mount(window: &web::Window, mount: web::Element) -> anyhow::Result<Rc<Self>> {
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let projects = projects_or_default(mount.get_attribute("data-projects").as_deref());
        let cores = hardware_cores(window);
        let store = LocalStore;

        let widget = Rc::new_cyclic(|weak: &Weak<Widget>| {
            let dispatch = make_dispatch(weak.clone());

            let d = dispatch.clone();
            let motion = MotionSensor::new(window, move |reduced| d(Action::ReducedMotion(reduced)));
            let reduced = motion.reduced();
            let view = initial_view_mode(&store, reduced);

            let mut state = LabState::new(projects, view, reduced, cores);
            state.set_fx(fx_from_inputs(&document, state.fx()));

            let w = weak.clone();
            let frame = FrameLoop::new(move |dt_ms| w.upgrade().map_or(false, |w| w.frame(dt_ms)));

            Widget {
                document: document.clone(),
                mount: mount.clone(),
                state: Rc::new(RefCell::new(state)),
                clock: Clock::new(),
                store,
                dispatch,
                mounted: Cell::new(true),
                frame: RefCell::new(Some(frame)),
                motion: RefCell::new(Some(motion)),
                shell: RefCell::new(None),
                view: RefCell::new(None),
                lightbox: RefCell::new(None),
                announcer: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }
        });

        if let Err(e) = widget.build() {
            widget.unmount();
            return Err(e);
        }
        {
            let st = widget.state.borrow();
            log::info!(
                "[lab] mounted projects={} view={} reduced_motion={} cores={:?}",
                st.projects().len(),
                st.view(),
                st.reduced_motion(),
                cores
            );
        }
        Ok(widget)
    }

    fn build(&self) -> anyhow::Result<()> {
        let shell = Shell::build(&self.document, &self.mount, &self.dispatch)?;
        let announcer = Announcer::new(&self.document, &shell.section)?;
        *self.shell.borrow_mut() = Some(shell);
        *self.announcer.borrow_mut() = Some(announcer);
        self.render_view()?;

        let mut listeners = Vec::new();
        for id in [FX_MASTER_ID, FX_SCANLINES_ID, FX_RGB_SPLIT_ID, FX_DEPTH_FADE_ID] {
            if let Some(input) = self.document.get_element_by_id(id) {
                let d = self.dispatch.clone();
                listeners.push(Listener::new(&input, "change", move |_: web::Event| {
                    d(Action::FxInputsChanged)
                }));
            }
        }
        let d = self.dispatch.clone();
        let doc = self.document.clone();
        listeners.push(Listener::new(
            &self.document,
            "visibilitychange",
            move |_: web::Event| d(Action::Visibility(!doc.hidden())),
        ));
        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Tear everything down: stop the loop, close the lightbox, remove all
    /// listeners and the DOM this widget created.
    pub fn unmount(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        if let Some(f) = self.frame.borrow().as_ref() {
            f.stop();
        }
        let lightbox = self.lightbox.borrow_mut().take();
        drop(lightbox);
        let view = self.view.borrow_mut().take();
        drop(view);
        self.listeners.borrow_mut().clear();
        self.motion.borrow_mut().take();
        self.announcer.borrow_mut().take();
        self.shell.borrow_mut().take();
        self.frame.borrow_mut().take();
        log::info!("[lab] unmounted");
    }

    fn apply(&self, action: Action) {
        if !self.mounted.get() {
            return;
        }
        let now = self.clock.now_ms();
        match action {
            Action::ToggleView => {
                let mode = self.state.borrow_mut().toggle_view();
                save_view_mode(&self.store, mode);
                log::info!("[view] {}", mode);
                self.rerender();
            }
            Action::ReducedMotion(reduced) => {
                let changed = self.state.borrow_mut().set_reduced_motion(reduced);
                log::info!("[motion] reduced={}", reduced);
                if changed {
                    save_view_mode(&self.store, ViewMode::Grid);
                    self.rerender();
                } else {
                    self.apply_fx();
                }
            }
            Action::Open(index) => self.open(index, now),
            Action::Close => {
                self.state.borrow_mut().close(now);
                let lightbox = self.lightbox.borrow_mut().take();
                drop(lightbox);
            }
            Action::FxInputsChanged => {
                let current = self.state.borrow().fx();
                let fx = fx_from_inputs(&self.document, current);
                self.state.borrow_mut().set_fx(fx);
                log::info!("[fx] {:?}", self.state.borrow().effective_fx());
                self.apply_fx();
            }
            Action::Visibility(visible) => {
                if let Some(f) = self.frame.borrow().as_ref() {
                    if visible && self.state.borrow().should_animate() {
                        f.start();
                    } else if !visible {
                        f.stop();
                    }
                }
            }
        }
    }

    fn open(&self, index: usize, now_ms: f64) {
        if self.lightbox.borrow().is_some() {
            return;
        }
        let opened = {
            let mut st = self.state.borrow_mut();
            let reduced = st.reduced_motion();
            st.open(index, now_ms).cloned().map(|p| (p, reduced))
        };
        let Some((project, reduced)) = opened else {
            return;
        };
        match Lightbox::open(&self.document, &project, reduced, &self.dispatch) {
            Ok(lightbox) => {
                *self.lightbox.borrow_mut() = Some(lightbox);
                if let Some(a) = self.announcer.borrow().as_ref() {
                    a.announce(&open_announcement(&project.title));
                }
            }
            Err(e) => {
                log::error!("[lightbox] open error: {:?}", e);
                self.state.borrow_mut().close(now_ms);
            }
        }
    }

    fn rerender(&self) {
        if let Err(e) = self.render_view() {
            log::error!("[view] render error: {:?}", e);
        }
    }

    fn render_view(&self) -> anyhow::Result<()> {
        let old = self.view.borrow_mut().take();
        drop(old);

        let mode = self.state.borrow().view();
        if let Some(shell) = self.shell.borrow().as_ref() {
            shell.sync_toggle(mode);
            let view = ViewDom::build(
                &self.document,
                shell.stage(),
                &self.state,
                self.clock,
                &self.dispatch,
            )?;
            *self.view.borrow_mut() = Some(view);
        }
        self.apply_fx();

        if let Some(f) = self.frame.borrow().as_ref() {
            if self.state.borrow().should_animate() && !self.document.hidden() {
                f.start();
            } else {
                f.stop();
            }
        }
        Ok(())
    }

    fn apply_fx(&self) {
        let fx = self.state.borrow().effective_fx();
        if let Some(shell) = self.shell.borrow().as_ref() {
            shell.apply_fx(&fx);
        }
        if let Some(view) = self.view.borrow().as_ref() {
            view.apply_fx(&fx);
        }
    }

    /// One animation frame. Returns false to stop the loop.
    fn frame(&self, dt_ms: f64) -> bool {
        let now = self.clock.now_ms();
        let (angle, radius, hints, depth_fade) = {
            let mut st = self.state.borrow_mut();
            if !st.should_animate() {
                return false;
            }
            st.tick(dt_ms, now);
            (
                st.rotation().angle_deg(),
                st.radius_px(),
                st.tile_hints(),
                st.effective_fx().depth_fade,
            )
        };
        if let Some(view) = self.view.borrow().as_ref() {
            view.apply_frame(angle, radius, &hints, depth_fade);
        }
        true
    }
}

fn make_dispatch(weak: Weak<Widget>) -> Dispatch {
    Rc::new(move |action: Action| {
        let weak = weak.clone();
        spawn_local(async move {
            if let Some(w) = weak.upgrade() {
                w.apply(action);
            }
        });
    })
}

/// `navigator.hardwareConcurrency`, or `None` if the browser hides it.
fn hardware_cores(window: &web::Window) -> Option<u32> {
    let n = window.navigator().hardware_concurrency();
    (n.is_finite() && n >= 1.0).then_some(n as u32)
}

fn checkbox(document: &web::Document, id: &str) -> Option<bool> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok())
        .map(|i| i.checked())
}

/// Overlay the page's FX checkboxes (when present) onto `base`.
fn fx_from_inputs(document: &web::Document, base: FxConfig) -> FxConfig {
    FxConfig {
        enabled: checkbox(document, FX_MASTER_ID).unwrap_or(base.enabled),
        scanlines: checkbox(document, FX_SCANLINES_ID).unwrap_or(base.scanlines),
        rgb_split_on_hover: checkbox(document, FX_RGB_SPLIT_ID).unwrap_or(base.rgb_split_on_hover),
        depth_fade: checkbox(document, FX_DEPTH_FADE_ID).unwrap_or(base.depth_fade),
        min_cores: base.min_cores,
    }
}
